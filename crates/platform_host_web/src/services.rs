//! Concrete browser service assembly for the site entry layer.

use std::rc::Rc;

use content_store::{StoreClient, StoreConfig};
use platform_host::HostServices;

use crate::{FetchTransport, WebPrefsStore, WebSessionStore, WebSystemProbe};

/// Bundles the browser-backed host services injected into the runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        prefs: Rc::new(WebPrefsStore),
        session: Rc::new(WebSessionStore),
        system: Rc::new(WebSystemProbe),
    }
}

/// Builds the table-store client from build-time credentials and the fetch
/// transport. Missing credentials yield a disabled client, not an error.
pub fn build_content_client() -> StoreClient {
    StoreClient::connect(StoreConfig::from_build_env(), Rc::new(FetchTransport))
}
