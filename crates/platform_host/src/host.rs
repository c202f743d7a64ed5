//! Shared host-service bundle for runtime composition.

use std::rc::Rc;

use crate::{
    FixedSystemProbe, MemoryPrefsStore, MemorySessionStore, NoopPrefsStore, NoopSessionStore,
    PrefsStore, SessionStore, SystemProbe,
};

/// Host service bundle injected into the shared runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `portfolio_runtime`, which keeps the runtime and page crates decoupled from browser
/// adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Durable preference store backing content snapshots and the theme value.
    pub prefs: Rc<dyn PrefsStore>,
    /// Session-scoped store backing one-shot navigation flags.
    pub session: Rc<dyn SessionStore>,
    /// Point-in-time environment probe.
    pub system: Rc<dyn SystemProbe>,
}

impl HostServices {
    /// Bundle of no-op services for targets without a usable host.
    pub fn noop() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            session: Rc::new(NoopSessionStore),
            system: Rc::new(FixedSystemProbe::default()),
        }
    }

    /// Bundle of in-memory services for native tests.
    pub fn memory() -> Self {
        Self {
            prefs: Rc::new(MemoryPrefsStore::default()),
            session: Rc::new(MemorySessionStore::default()),
            system: Rc::new(FixedSystemProbe::default()),
        }
    }

    /// Replaces the system probe, keeping the other services.
    pub fn with_system(mut self, system: Rc<dyn SystemProbe>) -> Self {
        self.system = system;
        self
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_bundle_persists_between_handles() {
        let services = HostServices::memory();
        let cloned = services.clone();

        block_on(services.prefs.save_pref("theme", "\"light\"")).expect("save");
        assert_eq!(
            block_on(cloned.prefs.load_pref("theme")).expect("load"),
            Some("\"light\"".to_string())
        );
    }

    #[test]
    fn with_system_swaps_only_the_probe() {
        let services = HostServices::memory().with_system(Rc::new(FixedSystemProbe {
            prefers_dark: true,
            width: Some(360.0),
        }));

        assert!(services.system.prefers_dark_color_scheme());
        assert_eq!(services.system.viewport_width(), Some(360.0));
        block_on(services.prefs.save_pref("k", "1")).expect("prefs still writable");
    }
}
