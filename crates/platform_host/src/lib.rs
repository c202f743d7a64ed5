//! Typed host-domain contracts and shared models used across runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the preference
//! store used for content snapshots and theme persistence, the session-scoped flag store,
//! and the system probe for color-scheme and viewport samples, while concrete browser
//! adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod session;
pub mod storage;
pub mod system;

pub use host::HostServices;
pub use session::{
    raise_flag, take_flag, MemorySessionStore, NoopSessionStore, SessionStore, FLAG_SET,
};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use system::{FixedSystemProbe, SystemProbe};
