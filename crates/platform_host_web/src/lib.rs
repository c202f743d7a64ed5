//! Browser (`wasm32`) implementations of the [`platform_host`] service contracts.
//!
//! Every adapter also compiles on native targets, where it degrades to an
//! inert value: reads come back empty and writes fail or succeed silently,
//! matching the contract's no-op adapters. That keeps the crates above this
//! one testable without a browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod fetch;
pub mod prefs;
pub mod services;
pub mod session;
pub mod system;

pub use fetch::FetchTransport;
pub use prefs::WebPrefsStore;
pub use services::{build_content_client, build_host_services};
pub use session::WebSessionStore;
pub use system::WebSystemProbe;
