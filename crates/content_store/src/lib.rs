//! Read-only client for the hosted table store behind the portfolio content.
//!
//! The client wraps the service's REST surface behind typed queries: all rows of one
//! table, ordered by `id` ascending. Credentials come from the build environment; when
//! they are absent the client constructs in a disabled state whose queries fail with
//! [`StoreError::Disabled`] instead of panicking, so the caller can degrade to cached
//! or fallback content.
//!
//! HTTP itself lives behind the [`Transport`] trait. Browser builds plug in a
//! `fetch`-backed implementation; native tests script [`MemoryTransport`].
//!
//! # Example
//!
//! ```rust
//! use content_store::{MemoryTransport, StoreClient, StoreConfig, TransportResponse};
//! use serde::Deserialize;
//! use std::rc::Rc;
//!
//! #[derive(Debug, Deserialize, PartialEq)]
//! struct Row {
//!     id: i64,
//! }
//!
//! let transport = MemoryTransport::default();
//! transport.script_ok(
//!     "https://demo.example/rest/v1/projects?select=*&order=id.asc",
//!     TransportResponse::ok("[{\"id\":1}]"),
//! );
//! let client = StoreClient::connect(
//!     Ok(StoreConfig::new("https://demo.example", "public-key")),
//!     Rc::new(transport),
//! );
//! let rows: Vec<Row> =
//!     futures::executor::block_on(client.read_all_ordered("projects")).expect("rows");
//! assert_eq!(rows, vec![Row { id: 1 }]);
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod client;
mod config;
mod error;
mod query;
mod transport;

pub use client::StoreClient;
pub use config::{ConfigError, StoreConfig, ANON_KEY_VAR, SERVICE_URL_VAR};
pub use error::StoreError;
pub use query::{read_all_by_id, TableQuery};
pub use transport::{
    MemoryTransport, Transport, TransportFuture, TransportRequest, TransportResponse,
};
