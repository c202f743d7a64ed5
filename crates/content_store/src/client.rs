//! The store client: credentials plus transport, with a first-class disabled state.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::{
    query::read_all_by_id, ConfigError, StoreConfig, StoreError, Transport, TransportRequest,
};

enum ClientState {
    Enabled(StoreConfig),
    Disabled { reason: String },
}

/// Read-only handle to the hosted table store.
///
/// A client always constructs, even without credentials; queries on a disabled client
/// fail with [`StoreError::Disabled`] so the content loader can degrade uniformly.
pub struct StoreClient {
    state: ClientState,
    transport: Rc<dyn Transport>,
}

impl StoreClient {
    /// Wraps the credential resolution result and a transport into a client.
    pub fn connect(config: Result<StoreConfig, ConfigError>, transport: Rc<dyn Transport>) -> Self {
        let state = match config {
            Ok(config) => ClientState::Enabled(config),
            Err(err) => ClientState::Disabled {
                reason: err.to_string(),
            },
        };
        Self { state, transport }
    }

    /// Builds a client that fails every query with the given reason.
    pub fn disabled(reason: impl Into<String>, transport: Rc<dyn Transport>) -> Self {
        Self {
            state: ClientState::Disabled {
                reason: reason.into(),
            },
            transport,
        }
    }

    /// Whether queries can be issued at all.
    pub fn is_enabled(&self) -> bool {
        matches!(self.state, ClientState::Enabled(_))
    }

    /// Why the client is disabled, when it is.
    pub fn disabled_reason(&self) -> Option<&str> {
        match &self.state {
            ClientState::Enabled(_) => None,
            ClientState::Disabled { reason } => Some(reason),
        }
    }

    /// Reads all rows of `table` ordered by `id` ascending.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Disabled`] without touching the transport when no
    /// credentials are configured, and otherwise maps transport failures, non-2xx
    /// statuses, and undecodable bodies to their [`StoreError`] variants.
    pub async fn read_all_ordered<T: DeserializeOwned>(
        &self,
        table: &str,
    ) -> Result<Vec<T>, StoreError> {
        let config = match &self.state {
            ClientState::Enabled(config) => config,
            ClientState::Disabled { reason } => {
                return Err(StoreError::Disabled {
                    reason: reason.clone(),
                })
            }
        };

        let query = read_all_by_id(table);
        let url = format!("{}/{}", config.base_url(), query.to_path());
        let request = TransportRequest::get(
            url,
            vec![
                ("apikey".to_string(), config.anon_key().to_string()),
                (
                    "Authorization".to_string(),
                    format!("Bearer {}", config.anon_key()),
                ),
                ("Accept".to_string(), "application/json".to_string()),
            ],
        );

        let response =
            self.transport
                .execute(&request)
                .await
                .map_err(|message| StoreError::Transport {
                    table: table.to_string(),
                    message,
                })?;
        if !response.is_success() {
            return Err(StoreError::Status {
                table: table.to_string(),
                status: response.status,
            });
        }
        serde_json::from_str(&response.body).map_err(|err| StoreError::Decode {
            table: table.to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    use crate::{MemoryTransport, TransportResponse, ANON_KEY_VAR};

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    fn enabled_client(transport: MemoryTransport) -> StoreClient {
        StoreClient::connect(
            Ok(StoreConfig::new("https://demo.example", "public-key")),
            Rc::new(transport),
        )
    }

    #[test]
    fn read_sends_key_headers_and_decodes_rows() {
        let transport = MemoryTransport::default();
        transport.script_ok(
            "https://demo.example/rest/v1/projects?select=*&order=id.asc",
            TransportResponse::ok("[{\"id\":1},{\"id\":2}]"),
        );
        let seen = transport.clone();
        let client = enabled_client(transport);

        let rows: Vec<Row> = block_on(client.read_all_ordered("projects")).expect("rows");
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);

        let requests = seen.requests();
        assert_eq!(requests.len(), 1);
        let headers = &requests[0].headers;
        assert!(headers.contains(&("apikey".to_string(), "public-key".to_string())));
        assert!(headers.contains(&(
            "Authorization".to_string(),
            "Bearer public-key".to_string()
        )));
    }

    #[test]
    fn disabled_client_fails_without_touching_the_transport() {
        let transport = MemoryTransport::default();
        let seen = transport.clone();
        let client = StoreClient::connect(
            Err(ConfigError::MissingVariable {
                variable: ANON_KEY_VAR,
            }),
            Rc::new(transport),
        );

        assert!(!client.is_enabled());
        let err = block_on(client.read_all_ordered::<Row>("projects")).expect_err("disabled");
        assert!(matches!(err, StoreError::Disabled { .. }));
        assert!(seen.requests().is_empty());
    }

    #[test]
    fn non_success_status_maps_to_status_error() {
        let transport = MemoryTransport::default();
        transport.script_ok(
            "https://demo.example/rest/v1/certificates?select=*&order=id.asc",
            TransportResponse {
                status: 503,
                body: String::new(),
            },
        );
        let client = enabled_client(transport);

        let err = block_on(client.read_all_ordered::<Row>("certificates")).expect_err("status");
        assert_eq!(
            err,
            StoreError::Status {
                table: "certificates".to_string(),
                status: 503,
            }
        );
    }

    #[test]
    fn undecodable_body_maps_to_decode_error() {
        let transport = MemoryTransport::default();
        transport.script_ok(
            "https://demo.example/rest/v1/case_studies?select=*&order=id.asc",
            TransportResponse::ok("{\"not\":\"an array\"}"),
        );
        let client = enabled_client(transport);

        let err = block_on(client.read_all_ordered::<Row>("case_studies")).expect_err("decode");
        assert!(matches!(err, StoreError::Decode { .. }));
    }

    #[test]
    fn transport_failure_maps_to_transport_error() {
        let transport = MemoryTransport::default();
        transport.script_failure(
            "https://demo.example/rest/v1/projects?select=*&order=id.asc",
            "connection reset",
        );
        let client = enabled_client(transport);

        let err = block_on(client.read_all_ordered::<Row>("projects")).expect_err("transport");
        assert_eq!(
            err,
            StoreError::Transport {
                table: "projects".to_string(),
                message: "connection reset".to_string(),
            }
        );
    }
}
