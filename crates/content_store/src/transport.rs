//! HTTP transport contract and the scripted in-memory double.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`Transport`] methods.
pub type TransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// One outgoing GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Absolute request URL.
    pub url: String,
    /// Header name/value pairs sent with the request.
    pub headers: Vec<(String, String)>,
}

impl TransportRequest {
    /// Builds a GET request for `url` with the given headers.
    pub fn get(url: impl Into<String>, headers: Vec<(String, String)>) -> Self {
        Self {
            url: url.into(),
            headers,
        }
    }
}

/// Raw response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl TransportResponse {
    /// Builds a `200 OK` response around `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Whether the status code is in the success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport executing one GET request.
///
/// Errors are transport-level only (network unreachable, request construction
/// failure); a served non-2xx status is a successful transport round trip.
pub trait Transport {
    /// Executes `request` and returns the raw response.
    fn execute<'a>(
        &'a self,
        request: &'a TransportRequest,
    ) -> TransportFuture<'a, Result<TransportResponse, String>>;
}

#[derive(Debug, Clone, Default)]
/// Scripted transport for native tests, keyed by exact request URL.
pub struct MemoryTransport {
    routes: Rc<RefCell<HashMap<String, Result<TransportResponse, String>>>>,
    seen: Rc<RefCell<Vec<TransportRequest>>>,
}

impl MemoryTransport {
    /// Scripts a response for requests to `url`.
    pub fn script_ok(&self, url: impl Into<String>, response: TransportResponse) {
        self.routes.borrow_mut().insert(url.into(), Ok(response));
    }

    /// Scripts a transport-level failure for requests to `url`.
    pub fn script_failure(&self, url: impl Into<String>, message: impl Into<String>) {
        self.routes
            .borrow_mut()
            .insert(url.into(), Err(message.into()));
    }

    /// Requests executed so far, in order.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.seen.borrow().clone()
    }
}

impl Transport for MemoryTransport {
    fn execute<'a>(
        &'a self,
        request: &'a TransportRequest,
    ) -> TransportFuture<'a, Result<TransportResponse, String>> {
        Box::pin(async move {
            self.seen.borrow_mut().push(request.clone());
            match self.routes.borrow().get(&request.url) {
                Some(scripted) => scripted.clone(),
                None => Err(format!("no scripted response for {}", request.url)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn scripted_responses_replay_by_url() {
        let transport = MemoryTransport::default();
        transport.script_ok("https://demo.example/a", TransportResponse::ok("[]"));
        transport.script_failure("https://demo.example/b", "connection reset");

        let ok = block_on(transport.execute(&TransportRequest::get("https://demo.example/a", vec![])));
        assert_eq!(ok, Ok(TransportResponse::ok("[]")));

        let failed =
            block_on(transport.execute(&TransportRequest::get("https://demo.example/b", vec![])));
        assert_eq!(failed, Err("connection reset".to_string()));
    }

    #[test]
    fn unscripted_urls_fail_and_requests_are_recorded() {
        let transport = MemoryTransport::default();
        let request = TransportRequest::get("https://demo.example/missing", vec![]);

        let result = block_on(transport.execute(&request));
        assert!(result.is_err());
        assert_eq!(transport.requests(), vec![request]);
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(TransportResponse::ok("").is_success());
        assert!(TransportResponse {
            status: 204,
            body: String::new()
        }
        .is_success());
        assert!(!TransportResponse {
            status: 404,
            body: String::new()
        }
        .is_success());
    }
}
