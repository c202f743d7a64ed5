//! `fetch`-backed transport for the hosted table store.

use content_store::{Transport, TransportFuture, TransportRequest, TransportResponse};

#[derive(Debug, Clone, Copy, Default)]
/// Browser transport issuing GET requests through `window.fetch`.
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
async fn execute_fetch(request: &TransportRequest) -> Result<TransportResponse, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;

    let init = web_sys::RequestInit::new();
    init.set_method("GET");
    let outgoing = web_sys::Request::new_with_str_and_init(&request.url, &init)
        .map_err(|e| format!("request construction failed: {e:?}"))?;
    for (name, value) in &request.headers {
        outgoing
            .headers()
            .set(name, value)
            .map_err(|e| format!("header {name} rejected: {e:?}"))?;
    }

    let response = JsFuture::from(window.fetch_with_request(&outgoing))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| "fetch returned a non-Response value".to_string())?;

    let body_promise = response
        .text()
        .map_err(|e| format!("response body unreadable: {e:?}"))?;
    let body = JsFuture::from(body_promise)
        .await
        .map_err(|e| format!("response body unreadable: {e:?}"))?;

    Ok(TransportResponse {
        status: response.status(),
        body: body.as_string().unwrap_or_default(),
    })
}

impl Transport for FetchTransport {
    fn execute<'a>(
        &'a self,
        request: &'a TransportRequest,
    ) -> TransportFuture<'a, Result<TransportResponse, String>> {
        #[cfg(target_arch = "wasm32")]
        {
            Box::pin(execute_fetch(request))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Box::pin(async move {
                let _ = request;
                Err("fetch transport requires a browser host".to_string())
            })
        }
    }
}
