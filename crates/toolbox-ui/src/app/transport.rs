//! Browser fetch transport and monotonic clock.

use crate::core::request::OutboundRequest;
use crate::core::transport::{Clock, RawResponse, Transport, TransportError};
use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Sends requests through `window.fetch`.
pub(crate) struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<RawResponse, TransportError> {
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Request("window unavailable".to_string()))?;
        let init = RequestInit::new();
        init.set_method(&request.method);
        init.set_mode(RequestMode::Cors);

        let headers = Headers::new().map_err(|err| TransportError::Request(describe(&err)))?;
        for (name, value) in &request.headers {
            headers
                .set(name, value)
                .map_err(|err| TransportError::Request(describe(&err)))?;
        }
        init.set_headers(&headers);
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let fetch_request = Request::new_with_str_and_init(&request.url, &init)
            .map_err(|err| TransportError::Request(describe(&err)))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(|err| TransportError::Network(describe(&err)))?
            .dyn_into()
            .map_err(|_| TransportError::Network("fetch did not yield a response".to_string()))?;

        let text_promise = response
            .text()
            .map_err(|err| TransportError::Body(describe(&err)))?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(|err| TransportError::Body(describe(&err)))?
            .as_string()
            .unwrap_or_default();
        Ok(RawResponse {
            status: response.status(),
            text,
        })
    }
}

/// Reads `performance.now()`, or wall-clock time when unavailable.
pub(crate) struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map_or_else(js_sys::Date::now, |performance| performance.now())
    }
}

/// Message for a rejected JS promise, e.g. `TypeError: Failed to fetch`.
fn describe(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.to_string()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
