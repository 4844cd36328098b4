//! Transport seam, client-side timing and lenient body decoding.
//!
//! # Design
//! - The network call hides behind [`Transport`] so the pipeline runs without a browser.
//! - Timing wraps the whole call, including reading the body text.
//! - Only [`TransportError`] escapes; a non-JSON body is wrapped, not rejected.

use crate::core::request::OutboundRequest;
use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key used to wrap response text that is not JSON.
pub const RAW_BODY_KEY: &str = "raw";

/// Terminal transport failures (network unreachable, CORS rejection, unreadable body).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be constructed by the underlying stack.
    #[error("{0}")]
    Request(String),
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The response arrived but its body could not be read as text.
    #[error("{0}")]
    Body(String),
}

/// Status and fully-read body text of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Body text, possibly empty.
    pub text: String,
}

/// Issues one HTTP call and reads the body to completion.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return once the body text has been fully read.
    ///
    /// # Errors
    /// Returns a [`TransportError`] when no response could be obtained.
    async fn send(&self, request: &OutboundRequest) -> Result<RawResponse, TransportError>;
}

/// Monotonic millisecond clock used for client-side timing.
pub trait Clock {
    /// Current timestamp in milliseconds.
    fn now_ms(&self) -> f64;
}

/// Decoded result of one call.
#[derive(Clone, Debug, PartialEq)]
pub struct InboundResult {
    /// HTTP status code.
    pub status: u16,
    /// Client-measured duration, rounded to one decimal.
    pub client_duration_ms: f64,
    /// Parsed JSON body, or `{ "raw": text }` when the body is not JSON.
    pub body: Value,
}

/// Execute `request`, timing the call and decoding the body.
///
/// # Errors
/// Propagates the transport's [`TransportError`]; nothing else fails.
#[allow(clippy::future_not_send)]
pub async fn execute<T, C>(
    transport: &T,
    clock: &C,
    request: &OutboundRequest,
) -> Result<InboundResult, TransportError>
where
    T: Transport + ?Sized,
    C: Clock + ?Sized,
{
    let started = clock.now_ms();
    let response = transport.send(request).await?;
    let elapsed = clock.now_ms() - started;
    Ok(InboundResult {
        status: response.status,
        client_duration_ms: round_tenths(elapsed),
        body: parse_body(response.text),
    })
}

/// Parse body text as JSON, wrapping it under [`RAW_BODY_KEY`] otherwise.
#[must_use]
pub fn parse_body(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or_else(|_| {
        let mut wrapper = Map::new();
        wrapper.insert(RAW_BODY_KEY.to_string(), Value::String(text));
        Value::Object(wrapper)
    })
}

fn round_tenths(ms: f64) -> f64 {
    (ms * 10.0).round() / 10.0
}
