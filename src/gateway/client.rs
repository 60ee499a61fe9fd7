//! Upstream HTTP client.
//!
//! # Responsibilities
//! - POST a prepared payload to the JSON-RPC endpoint
//! - Turn the HTTP outcome into a `Translation` or a `GatewayError`
//! - Release the reply body on every path

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use url::Url;

use crate::gateway::types::{GatewayError, GatewayResult, Translation, UpstreamReply};
use crate::observability::metrics;

/// Content type the upstream's own client sends.
pub const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Thin wrapper over a shared `reqwest::Client` bound to one endpoint.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl UpstreamClient {
    /// Create a client for `endpoint`. `timeout` of `None` keeps the transport default.
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> GatewayResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_http(builder.build()?, endpoint))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_http(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one payload and decode the reply. Never retries.
    pub async fn exchange(&self, body: String) -> GatewayResult<Translation> {
        let start = Instant::now();
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await;
        metrics::record_upstream(start);

        let response = response?;
        let status = response.status();
        if status != StatusCode::OK {
            // Dropping the response here discards its body.
            return Err(GatewayError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        decode_reply(&bytes)?
            .into_translation()
            .ok_or(GatewayError::EmptyResult)
    }
}

/// Decode the first JSON value of an upstream reply body; trailing bytes are ignored.
fn decode_reply(bytes: &[u8]) -> GatewayResult<UpstreamReply> {
    let mut values = serde_json::Deserializer::from_slice(bytes).into_iter::<UpstreamReply>();
    match values.next() {
        Some(Ok(reply)) => Ok(reply),
        Some(Err(e)) => Err(GatewayError::Decode(e.to_string())),
        None => Err(GatewayError::Decode("empty body".to_string())),
    }
}
