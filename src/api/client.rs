//! JSON-over-GET client wrapping reqwest.
//!
//! Not a browser — one request per call, a fixed per-client timeout,
//! no retries. Callers decide whether a failure is fatal.

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors from a single JSON fetch.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response (DNS, connect, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// The body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// HTTP client for instance APIs.
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client with the given total request timeout.
    pub fn new(timeout: Duration) -> Self {
        let ua = format!("fedisnap/{}", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(ua)
            .build()
            .unwrap_or_default();

        Self { client }
    }

    /// GET a URL and parse the body as JSON.
    pub async fn get_json(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!(url, "GET");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json().await.map_err(|source| ApiError::Json {
            url: url.to_string(),
            source,
        })
    }
}
