//! The three documented instance endpoints.
//!
//! All three are unauthenticated GETs against one base URL. A failed
//! fetch here is fatal to the instance export — no partial workbooks.

use super::client::{ApiClient, ApiError};
use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Resolve a host argument to a base URL.
///
/// A bare hostname ("mastodon.social") defaults to https; anything with a
/// scheme is used verbatim.
pub fn base_url(host: &str) -> Result<Url> {
    let candidate = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{host}")
    };
    Url::parse(&candidate).with_context(|| format!("invalid instance host '{host}'"))
}

/// Client for one instance's metadata endpoints.
pub struct InstanceClient {
    api: ApiClient,
    base: Url,
}

impl InstanceClient {
    pub fn new(host: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(timeout),
            base: base_url(host)?,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        // join cannot fail for these fixed absolute paths once base parsed
        self.base
            .join(path)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| format!("{}{path}", self.base))
    }

    /// GET `/api/v2/instance` — arbitrary nested metadata document.
    pub async fn snapshot(&self) -> Result<Value, ApiError> {
        self.api.get_json(&self.endpoint("/api/v2/instance")).await
    }

    /// GET `/api/v1/instance/activity` — weekly activity records.
    pub async fn activity(&self) -> Result<Value, ApiError> {
        self.api
            .get_json(&self.endpoint("/api/v1/instance/activity"))
            .await
    }

    /// GET `/api/v1/instance/peers` — federated peer domains.
    pub async fn peers(&self) -> Result<Value, ApiError> {
        self.api
            .get_json(&self.endpoint("/api/v1/instance/peers"))
            .await
    }
}
