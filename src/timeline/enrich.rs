//! Engagement count enrichment.
//!
//! One GET per collected post against `/api/v1/statuses/{id}`. The three
//! counts are all-or-nothing per record: any failure (transport, status,
//! parse, missing or non-numeric field) nulls all three, and the run
//! continues with the next post. A fixed delay paces the calls.

use super::ScrapedPost;
use crate::api::ApiClient;
use anyhow::{Context, Result};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Derive the API base (`scheme://authority`) from the timeline URL.
pub fn api_base_from_url(timeline_url: &str) -> Result<String> {
    let url = Url::parse(timeline_url)
        .with_context(|| format!("invalid timeline URL '{timeline_url}'"))?;
    let origin = url.origin();
    anyhow::ensure!(
        matches!(origin, url::Origin::Tuple(..)),
        "timeline URL '{timeline_url}' has no host to derive an API base from"
    );
    Ok(origin.ascii_serialization())
}

pub struct EngagementEnricher {
    api: ApiClient,
    base: String,
    delay: Duration,
}

impl EngagementEnricher {
    /// `base` is `scheme://authority`, without a trailing slash.
    pub fn new(base: String, timeout: Duration, delay: Duration) -> Self {
        Self {
            api: ApiClient::new(timeout),
            base: base.trim_end_matches('/').to_string(),
            delay,
        }
    }

    /// Fill counts for every post, pacing one call per `delay`.
    pub async fn enrich_all(&self, posts: &mut [ScrapedPost]) {
        for post in posts.iter_mut() {
            let Some(id) = post.id.as_deref() else {
                continue;
            };
            let counts = self.fetch_counts(id).await;
            if counts.is_none() {
                tracing::warn!(id, "engagement fetch failed, counts left null");
            }
            let (replies, reblogs, favourites) = counts
                .map(|(r, b, f)| (Some(r), Some(b), Some(f)))
                .unwrap_or((None, None, None));
            post.replies_count = replies;
            post.reblogs_count = reblogs;
            post.favourites_count = favourites;
            tokio::time::sleep(self.delay).await;
        }
    }

    /// One status lookup; None on any failure.
    async fn fetch_counts(&self, id: &str) -> Option<(u64, u64, u64)> {
        let url = format!("{}/api/v1/statuses/{id}", self.base);
        let body = self.api.get_json(&url).await.ok()?;
        extract_counts(&body)
    }
}

fn extract_counts(body: &Value) -> Option<(u64, u64, u64)> {
    let count = |field: &str| body.get(field).and_then(Value::as_u64);
    Some((
        count("replies_count")?,
        count("reblogs_count")?,
        count("favourites_count")?,
    ))
}
