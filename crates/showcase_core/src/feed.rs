//! Works-list feed client.
//!
//! One HTTP GET against the site's `works_list.json`, issued exactly once
//! per application run by the shell's boot task. There is no retry, no
//! backoff, and no cache invalidation - consumers share the single
//! resolved value. Transport, status, and decode failures are kept as
//! distinct error kinds.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::{FeedSettings, SiteSettings};
use crate::models::WorkRecord;

/// Errors that can occur while retrieving the works list.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("works list request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("works list request returned status {0}")]
    Status(StatusCode),

    /// The payload was not a valid works list.
    #[error("failed to decode works list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the works-list feed.
#[derive(Debug, Clone)]
pub struct WorksFeed {
    client: Client,
    works_url: String,
}

impl WorksFeed {
    /// Build a feed client from configuration.
    pub fn new(site: &SiteSettings, feed: &FeedSettings) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(feed.timeout_secs))
            .build()?;

        let works_url = format!(
            "{}/{}",
            site.base_url.trim_end_matches('/'),
            feed.works_path.trim_start_matches('/')
        );

        Ok(Self { client, works_url })
    }

    /// The fully assembled feed URL.
    pub fn works_url(&self) -> &str {
        &self.works_url
    }

    /// Retrieve and decode the works list.
    ///
    /// The body is read as text and decoded separately so a malformed
    /// payload surfaces as `FeedError::Decode`, not a transport error.
    pub async fn fetch(&self) -> Result<Vec<WorkRecord>, FeedError> {
        debug!("fetching works list from {}", self.works_url);

        let response = self.client.get(&self.works_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status));
        }

        let body = response.text().await?;
        let works: Vec<WorkRecord> = serde_json::from_str(&body)?;
        debug!("works list resolved with {} records", works.len());
        Ok(works)
    }
}
