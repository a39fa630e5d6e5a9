//! Page fetching.
//!
//! One GET per tick against the monitored URL, with a hard timeout and a
//! browser User-Agent (the club site rejects default client identifiers).

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::FetchError;

/// Chrome identifier; default reqwest UA gets bot-filtered.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Fetch timeout, applied to the whole request.
const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Fetches the monitored page.
#[async_trait]
pub trait FetchPage: Send + Sync {
    /// Fetch the page body. Any failure is terminal for the tick.
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// HTTP fetcher over a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
    url: String,
}

impl HttpFetcher {
    /// Create a fetcher for the given URL with default settings.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.into(),
        }
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The URL this fetcher targets.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FetchPage for HttpFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "HTTP fetch starting");

        let response = self
            .client
            .get(&self.url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %self.url, error = %e, "HTTP request failed");
                FetchError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, status = %status, "HTTP error status");
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        debug!(url = %self.url, bytes = body.len(), "Page fetched");
        Ok(body)
    }
}
