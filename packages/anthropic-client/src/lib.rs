//! Pure Anthropic REST API client
//!
//! A clean, minimal client for the Anthropic Messages API with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use anthropic_client::{AnthropicClient, MessagesRequest, Message};
//!
//! let client = AnthropicClient::from_env()?;
//!
//! let response = client
//!     .create_message(
//!         MessagesRequest::new("claude-3-sonnet-20240229", 500)
//!             .message(Message::user("Hello!")),
//!     )
//!     .await?;
//!
//! println!("{}", response.text);
//! ```

pub mod error;
pub mod types;

pub use error::{AnthropicError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Pure Anthropic API client.
#[derive(Clone)]
pub struct AnthropicClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl AnthropicClient {
    /// Create a new Anthropic client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: "https://api.anthropic.com/v1".to_string(),
        }
    }

    /// Create from environment variable `ANTHROPIC_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .map_err(|_| AnthropicError::Config("ANTHROPIC_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, test servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a message.
    ///
    /// Sends the request to the Messages API and returns the concatenated
    /// text of the response content blocks.
    pub async fn create_message(&self, request: MessagesRequest) -> Result<MessagesResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", types::ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Anthropic request failed");
                AnthropicError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Anthropic API error");

            // Prefer the structured error message when the body parses
            let detail = serde_json::from_str::<types::ErrorResponseRaw>(&error_text)
                .map(|e| format!("{}: {}", e.error.error_type, e.error.message))
                .unwrap_or(error_text);
            return Err(AnthropicError::Api(format!(
                "Anthropic API error ({}): {}",
                status, detail
            )));
        }

        let raw: types::MessagesResponseRaw = response
            .json()
            .await
            .map_err(|e| AnthropicError::Parse(e.to_string()))?;

        let text: String = raw
            .content
            .iter()
            .filter(|block| block.block_type == "text")
            .map(|block| block.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(AnthropicError::Api("No text content from Anthropic".into()));
        }

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            input_tokens = raw.usage.as_ref().map(|u| u.input_tokens),
            output_tokens = raw.usage.as_ref().map(|u| u.output_tokens),
            "Anthropic message created"
        );

        Ok(MessagesResponse {
            text,
            usage: raw.usage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = AnthropicClient::new("sk-ant-test")
            .with_base_url("https://custom.api.com/v1");

        assert_eq!(client.api_key, "sk-ant-test");
        assert_eq!(client.base_url(), "https://custom.api.com/v1");
    }

    #[test]
    fn test_default_base_url() {
        let client = AnthropicClient::new("sk-ant-test");
        assert_eq!(client.base_url(), "https://api.anthropic.com/v1");
    }
}
