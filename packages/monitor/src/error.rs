//! Typed errors for the monitor library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so each per-tick
//! failure class stays a distinct branch in the notification policy.

use thiserror::Error;

/// Errors fetching the monitored page.
///
/// A fetch failure is terminal for the tick; no retries are performed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed (connection, TLS, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Errors from the remote classification call.
///
/// Distinct from a successful-but-unclear reply: a reply that matches no
/// marker still classifies as `Verdict::Unclear`, while any transport,
/// auth, or API failure lands here.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Anthropic API call failed
    #[error("classification service error: {0}")]
    Service(#[from] anthropic_client::AnthropicError),
}

/// Errors delivering a notification email.
///
/// Callers log these and move on; a failed send never aborts a tick.
#[derive(Debug, Error)]
pub enum MailError {
    /// Address failed to parse
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be built
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    /// SMTP relay rejected the session or the send
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}
