//! Testing utilities including mock implementations.
//!
//! Recording mocks for the three collaborator seams, so policy and loop
//! behavior can be tested without network, LLM, or SMTP access.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::classify::{parse_reply, Classification, Classify};
use crate::error::{ClassifyError, FetchError, MailError};
use crate::fetch::FetchPage;
use crate::notify::{Email, Notify};

/// Fetcher that returns a fixed page body, fails, or never resolves.
pub struct MockFetcher {
    behavior: FetchBehavior,
}

enum FetchBehavior {
    Ok(String),
    Fail,
    Hang,
}

impl MockFetcher {
    /// Always return the given HTML.
    pub fn ok(html: impl Into<String>) -> Self {
        Self {
            behavior: FetchBehavior::Ok(html.into()),
        }
    }

    /// Always fail with an HTTP 503.
    pub fn failing() -> Self {
        Self {
            behavior: FetchBehavior::Fail,
        }
    }

    /// Never resolve, simulating a stalled request.
    pub fn hanging() -> Self {
        Self {
            behavior: FetchBehavior::Hang,
        }
    }
}

#[async_trait]
impl FetchPage for MockFetcher {
    async fn fetch(&self) -> Result<String, FetchError> {
        match &self.behavior {
            FetchBehavior::Ok(html) => Ok(html.clone()),
            FetchBehavior::Fail => Err(FetchError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                url: "https://www.glimt.no".to_string(),
            }),
            FetchBehavior::Hang => std::future::pending().await,
        }
    }
}

/// Classifier that parses a canned reply, recording the texts it saw.
pub struct MockClassifier {
    reply: Option<String>,
    seen: Arc<RwLock<Vec<String>>>,
}

impl MockClassifier {
    /// Always answer with the given raw reply.
    pub fn reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            seen: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Always fail as if the service were unreachable.
    pub fn failing() -> Self {
        Self {
            reply: None,
            seen: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Handle on the texts passed to `classify`.
    pub fn seen_texts(&self) -> Arc<RwLock<Vec<String>>> {
        self.seen.clone()
    }
}

#[async_trait]
impl Classify for MockClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        self.seen.write().unwrap().push(text.to_string());
        match &self.reply {
            Some(reply) => Ok(parse_reply(reply)),
            None => Err(ClassifyError::Service(
                anthropic_client::AnthropicError::Network("connection refused".to_string()),
            )),
        }
    }
}

/// Notifier that records sent emails, or fails every call.
pub struct MockNotifier {
    sent: Arc<RwLock<Vec<Email>>>,
    fail: bool,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    /// Fail every send with an address error.
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    /// Handle on the record of sent emails.
    pub fn sent(&self) -> Arc<RwLock<Vec<Email>>> {
        self.sent.clone()
    }
}

impl Default for MockNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notify for MockNotifier {
    async fn notify(&self, email: &Email) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Address(
                "not-an-address".parse::<lettre::Address>().unwrap_err(),
            ));
        }
        self.sent.write().unwrap().push(email.clone());
        Ok(())
    }
}
