//! Ticket availability classification.
//!
//! Sends extracted page text to the Anthropic Messages API and maps the
//! reply to a categorical verdict by scanning for literal marker
//! substrings. The marker scan is a pure function so the fragile text
//! matching stays independently testable.

use async_trait::async_trait;
use tracing::{debug, info};

use anthropic_client::{AnthropicClient, Message, MessagesRequest};

use crate::error::ClassifyError;

/// Model used for analysis.
const CLASSIFIER_MODEL: &str = "claude-3-sonnet-20240229";

/// Token budget for the reply; a marker plus a short explanation.
const CLASSIFIER_MAX_TOKENS: u32 = 500;

/// Instruction prompt. `{content}` is replaced with the extracted page text.
const ANALYZE_PROMPT: &str = r#"Please analyze this content from the Bodø/Glimt website and determine if there are tickets available for ordinary people (not season ticket holders or members) for the Tottenham match.

Look for:
1. Any mentions of "Tottenham" or "Spurs" matches
2. Ticket availability information
3. General sale information (not just for members/season ticket holders)
4. Any indication that tickets are on sale to the public

Website content:
{content}

Respond with either:
- "TICKETS_AVAILABLE" if there are tickets available for ordinary people for the Tottenham match
- "NO_TICKETS" if no tickets are available or only for members/season ticket holders
- "NO_INFO" if there's no clear information about Tottenham match tickets

Also provide a brief explanation of what you found."#;

/// Categorical verdict on public ticket availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Tickets are on general public sale
    Available,

    /// No tickets, or members/season-ticket holders only
    NotAvailable,

    /// No clear information about the match on the page
    NoInfo,

    /// Reply matched none of the expected markers
    Unclear,
}

/// A classification: the verdict plus the model's raw reply as rationale.
#[derive(Debug, Clone)]
pub struct Classification {
    pub verdict: Verdict,
    pub rationale: String,
}

/// Map a raw model reply to a classification.
///
/// Literal substring scan in fixed priority order: a reply containing
/// both "TICKETS_AVAILABLE" and "NO_TICKETS" resolves to `Available`.
/// The whole reply is kept as the rationale.
pub fn parse_reply(reply: &str) -> Classification {
    let verdict = if reply.contains("TICKETS_AVAILABLE") {
        Verdict::Available
    } else if reply.contains("NO_TICKETS") {
        Verdict::NotAvailable
    } else if reply.contains("NO_INFO") {
        Verdict::NoInfo
    } else {
        Verdict::Unclear
    };

    Classification {
        verdict,
        rationale: reply.to_string(),
    }
}

/// Classifies extracted page text.
#[async_trait]
pub trait Classify: Send + Sync {
    /// Classify the page text. Transport/auth/API failures are errors,
    /// distinct from a successful reply that parses as `Unclear`.
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError>;
}

/// Classifier backed by the Anthropic Messages API.
pub struct ClaudeClassifier {
    client: AnthropicClient,
    model: String,
}

impl ClaudeClassifier {
    /// Create a classifier with the default model.
    pub fn new(client: AnthropicClient) -> Self {
        Self {
            client,
            model: CLASSIFIER_MODEL.to_string(),
        }
    }

    /// Override the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl Classify for ClaudeClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, ClassifyError> {
        let prompt = ANALYZE_PROMPT.replace("{content}", text);

        debug!(model = %self.model, text_chars = text.chars().count(), "Requesting analysis");

        let response = self
            .client
            .create_message(
                MessagesRequest::new(&self.model, CLASSIFIER_MAX_TOKENS)
                    .message(Message::user(prompt)),
            )
            .await?;

        info!(reply = %response.text, "Claude analysis");

        Ok(parse_reply(&response.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_available() {
        let c = parse_reply("TICKETS_AVAILABLE - general sale opens now");
        assert_eq!(c.verdict, Verdict::Available);
        assert_eq!(c.rationale, "TICKETS_AVAILABLE - general sale opens now");
    }

    #[test]
    fn test_parse_no_tickets() {
        let c = parse_reply("NO_TICKETS - only members can purchase");
        assert_eq!(c.verdict, Verdict::NotAvailable);
    }

    #[test]
    fn test_parse_no_info() {
        let c = parse_reply("NO_INFO: the page does not mention the match");
        assert_eq!(c.verdict, Verdict::NoInfo);
    }

    #[test]
    fn test_parse_unclear_keeps_whole_reply() {
        let c = parse_reply("I am not sure what this page says.");
        assert_eq!(c.verdict, Verdict::Unclear);
        assert_eq!(c.rationale, "I am not sure what this page says.");
    }

    #[test]
    fn test_parse_priority_available_wins() {
        // Both markers present: priority order resolves to Available
        let c = parse_reply("NO_TICKETS for members, but TICKETS_AVAILABLE for the public");
        assert_eq!(c.verdict, Verdict::Available);
    }

    #[test]
    fn test_parse_priority_no_tickets_over_no_info() {
        let c = parse_reply("NO_TICKETS. Elsewhere NO_INFO was found.");
        assert_eq!(c.verdict, Verdict::NotAvailable);
    }

    #[test]
    fn test_prompt_embeds_content() {
        let prompt = ANALYZE_PROMPT.replace("{content}", "Kamper: Tottenham");
        assert!(prompt.contains("Kamper: Tottenham"));
        assert!(!prompt.contains("{content}"));
    }
}
