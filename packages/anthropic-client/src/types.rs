//! Anthropic Messages API request and response types.

use serde::{Deserialize, Serialize};

/// API version header value required by the Messages API.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// =============================================================================
// Messages
// =============================================================================

/// Messages API request.
#[derive(Debug, Clone, Serialize)]
pub struct MessagesRequest {
    /// Model to use (e.g., "claude-3-sonnet-20240229")
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Conversation messages
    pub messages: Vec<Message>,

    /// System prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Sampling temperature (0.0 to 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl MessagesRequest {
    /// Create a new request with the given model and token budget.
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages: Vec::new(),
            system: None,
            temperature: None,
        }
    }

    /// Add a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Set the system prompt.
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Chat message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role: "user" or "assistant"
    pub role: String,

    /// Message content
    pub content: String,
}

impl Message {
    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Messages API response.
#[derive(Debug, Clone)]
pub struct MessagesResponse {
    /// Concatenated text of all text content blocks
    pub text: String,

    /// Token usage statistics
    pub usage: Option<Usage>,
}

/// Raw response from the API (for internal parsing).
#[derive(Debug, Deserialize)]
pub(crate) struct MessagesResponseRaw {
    pub content: Vec<ContentBlock>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub text: String,
}

/// Token usage statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens in the prompt
    pub input_tokens: u32,

    /// Tokens in the completion
    pub output_tokens: u32,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponseRaw {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let user = Message::user("Hello");
        assert_eq!(user.role, "user");

        let assistant = Message::assistant("Hi there");
        assert_eq!(assistant.role, "assistant");
    }

    #[test]
    fn test_request_builder() {
        let req = MessagesRequest::new("claude-3-sonnet-20240229", 500)
            .message(Message::user("Hello"))
            .temperature(0.2);

        assert_eq!(req.model, "claude-3-sonnet-20240229");
        assert_eq!(req.max_tokens, 500);
        assert_eq!(req.messages.len(), 1);
        assert_eq!(req.temperature, Some(0.2));
        assert!(req.system.is_none());
    }

    #[test]
    fn test_request_serialization_skips_empty_options() {
        let req = MessagesRequest::new("claude-3-sonnet-20240229", 500)
            .message(Message::user("Hello"));

        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("system").is_none());
        assert!(json.get("temperature").is_none());
        assert_eq!(json["max_tokens"], 500);
    }

    #[test]
    fn test_response_raw_deserialization() {
        let raw: MessagesResponseRaw = serde_json::from_str(
            r#"{
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "content": [{"type": "text", "text": "NO_TICKETS - members only"}],
                "usage": {"input_tokens": 120, "output_tokens": 18}
            }"#,
        )
        .unwrap();

        assert_eq!(raw.content.len(), 1);
        assert_eq!(raw.content[0].block_type, "text");
        assert_eq!(raw.content[0].text, "NO_TICKETS - members only");
        assert_eq!(raw.usage.as_ref().unwrap().input_tokens, 120);
    }

    #[test]
    fn test_error_response_deserialization() {
        let raw: ErrorResponseRaw = serde_json::from_str(
            r#"{
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            }"#,
        )
        .unwrap();

        assert_eq!(raw.error.error_type, "authentication_error");
        assert_eq!(raw.error.message, "invalid x-api-key");
    }
}
