//! Remote generative-language capability for gembot.
//!
//! Provides:
//! - The `AiClient` trait and a Gemini implementation
//! - `Session`, which keeps the conversation history between turns
//! - `Connector`, a factory that turns an explicit `GeminiConfig` into a
//!   ready `Conversation`
//! - Token usage tracking

pub mod connector;
pub mod gemini;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use connector::{Connector, Conversation, GeminiConnector};
pub use gemini::{GeminiClient, GeminiConfig};
pub use session::Session;
pub use token_tracker::TokenTracker;

#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Failure of the remote capability, tagged by where it went wrong.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// The client could not be configured (credential, model, HTTP stack).
    #[error("setup error: {0}")]
    Setup(String),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The service answered, but not with a usable reply.
    #[error("service error: {0}")]
    RemoteService(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_error_display_names_kind_and_detail() {
        let err = AiError::Setup("API key must not be empty".into());
        assert_eq!(err.to_string(), "setup error: API key must not be empty");

        let err = AiError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = AiError::RemoteService("HTTP 503: overloaded".into());
        assert_eq!(err.to_string(), "service error: HTTP 503: overloaded");
    }

    #[test]
    fn total_tokens_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
        assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    }
}
