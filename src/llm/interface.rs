use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single chat message in the OpenAI wire shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum LLMError {
    /// The provider answered with a non-success status
    #[error("LLM API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("LLM returned no choices")]
    EmptyResponse,
}

/// Interface for a stateless chat completion model.
/// Every call carries its full message list; nothing is remembered between calls.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Run one non-streaming completion and return the assistant text
    async fn chat_completion(&self, messages: Vec<ChatMessage>) -> Result<String, LLMError>;
}
