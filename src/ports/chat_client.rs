//! Chat completions API port definition.

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, Message, Role};

/// One entry of the request context: role and content only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self { role: message.role(), content: message.content().to_string() }
    }
}

/// Request sent to the chat completions API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,
    /// Full ordered context, ending with the newest user turn.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Port for chat completions.
pub trait ChatCompletionClient {
    /// Send `request` authenticated with `api_key` and return the first
    /// choice's message.
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatMessage, AppError>;
}
