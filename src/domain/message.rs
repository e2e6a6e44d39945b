//! Conversation turn models.

use serde::{Deserialize, Serialize};

use crate::domain::Dialect;

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One turn in the conversation.
///
/// `language` is only set on assistant turns, the role that produces
/// executable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    role: Role,
    content: String,
    language: Option<Dialect>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), language: None }
    }

    pub fn assistant(content: impl Into<String>, language: Dialect) -> Self {
        Self { role: Role::Assistant, content: content.into(), language: Some(language) }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn language(&self) -> Option<Dialect> {
        self.language
    }
}

/// Transient input of one synthesis call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisRequest {
    pub task_text: String,
    pub dialect: Dialect,
}

impl SynthesisRequest {
    pub fn new(task_text: impl Into<String>, dialect: Dialect) -> Self {
        Self { task_text: task_text.into(), dialect }
    }
}

/// The assistant turn returned by a synthesis call, identical to the one
/// appended to the history.
pub type SynthesisResult = Message;
