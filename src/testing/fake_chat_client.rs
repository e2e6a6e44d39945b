use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::domain::{AppError, Role};
use crate::ports::{ChatCompletionClient, ChatMessage, ChatRequest};

enum Scripted {
    Reply(String),
    Fail { message: String, status: Option<u16> },
}

/// Chat client returning scripted replies in order and recording every
/// request. Clones share state.
#[derive(Clone, Default)]
pub struct FakeChatClient {
    replies: Rc<RefCell<VecDeque<Scripted>>>,
    requests: Rc<RefCell<Vec<(String, ChatRequest)>>>,
}

impl FakeChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, content: impl Into<String>) -> Self {
        self.replies.borrow_mut().push_back(Scripted::Reply(content.into()));
        self
    }

    pub fn with_failure(self, message: impl Into<String>, status: Option<u16>) -> Self {
        self.replies.borrow_mut().push_back(Scripted::Fail { message: message.into(), status });
        self
    }

    /// Requests received so far, with the API key each was sent with.
    pub fn requests(&self) -> Vec<(String, ChatRequest)> {
        self.requests.borrow().clone()
    }
}

impl ChatCompletionClient for FakeChatClient {
    fn complete(&self, api_key: &str, request: &ChatRequest) -> Result<ChatMessage, AppError> {
        self.requests.borrow_mut().push((api_key.to_string(), request.clone()));
        match self.replies.borrow_mut().pop_front() {
            Some(Scripted::Reply(content)) => Ok(ChatMessage { role: Role::Assistant, content }),
            Some(Scripted::Fail { message, status }) => Err(AppError::api_error(message, status)),
            None => Err(AppError::api_error("no scripted reply left", None)),
        }
    }
}
