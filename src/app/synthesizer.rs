//! Conversation-driven script synthesis.

use crate::domain::{
    AppError, ConversationHistory, Credentials, ListenerId, Message, PromptTemplateEngine,
    SynthesisRequest, SynthesisResult, TemplateRenderer,
};
use crate::ports::{ChatCompletionClient, ChatMessage, ChatRequest, ClipboardWriter};
use crate::services::MinijinjaTemplateRenderer;

/// Model identifier sent with every request.
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Upper bound on generated tokens per reply.
pub const MAX_OUTPUT_TOKENS: u32 = 2048;

/// Turns task descriptions into scripts through a multi-turn chat.
///
/// Owns the conversation history. Every request carries the whole history,
/// so the context grows until [`CommandSynthesizer::clear_history`] is called.
pub struct CommandSynthesizer<C, W, R = MinijinjaTemplateRenderer>
where
    C: ChatCompletionClient,
    W: ClipboardWriter,
    R: TemplateRenderer,
{
    client: C,
    clipboard: W,
    prompts: PromptTemplateEngine<R>,
    credentials: Credentials,
    history: ConversationHistory,
}

impl<C, W> CommandSynthesizer<C, W>
where
    C: ChatCompletionClient,
    W: ClipboardWriter,
{
    pub fn new(client: C, clipboard: W, credentials: Credentials) -> Self {
        Self::with_prompts(
            client,
            clipboard,
            PromptTemplateEngine::new(MinijinjaTemplateRenderer::new()),
            credentials,
        )
    }
}

impl<C, W, R> CommandSynthesizer<C, W, R>
where
    C: ChatCompletionClient,
    W: ClipboardWriter,
    R: TemplateRenderer,
{
    pub fn with_prompts(
        client: C,
        clipboard: W,
        prompts: PromptTemplateEngine<R>,
        credentials: Credentials,
    ) -> Self {
        Self { client, clipboard, prompts, credentials, history: ConversationHistory::new() }
    }

    /// Request a script for `request` and record both turns.
    ///
    /// Credential and prompt failures leave the history untouched. Once the
    /// user turn is appended it stays, even if the API call fails.
    pub fn synthesize(&mut self, request: &SynthesisRequest) -> Result<SynthesisResult, AppError> {
        if !self.credentials.is_configured() {
            return Err(AppError::MissingCredential);
        }

        let prompt = self.prompts.render(&request.task_text, request.dialect)?;
        self.history.append(Message::user(prompt));

        let chat_request = ChatRequest {
            model: CHAT_MODEL.to_string(),
            messages: self.history.snapshot().iter().map(ChatMessage::from).collect(),
            max_tokens: MAX_OUTPUT_TOKENS,
        };
        let reply = self.client.complete(self.credentials.api_key(), &chat_request)?;

        let message = Message::assistant(reply.content, request.dialect);
        self.history.append(message.clone());

        if let Err(err) = self.clipboard.write_text(message.content()) {
            tracing::warn!("could not copy reply to clipboard: {err}");
        }

        Ok(message)
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&[Message]) + 'static,
    {
        self.history.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.history.unsubscribe(id)
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replace the API key used for subsequent requests.
    pub fn update_credentials(&mut self, api_key: impl Into<String>) {
        self.credentials.update(api_key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dialect, Role};
    use crate::testing::{FakeChatClient, MockClipboard};

    fn synthesizer(
        client: &FakeChatClient,
        clipboard: &MockClipboard,
        key: &str,
    ) -> CommandSynthesizer<FakeChatClient, MockClipboard> {
        CommandSynthesizer::new(client.clone(), clipboard.clone(), Credentials::new(key))
    }

    #[test]
    fn empty_key_fails_before_any_mutation() {
        let client = FakeChatClient::new().with_reply("sphere()");
        let mut synth = synthesizer(&client, &MockClipboard::new(), "");

        let err = synth
            .synthesize(&SynthesisRequest::new("create a sphere", Dialect::MaxScript))
            .unwrap_err();

        assert!(matches!(err, AppError::MissingCredential));
        assert_eq!(synth.history().len(), 0);
        assert!(client.requests().is_empty());
    }

    #[test]
    fn success_appends_user_and_assistant_turns() {
        let client = FakeChatClient::new().with_reply("box length:10");
        let clipboard = MockClipboard::new();
        let mut synth = synthesizer(&client, &clipboard, "validkey");

        let result =
            synth.synthesize(&SynthesisRequest::new("create a box", Dialect::MaxScript)).unwrap();

        assert_eq!(synth.history().len(), 2);
        assert_eq!(result.role(), Role::Assistant);
        assert_eq!(result.language(), Some(Dialect::MaxScript));
        assert_eq!(result.content(), "box length:10");
        assert_eq!(synth.history().last(), Some(&result));

        let first = &synth.history().snapshot()[0];
        assert_eq!(first.role(), Role::User);
        assert_eq!(first.language(), None);
        assert!(first.content().contains("create a box"));

        assert_eq!(clipboard.get_written_text().as_deref(), Some("box length:10"));
    }

    #[test]
    fn request_uses_fixed_model_token_bound_and_key() {
        let client = FakeChatClient::new().with_reply("box()");
        let mut synth = synthesizer(&client, &MockClipboard::new(), "validkey");

        synth.synthesize(&SynthesisRequest::new("create a box", Dialect::Python)).unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        let (key, request) = &requests[0];
        assert_eq!(key, "validkey");
        assert_eq!(request.model, CHAT_MODEL);
        assert_eq!(request.max_tokens, 2048);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, Role::User);
    }

    #[test]
    fn second_request_carries_full_transcript() {
        let client = FakeChatClient::new().with_reply("box()").with_reply("sphere()");
        let mut synth = synthesizer(&client, &MockClipboard::new(), "validkey");

        synth.synthesize(&SynthesisRequest::new("create a box", Dialect::MaxScript)).unwrap();
        synth.synthesize(&SynthesisRequest::new("now a sphere", Dialect::MaxScript)).unwrap();

        let requests = client.requests();
        let second = &requests[1].1;
        let roles: Vec<Role> = second.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(second.messages[1].content, "box()");
        assert!(second.messages[2].content.contains("now a sphere"));
        assert_eq!(synth.history().len(), 4);
    }

    #[test]
    fn api_failure_keeps_the_spent_user_turn() {
        let client = FakeChatClient::new().with_failure("Incorrect API key provided", Some(401));
        let clipboard = MockClipboard::new();
        let mut synth = synthesizer(&client, &clipboard, "badkey");

        let err =
            synth.synthesize(&SynthesisRequest::new("create a box", Dialect::MaxScript)).unwrap_err();

        assert!(matches!(err, AppError::ApiError { status: Some(401), .. }));
        assert_eq!(synth.history().len(), 1);
        assert_eq!(synth.history().last().map(Message::role), Some(Role::User));
        assert_eq!(clipboard.get_written_text(), None);
    }

    #[test]
    fn clipboard_failure_does_not_fail_synthesis() {
        let client = FakeChatClient::new().with_reply("box()");
        let clipboard = MockClipboard::new();
        clipboard.set_should_fail(true);
        let mut synth = synthesizer(&client, &clipboard, "validkey");

        let result = synth.synthesize(&SynthesisRequest::new("create a box", Dialect::MaxScript));

        assert!(result.is_ok());
        assert_eq!(synth.history().len(), 2);
    }

    #[test]
    fn updated_credentials_apply_to_next_request() {
        let client = FakeChatClient::new().with_reply("box()");
        let mut synth = synthesizer(&client, &MockClipboard::new(), "");

        synth.update_credentials("fresh-key");
        synth.synthesize(&SynthesisRequest::new("create a box", Dialect::MaxScript)).unwrap();

        assert_eq!(client.requests()[0].0, "fresh-key");
        assert!(synth.credentials().is_configured());
    }

    #[test]
    fn listeners_observe_each_turn_and_clear() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let client = FakeChatClient::new().with_reply("box()");
        let mut synth = synthesizer(&client, &MockClipboard::new(), "validkey");
        let lengths = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&lengths);
        synth.subscribe(move |messages| seen.borrow_mut().push(messages.len()));

        synth.synthesize(&SynthesisRequest::new("create a box", Dialect::MaxScript)).unwrap();
        synth.clear_history();

        assert_eq!(*lengths.borrow(), vec![1, 2, 0]);
        assert!(synth.history().is_empty());
    }
}
