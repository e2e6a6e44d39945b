//! Append-only conversation log with synchronous change listeners.

use std::fmt;

use crate::domain::Message;

/// Handle returned by [`ConversationHistory::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&[Message])>;

/// Ordered message log that forms the context window of every API request.
///
/// Entries are never edited, reordered, or removed individually; the only way
/// the sequence shrinks is [`ConversationHistory::clear`].
#[derive(Default)]
pub struct ConversationHistory {
    messages: Vec<Message>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl fmt::Debug for ConversationHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversationHistory")
            .field("messages", &self.messages)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener invoked after every mutation with the full sequence.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&[Message]) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.notify();
    }

    pub fn clear(&mut self) {
        self.messages.clear();
        self.notify();
    }

    pub fn snapshot(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.messages);
        }
    }
}
