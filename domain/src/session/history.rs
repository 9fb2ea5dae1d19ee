//! Append-only conversation history

use crate::session::entities::Message;
use serde::Serialize;

/// Ordered, append-only log of exchanges for the session's lifetime
///
/// Length only grows during a session; insertion order is chronological
/// order and the last message is always the most recently appended one.
/// An empty history is a valid state. Serializes transparently as a JSON
/// array of messages.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed exchange
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The most recently appended message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
