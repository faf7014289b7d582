//! Append-only conversation log.

use cropcast_core::types::Message;

/// Ordered sequence of messages for one conversation session.
///
/// Insertion order is display order. The log is append-only and owns its
/// messages; it lives for the UI session and is dropped with it (no
/// persistence).
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a log seeded with the assistant greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        let mut log = Self::new();
        log.append(Message::assistant(greeting.to_string()));
        log
    }

    /// Append a message to the end of the log.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
