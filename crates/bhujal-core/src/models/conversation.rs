use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::message::{ChatMessage, ChatRole};

/// One continuous exchange between the user and the assistant.
///
/// Owned exclusively by the session store while active; archived copies
/// live in the bounded session history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub started_at: jiff::Timestamp,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            messages: Vec::new(),
            started_at: jiff::Timestamp::now(),
        }
    }

    /// Append a message to the end of the exchange.
    pub fn push(&mut self, role: ChatRole, text: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, text));
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
