//! Bounded session bookkeeping for the chat surface.

use std::collections::VecDeque;

use thiserror::Error;

use bhujal_core::models::conversation::Conversation;
use bhujal_core::models::message::ChatRole;

/// Default number of archived conversations kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no archived session at index {index} (history has {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Owns the active conversation and a bounded most-recent-first archive of
/// completed ones. Mutated only by the single client task.
pub struct SessionStore {
    active: Conversation,
    history: VecDeque<Conversation>,
    capacity: usize,
}

impl SessionStore {
    /// `capacity` bounds the archive; the active conversation is held
    /// outside it.
    pub fn new(capacity: usize) -> Self {
        Self {
            active: Conversation::new(),
            history: VecDeque::new(),
            capacity,
        }
    }

    pub fn active(&self) -> &Conversation {
        &self.active
    }

    /// Append a message to the active conversation. O(1), infallible.
    pub fn append(&mut self, role: ChatRole, text: impl Into<String>) {
        self.active.push(role, text);
    }

    /// Archive the active conversation to the front of the history and
    /// start a fresh one, evicting the oldest archive entry beyond
    /// capacity. Empty conversations are never archived; calling this with
    /// an empty active conversation leaves the history untouched.
    pub fn start_new(&mut self) {
        if self.active.is_empty() {
            return;
        }
        let finished = std::mem::take(&mut self.active);
        self.history.push_front(finished);
        self.history.truncate(self.capacity);
    }

    /// Replace the active conversation with a copy of the archived session
    /// at `index` (0 = most recent). The archive entry stays in place;
    /// callers validate the index against [`SessionStore::list`] first.
    pub fn load(&mut self, index: usize) -> Result<(), SessionError> {
        let entry = self
            .history
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: self.history.len(),
            })?;
        self.active = entry.clone();
        Ok(())
    }

    /// Archived sessions for selection, most-recent-first, labeled by
    /// ordinal position.
    pub fn list(&self) -> Vec<(usize, String)> {
        (0..self.history.len())
            .map(|i| (i, format!("Chat {}", i + 1)))
            .collect()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn history(&self) -> impl Iterator<Item = &Conversation> {
        self.history.iter()
    }
}
