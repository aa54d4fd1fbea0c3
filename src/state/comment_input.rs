//! Comment entry on the topic detail page.

use super::ScrollState;

/// Comment being typed plus the scroll position of the thread above it.
#[derive(Debug, Clone, Default)]
pub struct CommentInputState {
    pub buffer: String,
    pub thread_scroll: ScrollState,
}

impl CommentInputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_char(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Removes the last character.
    ///
    /// Returns `true` if a character was removed.
    pub fn pop_char(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns `true` if the buffer is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.buffer.trim().is_empty()
    }
}
