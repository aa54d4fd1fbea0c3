//! Vertical scroll offset for read-only text panes.

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    pub offset: u16,
}

impl ScrollState {
    pub fn scroll_up(&mut self, amount: u16) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scrolls down, never past `max_offset`.
    pub fn scroll_down(&mut self, amount: u16, max_offset: u16) {
        self.offset = self.offset.saturating_add(amount).min(max_offset);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_up_saturates() {
        let mut s = ScrollState { offset: 2 };
        s.scroll_up(5);
        assert_eq!(s.offset, 0);
    }

    #[test]
    fn test_scroll_down_clamps_to_max() {
        let mut s = ScrollState { offset: 8 };
        s.scroll_down(5, 10);
        assert_eq!(s.offset, 10);
    }
}
