//! Selection state for the topic list and the user roster.

use super::WINDOW_SIZE;

/// Selected row and scroll offset of a windowed list.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected row.
    pub selected_index: usize,
    /// First visible row.
    pub scroll: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the selection up one row.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.ensure_visible();
            true
        } else {
            false
        }
    }

    /// Moves the selection down one row.
    ///
    /// Returns `true` if the selection changed.
    pub fn navigate_down(&mut self, max_items: usize) -> bool {
        let max_index = max_items.saturating_sub(1);
        if self.selected_index < max_index {
            self.selected_index += 1;
            self.ensure_visible();
            true
        } else {
            false
        }
    }

    /// Jumps back to the first row.
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.scroll = 0;
    }

    fn ensure_visible(&mut self) {
        if self.selected_index < self.scroll {
            self.scroll = self.selected_index;
        } else if self.selected_index >= self.scroll + WINDOW_SIZE {
            self.scroll = self.selected_index.saturating_sub(WINDOW_SIZE - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_values() {
        let state = ListState::new();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_navigate_up_at_top() {
        let mut state = ListState::new();
        assert!(!state.navigate_up());
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_navigate_down_from_middle() {
        let mut state = ListState {
            selected_index: 2,
            ..Default::default()
        };
        assert!(state.navigate_down(5));
        assert_eq!(state.selected_index, 3);
    }

    #[test]
    fn test_navigate_down_at_bottom() {
        let mut state = ListState {
            selected_index: 4,
            ..Default::default()
        };
        assert!(!state.navigate_down(5));
        assert_eq!(state.selected_index, 4);
    }

    #[test]
    fn test_navigate_down_scrolls_window() {
        let mut state = ListState::new();
        for _ in 0..WINDOW_SIZE {
            state.navigate_down(20);
        }
        assert_eq!(state.selected_index, WINDOW_SIZE);
        assert_eq!(state.scroll, 1);
        for _ in 0..WINDOW_SIZE {
            state.navigate_up();
        }
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_reset() {
        let mut state = ListState {
            selected_index: 7,
            scroll: 2,
        };
        state.reset();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.scroll, 0);
    }
}
