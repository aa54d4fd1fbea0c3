use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    widgets::{Block, List, ListState},
    Frame,
};

use crate::app::Focus;
use crate::config::Theme;
use crate::ui_utils::accent;

/// Persistent destinations, in `Page::menu_index` order.
pub const MENU_ITEMS: [&str; 3] = ["Topics", "Users", "Rules"];

#[derive(Debug, Default)]
pub struct MainMenu;

impl MainMenu {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, selected_index: usize, focus: Focus, theme: Theme) {
        let mut state = ListState::default().with_selected(Some(selected_index));

        let block = if focus == Focus::Menu {
            Block::bordered()
                .title("Menu")
                .border_style(Style::new().fg(accent(theme)))
        } else {
            Block::bordered().title("Menu")
        };

        frame.render_stateful_widget(
            List::new(MENU_ITEMS)
                .block(block)
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> ")
                .repeat_highlight_symbol(true),
            area,
            &mut state,
        );
    }
}
