use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, ListState},
};

use crate::config::Theme;

/// Creates a ListState with proper bounds checking and scrolling
pub fn create_list_state(selected: usize, scroll: usize, item_count: usize) -> ListState {
    ListState::default()
        .with_selected(Some(selected.min(item_count.saturating_sub(1))))
        .with_offset(scroll)
}

/// Creates a block with conditional focus styling (accent border when focused)
pub fn focused_block(title: &str, is_focused: bool, theme: Theme) -> Block<'_> {
    let block = Block::bordered().title(title);
    if is_focused {
        block.border_style(Style::new().fg(accent(theme)))
    } else {
        block
    }
}

/// Accent colour for headings and focused borders.
pub fn accent(theme: Theme) -> Color {
    match theme {
        Theme::Default => Color::Cyan,
        Theme::HighContrast => Color::Yellow,
    }
}

/// Renders `label: value` with the label dimmed.
pub fn labeled<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::new().gray()),
        Span::raw(value),
    ])
}

/// Rect of `percent_x` by `percent_y` centred inside `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Input line with a trailing cursor marker when active.
pub fn input_text(value: &str, active: bool) -> String {
    if active {
        format!("{value}█")
    } else {
        value.to_string()
    }
}
