use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::ui_utils::centered_rect;

#[derive(Debug, Default)]
pub struct HelpPage;

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let area = centered_rect(70, 80, area);
        frame.render_widget(Clear, area);
        // Fill the overlay to avoid a transparent background bleeding through
        frame.render_widget(Block::default().style(Style::new().bg(Color::Black)), area);

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(area);

        let key = |k: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("{k:<12}"), Style::new().bold().cyan()),
                Span::raw(desc),
            ])
        };

        let nav_help = vec![
            key("↑↓", "Navigate items / scroll"),
            key("PgUp PgDn", "Scroll rules and comments"),
            key("Tab", "Next page (next field in dialogs)"),
            key("Shift-Tab", "Previous page (previous field)"),
            key("Enter / ↵", "Open topic / send comment"),
            key("Esc", "Back, then menu, then quit"),
            key("q / Ctrl-C", "Quit"),
        ];
        frame.render_widget(
            Paragraph::new(nav_help).block(Block::bordered().title("Navigation")),
            sections[0],
        );

        let action_help = vec![
            Line::from(vec![
                Span::styled("Topics", Style::new().bold().magenta()),
                Span::raw("   Press "),
                Span::styled("n", Style::new().bold()),
                Span::raw(" to create a topic"),
            ]),
            Line::from(vec![
                Span::styled("Dialog", Style::new().bold().magenta()),
                Span::raw("   ←→ change category, "),
                Span::styled("Ctrl-S", Style::new().bold()),
                Span::raw(" publish"),
            ]),
            Line::from(vec![
                Span::styled("Topic", Style::new().bold().magenta()),
                Span::raw("    Type to write a comment, "),
                Span::styled("Enter", Style::new().bold()),
                Span::raw(" to send"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(action_help).block(Block::bordered().title("Actions")),
            sections[1],
        );

        let tips = vec![
            Line::from("💡 Empty titles, contents and comments are ignored"),
            Line::from("💡 Closing the dialog with Esc keeps your draft"),
            Line::from("💡 Everything lives in memory and is gone when you quit"),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Tips")),
            sections[2],
        );
    }
}
