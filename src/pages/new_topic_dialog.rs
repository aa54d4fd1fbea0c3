use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use crate::config::Theme;
use crate::state::{FormField, TopicFormState};
use crate::ui_utils::{accent, centered_rect, focused_block, input_text};

#[derive(Debug, Default)]
pub struct NewTopicDialog;

impl NewTopicDialog {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &TopicFormState, theme: Theme) {
        let area = centered_rect(70, 70, area);
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .title("Create topic")
            .title_style(Style::new().bold().fg(accent(theme)))
            .style(Style::new().bg(Color::Black));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let title_active = form.field == FormField::Title;
        frame.render_widget(
            Paragraph::new(input_text(&form.title, title_active))
                .block(focused_block("Title", title_active, theme)),
            layout[0],
        );

        let category_active = form.field == FormField::Category;
        let category = Line::from(vec![
            Span::styled("◀ ", Style::new().gray()),
            Span::styled(form.category.label(), Style::new().bold()),
            Span::styled(" ▶", Style::new().gray()),
        ]);
        frame.render_widget(
            Paragraph::new(category).block(focused_block("Category", category_active, theme)),
            layout[1],
        );

        let content_active = form.field == FormField::Content;
        frame.render_widget(
            Paragraph::new(input_text(&form.content, content_active))
                .wrap(Wrap { trim: false })
                .block(focused_block("Content", content_active, theme)),
            layout[2],
        );

        let publish_style = if form.is_submittable() {
            Style::new().bold().green()
        } else {
            Style::new().dark_gray()
        };
        frame.render_widget(
            Line::from(vec![
                Span::styled("Tab next field · ←→ category · ", Style::new().gray()),
                Span::styled("Ctrl-S publish", publish_style),
                Span::styled(" · Esc close", Style::new().gray()),
            ]),
            layout[3],
        );
    }
}
