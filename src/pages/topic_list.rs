use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::data::Topic;
use crate::forum::ForumStats;
use crate::render_context::RenderContext;
use crate::status_symbols::PINNED;
use crate::ui_utils::{accent, focused_block};

#[derive(Debug, Default)]
pub struct TopicListPage;

impl TopicListPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(area);

        let topics = ctx.forum.topics();
        let (selected, scroll) = ctx
            .topic_list
            .map(|s| (s.selected_index, s.scroll))
            .unwrap_or((0, 0));

        let header = Row::new(["Topic", "Replies", "Views", "Last post"])
            .style(Style::new().bold().gray());
        let rows: Vec<Row> = topics.iter().map(Self::topic_row).collect();
        let widths = [
            Constraint::Min(30),
            Constraint::Length(8),
            Constraint::Length(8),
            Constraint::Length(14),
        ];

        let mut state = TableState::default()
            .with_selected(Some(selected.min(topics.len().saturating_sub(1))))
            .with_offset(scroll);
        let title = format!("Latest topics ({}) | n: New topic", topics.len());
        frame.render_stateful_widget(
            Table::new(rows, widths)
                .header(header)
                .block(focused_block(&title, ctx.view_focused(), ctx.config.theme))
                .row_highlight_style(Style::new().reversed())
                .highlight_symbol(">> "),
            layout[0],
            &mut state,
        );

        self.render_stats(frame, layout[1], ctx.forum.stats(), ctx);
    }

    fn topic_row(topic: &Topic) -> Row<'_> {
        let marker = if topic.pinned {
            Span::styled(format!("{PINNED} "), Style::new().yellow())
        } else {
            Span::raw("  ")
        };
        let title = Line::from(vec![
            marker,
            Span::styled(topic.title.as_str(), Style::new().bold()),
            Span::raw("  "),
            Span::styled(format!("[{}]", topic.category), Style::new().cyan()),
            Span::styled(format!(" by {}", topic.author), Style::new().gray()),
        ]);
        let row = Row::new(vec![
            Cell::from(title),
            Cell::from(topic.replies.to_string()),
            Cell::from(topic.views.to_string()).style(Style::new().gray()),
            Cell::from(topic.last_post.as_str()).style(Style::new().gray()),
        ]);
        if topic.pinned {
            row.style(Style::new().bg(Color::Rgb(30, 30, 40)))
        } else {
            row
        }
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, stats: ForumStats, ctx: &RenderContext) {
        let line = Line::from(vec![
            Span::raw(format!("Topics: {}    ", stats.topics)),
            Span::raw(format!("Messages: {}    ", stats.messages)),
            Span::raw(format!("Members: {}    ", stats.members)),
            Span::styled(format!("Online: {}", stats.online), Style::new().green()),
        ]);
        frame.render_widget(
            Paragraph::new(vec![Line::from(""), line]).block(
                Block::bordered()
                    .title("Forum statistics")
                    .title_style(Style::new().fg(accent(ctx.config.theme))),
            ),
            area,
        );
    }
}
