use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

use crate::data::{Comment, Topic};
use crate::pages::users::role_badge;
use crate::render_context::RenderContext;
use crate::ui_utils::{accent, focused_block, input_text};

#[derive(Debug, Default)]
pub struct TopicDetailPage;

impl TopicDetailPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let Some(topic) = ctx.forum.selected_topic_live() else {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(""),
                    Line::from("No topic selected."),
                    Line::from(Span::styled(
                        "Press Esc to return to the topic list.",
                        Style::new().gray(),
                    )),
                ])
                .centered()
                .block(Block::bordered().title("Topic")),
                area,
            );
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Min(3),
                Constraint::Length(4),
            ])
            .split(area);

        self.render_header(frame, layout[0], topic, ctx);
        self.render_thread(frame, layout[1], ctx.forum.comments_for(topic.id), ctx);

        let buffer = ctx.comment_input.map(|c| c.buffer.as_str()).unwrap_or("");
        let input_title = format!(
            "Comment as {} | ↵ Send, Esc Back",
            ctx.forum.author_label()
        );
        frame.render_widget(
            Paragraph::new(input_text(buffer, ctx.view_focused()))
                .wrap(Wrap { trim: false })
                .block(focused_block(
                    &input_title,
                    ctx.view_focused(),
                    ctx.config.theme,
                )),
            layout[2],
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, topic: &Topic, ctx: &RenderContext) {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("[{}] ", topic.category), Style::new().cyan()),
                Span::styled(topic.title.as_str(), Style::new().bold()),
            ]),
            Line::from(Span::styled(
                format!(
                    "by {} | Replies {} | Views {} | Last post {}",
                    topic.author, topic.replies, topic.views, topic.last_post
                ),
                Style::new().gray(),
            )),
            Line::from(""),
        ];
        if let Some(content) = &topic.content {
            lines.extend(content.lines().map(Line::from));
        }
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }).block(
                Block::bordered()
                    .title(format!("Topic #{}", topic.id))
                    .title_style(Style::new().fg(accent(ctx.config.theme))),
            ),
            area,
        );
    }

    fn render_thread(&self, frame: &mut Frame, area: Rect, comments: &[Comment], ctx: &RenderContext) {
        let lines: Vec<Line> = if comments.is_empty() {
            vec![Line::from(Span::styled(
                "No replies yet. Be the first to comment!",
                Style::new().gray(),
            ))]
        } else {
            comments.iter().flat_map(comment_lines).collect()
        };
        let scroll = ctx
            .comment_input
            .map(|c| c.thread_scroll.offset)
            .unwrap_or(0);
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .block(Block::bordered().title(format!("Comments ({})", comments.len()))),
            area,
        );
    }
}

fn comment_lines(comment: &Comment) -> Vec<Line<'_>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("[{}] ", comment.avatar), Style::new().bold()),
        Span::styled(comment.author.as_str(), Style::new().bold()),
        Span::raw(" "),
        role_badge(comment.role),
        Span::styled(format!("  {}", comment.timestamp), Style::new().dark_gray()),
    ])];
    lines.extend(
        comment
            .content
            .lines()
            .map(|l| Line::from(format!("    {l}"))),
    );
    lines.push(Line::from(""));
    lines
}
