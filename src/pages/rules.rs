use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::forum::Page;
use crate::render_context::RenderContext;
use crate::ui_utils::{accent, focused_block};

/// Numbered forum rules: (heading, body).
pub const RULES: [(&str, &str); 5] = [
    (
        "Respect other members",
        "Insults, threats and discrimination of any kind are forbidden. Treat other \
         members the way you would like to be treated.",
    ),
    (
        "Forbidden content",
        "Adult material and the promotion of violence, extremism or drugs are not allowed. \
         Spam and advertising of third-party resources without permission are forbidden.",
    ),
    (
        "Creating topics and posts",
        "Create topics in the matching section and use clear titles. Flooding, off-topic \
         posts and duplicate topics are forbidden. Write clearly and to the point.",
    ),
    (
        "Accounts and security",
        "One person, one account. Sharing or hacking accounts and using bots is forbidden. \
         Do not publish other members' personal data.",
    ),
    (
        "Moderation",
        "Decisions of moderators and administrators are binding. If you disagree, contact \
         the administration privately instead of opening a public topic.",
    ),
];

pub const VIOLATION_NOTICE: &str = "Breaking the rules leads to sanctions: a warning, a temporary \
    or a permanent ban. The administration decides which penalty applies in each case.";

/// Date the rules were last revised.
pub fn last_updated() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, 12, 15)
}

#[derive(Debug, Default)]
pub struct RulesPage;

impl RulesPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let accent = accent(ctx.config.theme);
        let mut lines = vec![
            Line::from(Span::styled("Forum rules", Style::new().bold().fg(accent))).centered(),
            Line::from(Span::styled(
                "Please read the rules before using the forum",
                Style::new().gray(),
            ))
            .centered(),
            Line::from(""),
        ];

        for (i, (heading, body)) in RULES.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::new().bold().reversed()),
                Span::raw(" "),
                Span::styled(*heading, Style::new().bold()),
            ]));
            lines.push(Line::from(Span::styled(*body, Style::new().gray())));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("⚠ Rule violations", Style::new().bold().red())));
        lines.push(Line::from(Span::styled(VIOLATION_NOTICE, Style::new().gray())));
        lines.push(Line::from(""));
        if let Some(date) = last_updated() {
            lines.push(
                Line::from(Span::styled(
                    format!("Rules last updated: {}", date.format("%-d %B %Y")),
                    Style::new().dark_gray(),
                ))
                .centered(),
            );
        }

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((ctx.rules_scroll, 0))
                .block(focused_block(Page::Rules.title(), ctx.view_focused(), ctx.config.theme)),
            area,
        );
    }
}
