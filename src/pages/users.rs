use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};

use crate::data::{Role, User};
use crate::render_context::RenderContext;
use crate::status_symbols::presence;
use crate::ui_utils::{create_list_state, focused_block, labeled};

#[derive(Debug, Default)]
pub struct UsersPage;

impl UsersPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let users = ctx.forum.users();
        let (selected, scroll) = ctx
            .user_list
            .map(|s| (s.selected_index, s.scroll))
            .unwrap_or((0, 0));

        let items: Vec<ListItem> = users.iter().map(Self::user_item).collect();
        let mut state = create_list_state(selected, scroll, users.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(focused_block("Users", ctx.view_focused(), ctx.config.theme))
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> "),
            cols[0],
            &mut state,
        );

        let details = match users.get(selected) {
            Some(u) => vec![
                Line::from(Span::styled(u.username.as_str(), Style::new().bold())),
                Line::from(""),
                Line::from(role_badge(u.role)),
                Line::from(""),
                labeled("Posts", u.posts.to_string()),
                labeled("Reputation", u.reputation.to_string()),
                labeled("Status", if u.online { "Online" } else { "Offline" }.to_string()),
            ],
            None => vec![Line::from("No users")],
        };
        frame.render_widget(
            Paragraph::new(details).block(Block::bordered().title("Profile")),
            cols[1],
        );
    }

    fn user_item(user: &User) -> ListItem<'_> {
        let presence_style = if user.online {
            Style::new().green()
        } else {
            Style::new().dark_gray()
        };
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(format!("{} ", presence(user.online)), presence_style),
                Span::styled(format!("[{:>2}] ", user.avatar), Style::new().bold()),
                Span::styled(user.username.as_str(), Style::new().bold()),
                Span::raw(" "),
                role_badge(user.role),
            ]),
            Line::from(Span::styled(
                format!("      Posts {}  Reputation {}", user.posts, user.reputation),
                Style::new().gray(),
            )),
        ])
    }
}

/// Role label on a coloured background.
pub fn role_badge(role: Role) -> Span<'static> {
    Span::styled(
        format!(" {} ", role.label()),
        Style::new().fg(Color::White).bg(role.badge_color()),
    )
}
