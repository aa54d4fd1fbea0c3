use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Block,
    Frame,
};

use crate::forum::Page;
use crate::pages::help::HelpPage;
use crate::pages::main_menu::MainMenu;
use crate::pages::new_topic_dialog::NewTopicDialog;
use crate::pages::rules::RulesPage;
use crate::pages::topic_detail::TopicDetailPage;
use crate::pages::topic_list::TopicListPage;
use crate::pages::users::UsersPage;
use crate::render_context::RenderContext;
use crate::ui_utils::accent;

pub use crate::pages::main_menu::MENU_ITEMS;

#[derive(Debug, Default)]
pub struct Screen {
    main_menu: MainMenu,
    topic_list: TopicListPage,
    users: UsersPage,
    rules: RulesPage,
    topic_detail: TopicDetailPage,
    new_topic: NewTopicDialog,
    help: HelpPage,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            main_menu: MainMenu::new(),
            topic_list: TopicListPage::new(),
            users: UsersPage::new(),
            rules: RulesPage::new(),
            topic_detail: TopicDetailPage::new(),
            new_topic: NewTopicDialog::new(),
            help: HelpPage::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, ctx: &RenderContext) {
        let area = frame.area();
        let theme = ctx.config.theme;
        let title = Line::from(vec![
            Span::styled(
                format!(" {} ", ctx.config.forum_name),
                Style::new().bold().fg(accent(theme)),
            ),
            Span::styled(format!("· {} ", ctx.config.tagline), Style::new().gray()),
        ])
        .left_aligned();
        let block = Block::bordered().title(title);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Main content, footer, status bar
        let vlayout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)],
        )
        .split(inner_area);

        // Inside main content, split into menu and page area
        let layout = Layout::new(
            Direction::Horizontal,
            [Constraint::Length(18), Constraint::Min(0)],
        )
        .split(vlayout[0]);

        self.main_menu
            .render(frame, layout[0], ctx.menu_selected_index, ctx.focus, theme);
        match ctx.forum.page() {
            Page::Home => self.topic_list.render(frame, layout[1], ctx),
            Page::Users => self.users.render(frame, layout[1], ctx),
            Page::Rules => self.rules.render(frame, layout[1], ctx),
            Page::Topic => self.topic_detail.render(frame, layout[1], ctx),
        }

        let footer = Line::from(vec![
            Span::raw(format!("© 2024 {}. All rights reserved.", ctx.config.forum_name)),
            Span::styled("   Support · Telegram", Style::new().dark_gray()),
        ])
        .gray();
        frame.render_widget(footer, vlayout[1]);

        let status_line = Line::from(format!(
            "{}  |  Tab: Switch page  ?: Help  Esc/q: Quit",
            ctx.status
        ))
        .on_dark_gray()
        .white();
        frame.render_widget(status_line, vlayout[2]);

        if let Some(form) = ctx.topic_form.filter(|f| f.open) {
            self.new_topic.render(frame, area, form, theme);
        }
        if ctx.show_help {
            self.help.render(frame, area);
        }
    }
}
