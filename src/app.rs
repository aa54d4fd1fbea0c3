use ratatui::{DefaultTerminal, Frame};

use crate::config::ForumConfig;
use crate::data::FakeStore;
use crate::forum::{Forum, Page};
use crate::key_handler::{ActionContext, ActionProcessor, ActionStateUpdate, KeyAction, KeyHandler};
use crate::render_context::RenderContext;
use crate::screen::{Screen, MENU_ITEMS};
use crate::state::{CommentInputState, ListState, ScrollState, TopicFormState};
use crate::status_symbols;

/// Upper bound for scrolling read-only panes; the renderer clamps further.
const MAX_SCROLL: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    View,
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    config: ForumConfig,
    forum: Forum,
    focus: Focus,
    menu_selected_index: usize,
    status_message: String,
    show_help: bool,
    topic_list: ListState,
    user_list: ListState,
    rules_scroll: ScrollState,
    topic_form: TopicFormState,
    comment_input: CommentInputState,
}

impl App {
    pub fn new(config: ForumConfig) -> Self {
        let forum = Forum::from_store(FakeStore::new(), config.author_label.clone());
        Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            topic_form: TopicFormState::new(config.default_category),
            config,
            forum,
            focus: Focus::View,
            menu_selected_index: 0,
            status_message: String::from("Ready | Press ? for help"),
            show_help: false,
            topic_list: ListState::new(),
            user_list: ListState::new(),
            rules_scroll: ScrollState::default(),
            comment_input: CommentInputState::new(),
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        tracing::info!(forum = %self.config.forum_name, "session started");
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            let action = self.key_handler.handle_crossterm_events()?;
            if self.handle_action(action) {
                self.quit();
            }
        }
        tracing::info!(
            topics = self.forum.topics().len(),
            comments = self.forum.comment_count(),
            "session ended"
        );
        Ok(())
    }

    fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext::new(&self.config, &self.forum, &self.status_message)
            .with_focus(self.focus, self.menu_selected_index)
            .with_help(self.show_help)
            .with_topic_list(&self.topic_list)
            .with_user_list(&self.user_list)
            .with_rules_scroll(self.rules_scroll.offset)
            .with_topic_form(&self.topic_form)
            .with_comment_input(&self.comment_input);
        self.screen.render(frame, &ctx);
    }

    pub fn forum(&self) -> &Forum {
        &self.forum
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn topic_form(&self) -> &TopicFormState {
        &self.topic_form
    }

    pub fn comment_input(&self) -> &CommentInputState {
        &self.comment_input
    }

    pub fn topic_list(&self) -> &ListState {
        &self.topic_list
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    fn update_status_message(&mut self) {
        self.status_message = match self.forum.page() {
            Page::Home => format!(
                "Topics: {} (↑↓ Select, ↵ Open, n New topic)",
                self.forum
                    .topics()
                    .get(self.topic_list.selected_index)
                    .map(|t| t.title.as_str())
                    .unwrap_or("N/A")
            ),
            Page::Users => format!(
                "Users: {} (↑↓ Select)",
                self.forum
                    .users()
                    .get(self.user_list.selected_index)
                    .map(|u| u.username.as_str())
                    .unwrap_or("N/A")
            ),
            Page::Rules => "Rules (↑↓ Scroll, PgUp/PgDn Page)".to_string(),
            Page::Topic => match self.forum.selected_topic() {
                Some(t) => format!("Topic #{} (type to comment, ↵ Send, Esc Back)", t.id),
                None => "No topic selected (Esc Back)".to_string(),
            },
        };
    }

    /// Processes one action. Returns `true` when the application should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        let ctx = ActionContext {
            focus: self.focus,
            page: self.forum.page(),
            show_help: self.show_help,
            dialog_open: self.topic_form.open,
            dialog_field: self.topic_form.field,
            menu_selected_index: self.menu_selected_index,
            menu_len: MENU_ITEMS.len(),
            has_selected_topic: self.forum.selected_topic().is_some(),
        };

        let (result, update) = ActionProcessor::process(action, &ctx);

        let command_status = self.apply_action_updates(update);

        if let Some(msg) = command_status.or(result.status_message) {
            self.status_message = msg;
        } else {
            self.update_status_message();
        }

        result.should_quit
    }

    /// Applies requested changes. Returns a status message produced by a command.
    fn apply_action_updates(&mut self, update: ActionStateUpdate) -> Option<String> {
        if let Some(focus) = update.focus {
            self.focus = focus;
        }
        if let Some(page) = update.page {
            self.navigate(page);
        }
        if let Some(help) = update.show_help {
            self.show_help = help;
        }
        if let Some(idx) = update.menu_selected_index {
            self.menu_selected_index = idx.min(MENU_ITEMS.len().saturating_sub(1));
        }

        if update.topic_list_up.is_some() {
            self.topic_list.navigate_up();
        }
        if update.topic_list_down.is_some() {
            self.topic_list.navigate_down(self.forum.topics().len());
        }
        if update.user_list_up.is_some() {
            self.user_list.navigate_up();
        }
        if update.user_list_down.is_some() {
            self.user_list.navigate_down(self.forum.users().len());
        }

        if let Some(amount) = update.rules_scroll_up {
            self.rules_scroll.scroll_up(amount);
        }
        if let Some(amount) = update.rules_scroll_down {
            self.rules_scroll.scroll_down(amount, MAX_SCROLL);
        }
        if let Some(amount) = update.thread_scroll_up {
            self.comment_input.thread_scroll.scroll_up(amount);
        }
        if let Some(amount) = update.thread_scroll_down {
            self.comment_input.thread_scroll.scroll_down(amount, MAX_SCROLL);
        }

        if update.open_topic_dialog.is_some() {
            self.topic_form.open();
        }
        if update.close_topic_dialog.is_some() {
            self.topic_form.close();
        }
        if update.form_next_field.is_some() {
            self.topic_form.next_field();
        }
        if update.form_prev_field.is_some() {
            self.topic_form.prev_field();
        }
        if update.form_category_next.is_some() {
            self.topic_form.next_category();
        }
        if update.form_category_prev.is_some() {
            self.topic_form.prev_category();
        }
        if let Some(c) = update.form_append {
            self.topic_form.append_char(c);
        }
        if update.form_pop.is_some() {
            self.topic_form.pop_char();
        }

        if let Some(c) = update.comment_append {
            self.comment_input.append_char(c);
        }
        if update.comment_pop.is_some() {
            self.comment_input.pop_char();
        }

        // Commands
        let mut status = None;
        if update.open_selected_topic.is_some() {
            status = self.open_selected_topic();
        }
        if update.submit_topic.is_some() {
            status = self.submit_topic();
        }
        if update.submit_comment.is_some() {
            status = self.submit_comment();
        }
        status
    }

    fn navigate(&mut self, page: Page) {
        if page != self.forum.page() {
            self.rules_scroll.reset();
        }
        self.forum.navigate(page);
        self.menu_selected_index = page.menu_index();
    }

    fn quit(&mut self) {
        self.running = false;
    }

    fn open_selected_topic(&mut self) -> Option<String> {
        let topic = self
            .forum
            .topics()
            .get(self.topic_list.selected_index)
            .cloned()?;
        // A draft belongs to the topic it was typed under.
        if self.forum.selected_topic().map(|t| t.id) != Some(topic.id) {
            self.comment_input.clear();
        }
        self.forum.open_topic(&topic);
        self.comment_input.thread_scroll.reset();
        None
    }

    fn submit_topic(&mut self) -> Option<String> {
        let id = self.forum.create_topic(
            &self.topic_form.title,
            self.topic_form.category,
            &self.topic_form.content,
        )?;
        self.topic_form.reset_and_close();
        self.topic_list.reset();
        Some(status_symbols::success(&format!("Published topic #{id}")))
    }

    fn submit_comment(&mut self) -> Option<String> {
        if self.comment_input.is_empty() {
            return None;
        }
        let id = self.forum.add_comment(&self.comment_input.buffer)?;
        self.comment_input.clear();
        Some(status_symbols::success(&format!("Comment #{id} posted")))
    }
}
