use crate::app::Focus;
use crate::forum::Page;
use crate::state::FormField;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    NextView,
    PrevView,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    ScrollPageUp,
    ScrollPageDown,
    Select,
    Submit,
    Help,
    InputChar(char),
    Backspace,
    None,
}

#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_crossterm_events(&mut self) -> color_eyre::Result<KeyAction> {
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            _ => Ok(KeyAction::None),
        }
    }

    /// Maps a key press to an action without looking at application state.
    ///
    /// Plain letters always arrive as `InputChar`; whether `q` quits or is
    /// typed into a field is decided by `ActionProcessor`.
    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => KeyAction::Quit,
            (KeyModifiers::CONTROL, KeyCode::Char('s') | KeyCode::Char('S')) => KeyAction::Submit,
            (KeyModifiers::NONE, KeyCode::Esc) => KeyAction::Back,
            (KeyModifiers::NONE, KeyCode::F(1)) => KeyAction::Help,
            (KeyModifiers::NONE, KeyCode::Tab) => KeyAction::NextView,
            (_, KeyCode::BackTab) => KeyAction::PrevView,
            (KeyModifiers::NONE, KeyCode::Up) => KeyAction::NavigateUp,
            (KeyModifiers::NONE, KeyCode::Down) => KeyAction::NavigateDown,
            (KeyModifiers::NONE, KeyCode::Left) => KeyAction::NavigateLeft,
            (KeyModifiers::NONE, KeyCode::Right) => KeyAction::NavigateRight,
            (KeyModifiers::NONE, KeyCode::PageUp) => KeyAction::ScrollPageUp,
            (KeyModifiers::NONE, KeyCode::PageDown) => KeyAction::ScrollPageDown,
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Select,
            (KeyModifiers::NONE, KeyCode::Backspace) => KeyAction::Backspace,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => KeyAction::InputChar(c),
            _ => KeyAction::None,
        }
    }
}

/// Outcome of processing an action.
#[derive(Debug, Clone, Default)]
pub struct ActionResult {
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl ActionResult {
    fn quiet() -> Self {
        Self::default()
    }

    fn quit() -> Self {
        Self {
            should_quit: true,
            status_message: None,
        }
    }

    fn status(msg: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            status_message: Some(msg.into()),
        }
    }
}

/// Snapshot of application state the processor decides on.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub focus: Focus,
    pub page: Page,
    pub show_help: bool,
    pub dialog_open: bool,
    pub dialog_field: FormField,
    pub menu_selected_index: usize,
    pub menu_len: usize,
    pub has_selected_topic: bool,
}

impl ActionContext {
    /// True when plain characters are typed into the comment box.
    fn comment_entry_active(&self) -> bool {
        self.focus == Focus::View && self.page == Page::Topic && self.has_selected_topic
    }
}

/// Stateless action processor: takes action + context, returns result + requested state changes
pub struct ActionProcessor;

impl ActionProcessor {
    pub fn process(action: KeyAction, ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        if action == KeyAction::Quit {
            return (ActionResult::quit(), ActionStateUpdate::none());
        }
        if ctx.show_help {
            return Self::handle_help_overlay(action);
        }
        if ctx.dialog_open {
            return Self::handle_dialog(action, ctx);
        }
        if ctx.comment_entry_active() {
            if let Some(handled) = Self::handle_comment_entry(&action) {
                return handled;
            }
        }

        match action {
            KeyAction::Quit => (ActionResult::quit(), ActionStateUpdate::none()),
            KeyAction::Help | KeyAction::InputChar('?') => (
                ActionResult::quiet(),
                ActionStateUpdate {
                    show_help: Some(true),
                    ..Default::default()
                },
            ),
            KeyAction::InputChar('q') => (ActionResult::quit(), ActionStateUpdate::none()),
            KeyAction::InputChar('n') if ctx.page == Page::Home => (
                ActionResult::status("New topic: Tab next field, Ctrl-S publish, Esc close"),
                ActionStateUpdate {
                    open_topic_dialog: Some(()),
                    focus: Some(Focus::View),
                    ..Default::default()
                },
            ),
            KeyAction::Back => Self::handle_back(ctx),
            KeyAction::NextView | KeyAction::PrevView => Self::handle_cycle(action, ctx),
            KeyAction::Select => Self::handle_select(ctx),
            KeyAction::NavigateUp => Self::handle_navigate_up(ctx),
            KeyAction::NavigateDown => Self::handle_navigate_down(ctx),
            KeyAction::ScrollPageUp => Self::handle_page_scroll(ctx, true),
            KeyAction::ScrollPageDown => Self::handle_page_scroll(ctx, false),
            KeyAction::NavigateLeft
            | KeyAction::NavigateRight
            | KeyAction::Submit
            | KeyAction::InputChar(_)
            | KeyAction::Backspace
            | KeyAction::None => (ActionResult::quiet(), ActionStateUpdate::none()),
        }
    }

    fn handle_help_overlay(action: KeyAction) -> (ActionResult, ActionStateUpdate) {
        match action {
            KeyAction::Back | KeyAction::Help | KeyAction::InputChar('?') => (
                ActionResult::quiet(),
                ActionStateUpdate {
                    show_help: Some(false),
                    ..Default::default()
                },
            ),
            _ => (ActionResult::quiet(), ActionStateUpdate::none()),
        }
    }

    fn handle_dialog(action: KeyAction, ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        let update = match action {
            KeyAction::Back => {
                return (
                    ActionResult::status("Draft kept, press n to continue"),
                    ActionStateUpdate {
                        close_topic_dialog: Some(()),
                        ..Default::default()
                    },
                )
            }
            KeyAction::NextView => ActionStateUpdate {
                form_next_field: Some(()),
                ..Default::default()
            },
            KeyAction::PrevView => ActionStateUpdate {
                form_prev_field: Some(()),
                ..Default::default()
            },
            KeyAction::NavigateLeft | KeyAction::NavigateUp
                if ctx.dialog_field == FormField::Category =>
            {
                ActionStateUpdate {
                    form_category_prev: Some(()),
                    ..Default::default()
                }
            }
            KeyAction::NavigateRight | KeyAction::NavigateDown
                if ctx.dialog_field == FormField::Category =>
            {
                ActionStateUpdate {
                    form_category_next: Some(()),
                    ..Default::default()
                }
            }
            KeyAction::Select if ctx.dialog_field == FormField::Content => ActionStateUpdate {
                form_append: Some('\n'),
                ..Default::default()
            },
            KeyAction::Select => ActionStateUpdate {
                form_next_field: Some(()),
                ..Default::default()
            },
            KeyAction::InputChar(c) if ctx.dialog_field.is_text() => ActionStateUpdate {
                form_append: Some(c),
                ..Default::default()
            },
            KeyAction::Backspace => ActionStateUpdate {
                form_pop: Some(()),
                ..Default::default()
            },
            KeyAction::Submit => ActionStateUpdate {
                submit_topic: Some(()),
                ..Default::default()
            },
            _ => ActionStateUpdate::none(),
        };
        (ActionResult::quiet(), update)
    }

    /// Keys consumed by the comment box. Anything else falls through to the
    /// page-level handling.
    fn handle_comment_entry(action: &KeyAction) -> Option<(ActionResult, ActionStateUpdate)> {
        let update = match action {
            KeyAction::InputChar(c) => ActionStateUpdate {
                comment_append: Some(*c),
                ..Default::default()
            },
            KeyAction::Backspace => ActionStateUpdate {
                comment_pop: Some(()),
                ..Default::default()
            },
            KeyAction::Select | KeyAction::Submit => ActionStateUpdate {
                submit_comment: Some(()),
                ..Default::default()
            },
            _ => return None,
        };
        Some((ActionResult::quiet(), update))
    }

    fn handle_back(ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        if ctx.focus == Focus::Menu {
            return (ActionResult::quit(), ActionStateUpdate::none());
        }
        if ctx.page == Page::Topic {
            return (
                ActionResult::quiet(),
                ActionStateUpdate {
                    page: Some(Page::Home),
                    menu_selected_index: Some(Page::Home.menu_index()),
                    ..Default::default()
                },
            );
        }
        (
            ActionResult::status("Menu: ↑↓ to choose, ↵ to open, Esc/q to quit"),
            ActionStateUpdate {
                focus: Some(Focus::Menu),
                ..Default::default()
            },
        )
    }

    fn handle_cycle(action: KeyAction, ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        let forward = action == KeyAction::NextView;
        if ctx.focus == Focus::Menu {
            let len = ctx.menu_len.max(1);
            let next_idx = if forward {
                (ctx.menu_selected_index + 1) % len
            } else {
                (ctx.menu_selected_index + len - 1) % len
            };
            return (
                ActionResult::quiet(),
                ActionStateUpdate {
                    menu_selected_index: Some(next_idx),
                    ..Default::default()
                },
            );
        }
        let next_page = if forward {
            ctx.page.next()
        } else {
            ctx.page.prev()
        };
        (
            ActionResult::quiet(),
            ActionStateUpdate {
                page: Some(next_page),
                menu_selected_index: Some(next_page.menu_index()),
                ..Default::default()
            },
        )
    }

    fn handle_select(ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        if ctx.focus == Focus::Menu {
            return (
                ActionResult::quiet(),
                ActionStateUpdate {
                    focus: Some(Focus::View),
                    page: Some(Page::from_menu_index(ctx.menu_selected_index)),
                    ..Default::default()
                },
            );
        }
        let update = match ctx.page {
            Page::Home => ActionStateUpdate {
                open_selected_topic: Some(()),
                ..Default::default()
            },
            _ => ActionStateUpdate::none(),
        };
        (ActionResult::quiet(), update)
    }

    fn handle_navigate_up(ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        if ctx.focus == Focus::Menu {
            let next_idx = ctx.menu_selected_index.saturating_sub(1);
            return (
                ActionResult::quiet(),
                ActionStateUpdate {
                    menu_selected_index: Some(next_idx),
                    ..Default::default()
                },
            );
        }
        let update = match ctx.page {
            Page::Home => ActionStateUpdate {
                topic_list_up: Some(()),
                ..Default::default()
            },
            Page::Users => ActionStateUpdate {
                user_list_up: Some(()),
                ..Default::default()
            },
            Page::Rules => ActionStateUpdate {
                rules_scroll_up: Some(1),
                ..Default::default()
            },
            Page::Topic => ActionStateUpdate {
                thread_scroll_up: Some(1),
                ..Default::default()
            },
        };
        (ActionResult::quiet(), update)
    }

    fn handle_navigate_down(ctx: &ActionContext) -> (ActionResult, ActionStateUpdate) {
        if ctx.focus == Focus::Menu {
            let max = ctx.menu_len.saturating_sub(1);
            let next_idx = (ctx.menu_selected_index + 1).min(max);
            return (
                ActionResult::quiet(),
                ActionStateUpdate {
                    menu_selected_index: Some(next_idx),
                    ..Default::default()
                },
            );
        }
        let update = match ctx.page {
            Page::Home => ActionStateUpdate {
                topic_list_down: Some(()),
                ..Default::default()
            },
            Page::Users => ActionStateUpdate {
                user_list_down: Some(()),
                ..Default::default()
            },
            Page::Rules => ActionStateUpdate {
                rules_scroll_down: Some(1),
                ..Default::default()
            },
            Page::Topic => ActionStateUpdate {
                thread_scroll_down: Some(1),
                ..Default::default()
            },
        };
        (ActionResult::quiet(), update)
    }

    fn handle_page_scroll(ctx: &ActionContext, up: bool) -> (ActionResult, ActionStateUpdate) {
        const PAGE: u16 = 5;
        let update = match (ctx.page, up) {
            (Page::Rules, true) => ActionStateUpdate {
                rules_scroll_up: Some(PAGE),
                ..Default::default()
            },
            (Page::Rules, false) => ActionStateUpdate {
                rules_scroll_down: Some(PAGE),
                ..Default::default()
            },
            (Page::Topic, true) => ActionStateUpdate {
                thread_scroll_up: Some(PAGE),
                ..Default::default()
            },
            (Page::Topic, false) => ActionStateUpdate {
                thread_scroll_down: Some(PAGE),
                ..Default::default()
            },
            _ => ActionStateUpdate::none(),
        };
        (ActionResult::quiet(), update)
    }
}

/// Structural representation of state changes requested by action handlers
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ActionStateUpdate {
    // Focus and navigation
    pub focus: Option<Focus>,
    pub page: Option<Page>,
    pub show_help: Option<bool>,
    pub menu_selected_index: Option<usize>,

    // List selection
    pub topic_list_up: Option<()>,
    pub topic_list_down: Option<()>,
    pub user_list_up: Option<()>,
    pub user_list_down: Option<()>,

    // Scroll state
    pub rules_scroll_up: Option<u16>,
    pub rules_scroll_down: Option<u16>,
    pub thread_scroll_up: Option<u16>,
    pub thread_scroll_down: Option<u16>,

    // New-topic dialog
    pub open_topic_dialog: Option<()>,
    pub close_topic_dialog: Option<()>,
    pub form_next_field: Option<()>,
    pub form_prev_field: Option<()>,
    pub form_category_next: Option<()>,
    pub form_category_prev: Option<()>,
    pub form_append: Option<char>,
    pub form_pop: Option<()>,

    // Comment box
    pub comment_append: Option<char>,
    pub comment_pop: Option<()>,

    // Commands
    pub open_selected_topic: Option<()>,
    pub submit_topic: Option<()>,
    pub submit_comment: Option<()>,
}

impl ActionStateUpdate {
    pub fn none() -> Self {
        Self::default()
    }
}
