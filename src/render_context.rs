use crate::app::Focus;
use crate::config::ForumConfig;
use crate::forum::Forum;
use crate::state::{CommentInputState, ListState, TopicFormState};

/// Centralized context for rendering pages, reducing parameter proliferation
pub struct RenderContext<'a> {
    pub config: &'a ForumConfig,
    pub forum: &'a Forum,
    pub status: &'a str,

    // Focus and menu
    pub focus: Focus,
    pub menu_selected_index: usize,
    pub show_help: bool,

    // Page state
    pub topic_list: Option<&'a ListState>,
    pub user_list: Option<&'a ListState>,
    pub rules_scroll: u16,
    pub topic_form: Option<&'a TopicFormState>,
    pub comment_input: Option<&'a CommentInputState>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a ForumConfig, forum: &'a Forum, status: &'a str) -> Self {
        Self {
            config,
            forum,
            status,
            focus: Focus::View,
            menu_selected_index: 0,
            show_help: false,
            topic_list: None,
            user_list: None,
            rules_scroll: 0,
            topic_form: None,
            comment_input: None,
        }
    }

    /// Builder method to set focus and menu selection
    pub fn with_focus(mut self, focus: Focus, menu_selected_index: usize) -> Self {
        self.focus = focus;
        self.menu_selected_index = menu_selected_index;
        self
    }

    /// Builder method to set help overlay visibility
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Builder method to set topic list selection
    pub fn with_topic_list(mut self, state: &'a ListState) -> Self {
        self.topic_list = Some(state);
        self
    }

    /// Builder method to set user list selection
    pub fn with_user_list(mut self, state: &'a ListState) -> Self {
        self.user_list = Some(state);
        self
    }

    /// Builder method to set the rules page scroll offset
    pub fn with_rules_scroll(mut self, offset: u16) -> Self {
        self.rules_scroll = offset;
        self
    }

    /// Builder method to set the new-topic dialog state
    pub fn with_topic_form(mut self, form: &'a TopicFormState) -> Self {
        self.topic_form = Some(form);
        self
    }

    /// Builder method to set the comment box state
    pub fn with_comment_input(mut self, input: &'a CommentInputState) -> Self {
        self.comment_input = Some(input);
        self
    }

    pub fn view_focused(&self) -> bool {
        self.focus == Focus::View
    }
}
