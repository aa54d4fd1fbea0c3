//! Forum view-state controller.
//!
//! Owns the topic list, the per-topic comment threads, the current page and
//! the selected topic. Every operation runs to completion synchronously;
//! invalid input is ignored and reported to the caller as `None`.

use std::collections::BTreeMap;

use crate::data::{avatar_initial, Category, Comment, FakeStore, Role, Topic, User, JUST_NOW};

/// Page currently shown in the content pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Users,
    Rules,
    Topic,
}

impl Page {
    /// Next persistent destination; topic detail is never reached by cycling.
    pub fn next(self) -> Self {
        use Page::*;
        match self {
            Home | Topic => Users,
            Users => Rules,
            Rules => Home,
        }
    }

    pub fn prev(self) -> Self {
        use Page::*;
        match self {
            Home | Topic => Rules,
            Users => Home,
            Rules => Users,
        }
    }

    pub fn menu_index(self) -> usize {
        match self {
            Page::Home | Page::Topic => 0,
            Page::Users => 1,
            Page::Rules => 2,
        }
    }

    pub fn from_menu_index(index: usize) -> Self {
        match index {
            1 => Page::Users,
            2 => Page::Rules,
            _ => Page::Home,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Latest topics",
            Page::Users => "Users",
            Page::Rules => "Forum rules",
            Page::Topic => "Topic",
        }
    }
}

/// Forum-wide counters derived from current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ForumStats {
    pub topics: usize,
    pub messages: u64,
    pub members: usize,
    pub online: usize,
}

#[derive(Debug, Clone)]
pub struct Forum {
    page: Page,
    topics: Vec<Topic>,
    users: Vec<User>,
    comments: BTreeMap<u32, Vec<Comment>>,
    comment_count: usize,
    selected_topic: Option<Topic>,
    author_label: String,
}

impl Default for Forum {
    fn default() -> Self {
        Self::new()
    }
}

impl Forum {
    /// Forum seeded with the mock content, posting as "You".
    pub fn new() -> Self {
        Self::from_store(FakeStore::new(), "You")
    }

    pub fn from_store(store: FakeStore, author_label: impl Into<String>) -> Self {
        let comment_count = store.comments.len();
        let mut comments: BTreeMap<u32, Vec<Comment>> = BTreeMap::new();
        for (topic_id, comment) in store.comments {
            comments.entry(topic_id).or_default().push(comment);
        }
        Self {
            page: Page::Home,
            topics: store.topics,
            users: store.users,
            comments,
            comment_count,
            selected_topic: None,
            author_label: author_label.into(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn author_label(&self) -> &str {
        &self.author_label
    }

    /// Snapshot of the topic taken when it was opened.
    pub fn selected_topic(&self) -> Option<&Topic> {
        self.selected_topic.as_ref()
    }

    /// Current entry in the topic list for the selected topic, falling back
    /// to the snapshot.
    pub fn selected_topic_live(&self) -> Option<&Topic> {
        let selected = self.selected_topic.as_ref()?;
        self.topics
            .iter()
            .find(|t| t.id == selected.id)
            .or(Some(selected))
    }

    /// Comments posted under the given topic, oldest first.
    pub fn comments_for(&self, topic_id: u32) -> &[Comment] {
        self.comments
            .get(&topic_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of comments across all topics.
    pub fn comment_count(&self) -> usize {
        self.comment_count
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::trace!(from = ?self.page, to = ?page, "navigate");
        self.page = page;
    }

    /// Creates a topic and prepends it to the list.
    ///
    /// Returns the new topic id, or `None` when the title or content is blank.
    /// Text is stored as typed.
    pub fn create_topic(&mut self, title: &str, category: Category, content: &str) -> Option<u32> {
        if title.trim().is_empty() || content.trim().is_empty() {
            tracing::debug!("ignored topic submission with blank title or content");
            return None;
        }

        let id = self.topics.len() as u32 + 1;
        let topic = Topic {
            id,
            title: title.to_string(),
            author: self.author_label.clone(),
            category,
            replies: 0,
            views: 0,
            last_post: JUST_NOW.to_string(),
            pinned: false,
            content: Some(content.to_string()),
        };
        self.topics.insert(0, topic);
        tracing::info!(id, %category, "topic created");
        Some(id)
    }

    /// Selects a topic and switches to its detail page.
    pub fn open_topic(&mut self, topic: &Topic) {
        tracing::debug!(id = topic.id, "topic opened");
        self.selected_topic = Some(topic.clone());
        self.page = Page::Topic;
    }

    /// Appends a comment to the selected topic's thread.
    ///
    /// Returns the new comment id, or `None` when the text is blank or no
    /// topic is selected.
    pub fn add_comment(&mut self, text: &str) -> Option<u32> {
        if text.trim().is_empty() {
            tracing::debug!("ignored blank comment");
            return None;
        }
        let topic_id = self.selected_topic.as_ref()?.id;

        let id = self.comment_count as u32 + 1;
        let comment = Comment {
            id,
            author: self.author_label.clone(),
            avatar: avatar_initial(&self.author_label),
            content: text.to_string(),
            timestamp: JUST_NOW.to_string(),
            role: Role::Player,
        };
        self.comments.entry(topic_id).or_default().push(comment);
        self.comment_count += 1;

        if let Some(topic) = self.topics.iter_mut().find(|t| t.id == topic_id) {
            topic.replies += 1;
            topic.last_post = JUST_NOW.to_string();
        }
        tracing::info!(id, topic_id, "comment added");
        Some(id)
    }

    pub fn stats(&self) -> ForumStats {
        ForumStats {
            topics: self.topics.len(),
            messages: self.topics.iter().map(|t| u64::from(t.replies)).sum(),
            members: self.users.len(),
            online: self.users.iter().filter(|u| u.online).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forum() -> Forum {
        Forum::new()
    }

    #[test]
    fn test_navigate_replaces_page() {
        let mut f = forum();
        assert_eq!(f.page(), Page::Home);
        f.navigate(Page::Rules);
        assert_eq!(f.page(), Page::Rules);
        f.navigate(Page::Users);
        assert_eq!(f.page(), Page::Users);
    }

    #[test]
    fn test_create_topic_blank_inputs_are_ignored() {
        let mut f = forum();
        let before = f.topics().to_vec();
        for (title, content) in [("", ""), ("   ", "body"), ("title", " \n\t "), ("\t", "  ")] {
            assert_eq!(f.create_topic(title, Category::News, content), None);
        }
        assert_eq!(f.topics(), before.as_slice());
    }

    #[test]
    fn test_create_topic_prepends_new_topic() {
        let mut f = forum();
        let before = f.topics().to_vec();
        let id = f.create_topic("T", Category::Discussions, "C");
        assert_eq!(id, Some(6));

        let first = &f.topics()[0];
        assert_eq!(first.title, "T");
        assert_eq!(first.content.as_deref(), Some("C"));
        assert_eq!(first.author, "You");
        assert_eq!(first.replies, 0);
        assert_eq!(first.views, 0);
        assert_eq!(first.last_post, "just now");
        assert!(!first.pinned);
        assert_eq!(&f.topics()[1..], before.as_slice());
    }

    #[test]
    fn test_create_topic_keeps_text_as_typed() {
        let mut f = forum();
        f.create_topic(" Hello", Category::Guides, "steps:\n  1. open\n  2. close");
        assert_eq!(f.topics()[0].title, " Hello");
        assert_eq!(
            f.topics()[0].content.as_deref(),
            Some("steps:\n  1. open\n  2. close")
        );
    }

    #[test]
    fn test_add_comment_keeps_indentation() {
        let mut f = forum();
        let topic = f.topics()[2].clone();
        f.open_topic(&topic);
        f.add_comment("  indented\n  reply");
        let thread = f.comments_for(topic.id);
        assert_eq!(thread.last().unwrap().content, "  indented\n  reply");
    }

    #[test]
    fn test_patch_notes_scenario() {
        let mut f = forum();
        assert_eq!(f.topics().len(), 5);
        f.create_topic("Patch notes", Category::Bugs, "fixed crash");
        assert_eq!(f.topics().len(), 6);
        assert_eq!(f.topics()[0].title, "Patch notes");
        assert_eq!(f.topics()[0].category, Category::Bugs);
        assert_eq!(f.topics()[0].replies, 0);
    }

    #[test]
    fn test_open_topic_does_not_touch_views() {
        let mut f = forum();
        let topic = f.topics()[2].clone();
        f.open_topic(&topic);
        assert_eq!(f.page(), Page::Topic);
        assert_eq!(f.selected_topic(), Some(&topic));
        assert_eq!(f.topics()[2].views, topic.views);
    }

    #[test]
    fn test_open_then_navigate_away_keeps_topics() {
        let mut f = forum();
        let before = f.topics().to_vec();
        let topic = before[0].clone();
        f.open_topic(&topic);
        f.navigate(Page::Home);
        f.navigate(Page::Users);
        f.navigate(Page::Home);
        assert_eq!(f.topics(), before.as_slice());
    }

    #[test]
    fn test_topic_page_without_selection_has_no_topic() {
        let mut f = forum();
        f.navigate(Page::Topic);
        assert_eq!(f.page(), Page::Topic);
        assert!(f.selected_topic().is_none());
        assert!(f.selected_topic_live().is_none());
    }

    #[test]
    fn test_add_comment_requires_selection() {
        let mut f = forum();
        let count = f.comment_count();
        assert_eq!(f.add_comment("hello"), None);
        assert_eq!(f.comment_count(), count);
    }

    #[test]
    fn test_add_comment_blank_is_ignored() {
        let mut f = forum();
        let topic = f.topics()[3].clone();
        f.open_topic(&topic);
        assert_eq!(f.add_comment("   \n"), None);
        assert_eq!(f.comments_for(topic.id).len(), 0);
        assert_eq!(f.topics()[3].replies, topic.replies);
    }

    #[test]
    fn test_add_comment_updates_thread_and_topic() {
        let mut f = forum();
        let topic = f.topics()[0].clone();
        let replies = topic.replies;
        let thread_len = f.comments_for(topic.id).len();
        let total = f.comment_count();

        f.open_topic(&topic);
        let id = f.add_comment("X").expect("comment should be added");
        assert_eq!(id as usize, total + 1);

        let thread = f.comments_for(topic.id);
        assert_eq!(thread.len(), thread_len + 1);
        let last = thread.last().unwrap();
        assert_eq!(last.content, "X");
        assert_eq!(last.author, "You");
        assert_eq!(last.avatar, "Y");
        assert_eq!(last.timestamp, "just now");
        assert_eq!(last.role, Role::Player);

        let updated = &f.topics()[0];
        assert_eq!(updated.replies, replies + 1);
        assert_eq!(updated.last_post, "just now");
        assert_eq!(updated.title, topic.title);
        assert_eq!(updated.views, topic.views);
    }

    #[test]
    fn test_comments_are_kept_per_topic() {
        let mut f = forum();
        let a = f.topics()[3].clone();
        let b = f.topics()[4].clone();
        f.open_topic(&a);
        f.add_comment("on a");
        f.open_topic(&b);
        f.add_comment("on b");
        assert_eq!(f.comments_for(a.id).len(), 1);
        assert_eq!(f.comments_for(b.id).len(), 1);
        assert_eq!(f.comments_for(b.id)[0].content, "on b");
    }

    #[test]
    fn test_selected_snapshot_is_not_live() {
        let mut f = forum();
        let topic = f.topics()[1].clone();
        f.open_topic(&topic);
        f.add_comment("reply");
        assert_eq!(f.selected_topic().unwrap().replies, topic.replies);
        assert_eq!(f.selected_topic_live().unwrap().replies, topic.replies + 1);
    }

    #[test]
    fn test_stats_are_derived() {
        let mut f = forum();
        let stats = f.stats();
        assert_eq!(stats.topics, 5);
        assert_eq!(stats.messages, 145 + 23 + 67 + 89 + 34);
        assert_eq!(stats.members, 6);
        assert_eq!(stats.online, 4);

        f.create_topic("New", Category::News, "body");
        let topic = f.topics()[0].clone();
        f.open_topic(&topic);
        f.add_comment("first");
        let stats = f.stats();
        assert_eq!(stats.topics, 6);
        assert_eq!(stats.messages, 145 + 23 + 67 + 89 + 34 + 1);
    }

    #[test]
    fn test_custom_author_label() {
        let mut f = Forum::from_store(FakeStore::new(), "alice");
        f.create_topic("t", Category::News, "c");
        assert_eq!(f.topics()[0].author, "alice");
        let topic = f.topics()[0].clone();
        f.open_topic(&topic);
        f.add_comment("hi");
        assert_eq!(f.comments_for(topic.id)[0].avatar, "A");
    }

    #[test]
    fn test_page_cycle_skips_topic() {
        assert_eq!(Page::Home.next(), Page::Users);
        assert_eq!(Page::Users.next(), Page::Rules);
        assert_eq!(Page::Rules.next(), Page::Home);
        assert_eq!(Page::Topic.next(), Page::Users);
        assert_eq!(Page::Home.prev(), Page::Rules);
        assert_eq!(Page::Topic.menu_index(), 0);
        assert_eq!(Page::from_menu_index(2), Page::Rules);
        assert_eq!(Page::from_menu_index(9), Page::Home);
    }
}
