use std::fmt;

use ratatui::style::Color;
use serde::Deserialize;

/// Label used for freshly created topics and comments.
pub const JUST_NOW: &str = "just now";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    News,
    #[default]
    Discussions,
    Guides,
    Bugs,
    Rules,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::News,
        Category::Discussions,
        Category::Guides,
        Category::Bugs,
        Category::Rules,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::News => "News",
            Category::Discussions => "Discussions",
            Category::Guides => "Guides",
            Category::Bugs => "Bugs",
            Category::Rules => "Rules",
        }
    }

    pub fn next(self) -> Self {
        use Category::*;
        match self {
            News => Discussions,
            Discussions => Guides,
            Guides => Bugs,
            Bugs => Rules,
            Rules => News,
        }
    }

    pub fn prev(self) -> Self {
        use Category::*;
        match self {
            News => Rules,
            Discussions => News,
            Guides => Discussions,
            Bugs => Guides,
            Rules => Bugs,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    Administrator,
    Moderator,
    Helper,
    #[default]
    Player,
    Newcomer,
}

impl Role {
    /// Parses a free-text role label. Unknown labels fall back to `Player`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "administrator" | "admin" => Role::Administrator,
            "moderator" | "mod" => Role::Moderator,
            "helper" => Role::Helper,
            "newcomer" => Role::Newcomer,
            _ => Role::Player,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Administrator => "Administrator",
            Role::Moderator => "Moderator",
            Role::Helper => "Helper",
            Role::Player => "Player",
            Role::Newcomer => "Newcomer",
        }
    }

    /// Badge colour shown next to a member's name.
    pub fn badge_color(self) -> Color {
        match self {
            Role::Administrator => Color::Red,
            Role::Moderator => Color::Magenta,
            Role::Helper => Color::Blue,
            Role::Player | Role::Newcomer => Color::DarkGray,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub replies: u32,
    pub views: u32,
    pub last_post: String,
    pub pinned: bool,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub avatar: String,
    pub posts: u32,
    pub reputation: u32,
    pub role: Role,
    pub online: bool,
}

/// Avatar initial for a display name: its first character, uppercased.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".into())
}

/// Seeded mock content the forum starts with.
#[derive(Debug, Default, Clone)]
pub struct FakeStore {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    /// `(topic id, comment)` pairs in posting order.
    pub comments: Vec<(u32, Comment)>,
}

impl FakeStore {
    pub fn new() -> Self {
        let mk_topic = |id: u32,
                        title: &str,
                        author: &str,
                        category: Category,
                        replies: u32,
                        views: u32,
                        last_post: &str,
                        pinned: bool,
                        content: &str| Topic {
            id,
            title: title.into(),
            author: author.into(),
            category,
            replies,
            views,
            last_post: last_post.into(),
            pinned,
            content: Some(content.into()),
        };

        let topics = vec![
            mk_topic(
                1,
                "Server update 2.0 - New features",
                "Admin",
                Category::News,
                145,
                2890,
                "5 min ago",
                true,
                "The 2.0 update brings a reworked economy, new districts and a \
                 rebalanced vehicle tuning system. Full patch notes inside.",
            ),
            mk_topic(
                2,
                "Server rules - Must read",
                "Moderator",
                Category::Rules,
                23,
                8450,
                "1 hour ago",
                true,
                "Please read the forum and server rules before posting. \
                 Violations are handled by the moderation team.",
            ),
            mk_topic(
                3,
                "Beginner guide: How to start playing",
                "Helper_Alex",
                Category::Guides,
                67,
                1234,
                "10 min ago",
                false,
                "Pick a starting job, get your licence at the driving school and \
                 save up for your first car. Ask questions below!",
            ),
            mk_topic(
                4,
                "Discussion of the latest event",
                "Player123",
                Category::Discussions,
                89,
                956,
                "15 min ago",
                false,
                "What did everyone think about the weekend race event?",
            ),
            mk_topic(
                5,
                "Weapon bug in the latest update",
                "BugHunter",
                Category::Bugs,
                34,
                445,
                "30 min ago",
                false,
                "After the update the reload animation loops forever on some weapons.",
            ),
        ];

        let mk_user = |id: u32,
                       username: &str,
                       avatar: &str,
                       posts: u32,
                       reputation: u32,
                       role: Role,
                       online: bool| User {
            id,
            username: username.into(),
            avatar: avatar.into(),
            posts,
            reputation,
            role,
            online,
        };

        let users = vec![
            mk_user(1, "Admin", "A", 1520, 999, Role::Administrator, true),
            mk_user(2, "Moderator", "M", 856, 750, Role::Moderator, true),
            mk_user(3, "Helper_Alex", "HA", 445, 520, Role::Helper, false),
            mk_user(4, "Player123", "P1", 234, 180, Role::Player, true),
            mk_user(5, "BugHunter", "BH", 189, 145, Role::Player, false),
            mk_user(6, "NewPlayer", "NP", 12, 15, Role::Newcomer, true),
        ];

        let mk_comment = |id: u32, author: &str, avatar: &str, content: &str, timestamp: &str, role: Role| Comment {
            id,
            author: author.into(),
            avatar: avatar.into(),
            content: content.into(),
            timestamp: timestamp.into(),
            role,
        };

        let comments = vec![
            (
                1,
                mk_comment(1, "Player123", "P1", "Finally! The new districts look great.", "4 min ago", Role::Player),
            ),
            (
                1,
                mk_comment(2, "Moderator", "M", "Please report any issues in the Bugs section.", "5 min ago", Role::Moderator),
            ),
            (
                3,
                mk_comment(3, "NewPlayer", "NP", "Thanks, this helped a lot!", "10 min ago", Role::Newcomer),
            ),
        ];

        Self {
            topics,
            users,
            comments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_cycles_through_all() {
        let mut c = Category::default();
        assert_eq!(c, Category::Discussions);
        for _ in 0..Category::ALL.len() {
            c = c.next();
        }
        assert_eq!(c, Category::Discussions);
        assert_eq!(Category::News.prev(), Category::Rules);
        assert_eq!(Category::Bugs.next().prev(), Category::Bugs);
    }

    #[test]
    fn test_role_from_label_falls_back_to_player() {
        assert_eq!(Role::from_label("Administrator"), Role::Administrator);
        assert_eq!(Role::from_label(" moderator "), Role::Moderator);
        assert_eq!(Role::from_label("Helper"), Role::Helper);
        assert_eq!(Role::from_label("Newcomer"), Role::Newcomer);
        assert_eq!(Role::from_label("Wizard"), Role::Player);
        assert_eq!(Role::from_label(""), Role::Player);
    }

    #[test]
    fn test_badge_colors() {
        assert_eq!(Role::Administrator.badge_color(), Color::Red);
        assert_eq!(Role::Moderator.badge_color(), Color::Magenta);
        assert_eq!(Role::Helper.badge_color(), Color::Blue);
        assert_eq!(Role::Player.badge_color(), Color::DarkGray);
        assert_eq!(Role::from_label("unknown").badge_color(), Color::DarkGray);
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(avatar_initial("You"), "Y");
        assert_eq!(avatar_initial("  alex"), "A");
        assert_eq!(avatar_initial(""), "?");
    }

    #[test]
    fn test_seed_data_shape() {
        let store = FakeStore::new();
        assert_eq!(store.topics.len(), 5);
        assert_eq!(store.users.len(), 6);
        let ids: Vec<u32> = store.topics.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(store.topics[0].pinned && store.topics[1].pinned);
        assert!(store.comments.iter().all(|(tid, _)| ids.contains(tid)));
    }

    #[test]
    fn test_category_deserializes_snake_case() {
        let c: Category = serde_json::from_str("\"bugs\"").unwrap();
        assert_eq!(c, Category::Bugs);
    }
}
