// Library for testable modules
pub mod app;
pub mod config;
pub mod data;
pub mod forum;
pub mod key_handler;
pub mod logging;
pub mod pages;
pub mod render_context;
pub mod screen;
pub mod state;
pub mod status_symbols;
pub mod ui_utils;

// Re-export main types used in tests and benches
pub use app::{App, Focus};
pub use config::ForumConfig;
pub use data::{Category, Comment, FakeStore, Role, Topic, User};
pub use forum::{Forum, ForumStats, Page};
