//! Page state modules for the forum TUI.
//!
//! Each page keeps its selection, scroll and input buffers in its own struct
//! so it can be unit tested without a terminal.
//!
//! ```text
//! App
//! ├── ListState          - Topic list and user roster selection
//! ├── TopicFormState     - New-topic dialog fields
//! ├── CommentInputState  - Comment entry on the topic page
//! └── ScrollState        - Rules page and comment thread scrolling
//! ```

mod comment_input;
mod list;
mod scroll;
mod topic_form;

pub use comment_input::CommentInputState;
pub use list::ListState;
pub use scroll::ScrollState;
pub use topic_form::{FormField, TopicFormState};

/// Number of rows kept visible by list windows.
pub const WINDOW_SIZE: usize = 10;
