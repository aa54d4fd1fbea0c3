pub mod help;
pub mod main_menu;
pub mod new_topic_dialog;
pub mod rules;
pub mod topic_detail;
pub mod topic_list;
pub mod users;
