use forum::key_handler::KeyAction;
use forum::{App, Category, ForumConfig, Page};

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        app.handle_action(KeyAction::InputChar(c));
    }
}

#[test]
fn test_publish_then_discuss_new_topic() {
    let config = ForumConfig {
        author_label: "Tester".into(),
        default_category: Category::Guides,
        ..ForumConfig::default()
    };
    let mut app = App::new(config);

    app.handle_action(KeyAction::InputChar('n'));
    type_str(&mut app, "Fishing spots");
    app.handle_action(KeyAction::NextView);
    app.handle_action(KeyAction::NextView);
    type_str(&mut app, "Line one");
    app.handle_action(KeyAction::Select);
    type_str(&mut app, "Line two");
    app.handle_action(KeyAction::Submit);

    let topic = app.forum().topics()[0].clone();
    assert_eq!(topic.title, "Fishing spots");
    assert_eq!(topic.category, Category::Guides);
    assert_eq!(topic.author, "Tester");
    assert_eq!(topic.content.as_deref(), Some("Line one\nLine two"));

    // Open the new topic and reply to it.
    app.handle_action(KeyAction::Select);
    assert_eq!(app.forum().page(), Page::Topic);
    type_str(&mut app, "Try the pier");
    app.handle_action(KeyAction::Select);

    let thread = app.forum().comments_for(topic.id);
    assert_eq!(thread.len(), 1);
    assert_eq!(thread[0].author, "Tester");
    assert_eq!(thread[0].avatar, "T");
    assert_eq!(app.forum().topics()[0].replies, 1);

    // Other topics keep their own threads.
    assert!(app.forum().comments_for(4).is_empty());

    app.handle_action(KeyAction::Back);
    assert_eq!(app.forum().page(), Page::Home);
    assert_eq!(app.forum().stats().topics, 6);
}

#[test]
fn test_browse_without_mutation() {
    let mut app = App::new(ForumConfig::default());
    let before = app.forum().topics().to_vec();

    app.handle_action(KeyAction::NavigateDown);
    app.handle_action(KeyAction::Select);
    app.handle_action(KeyAction::NextView);
    assert_eq!(app.forum().page(), Page::Users);
    app.handle_action(KeyAction::NextView);
    assert_eq!(app.forum().page(), Page::Rules);
    app.handle_action(KeyAction::ScrollPageDown);
    app.handle_action(KeyAction::NextView);
    assert_eq!(app.forum().page(), Page::Home);

    assert_eq!(app.forum().topics(), before.as_slice());
}

#[test]
fn test_quit_paths() {
    let mut app = App::new(ForumConfig::default());
    assert!(app.handle_action(KeyAction::Quit));

    let mut app = App::new(ForumConfig::default());
    assert!(!app.handle_action(KeyAction::Back));
    assert!(app.handle_action(KeyAction::Back));
}
