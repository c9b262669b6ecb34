use bhujal_client::transcript::{render, viewport};
use bhujal_core::models::conversation::Conversation;
use bhujal_core::models::message::ChatRole;

#[test]
fn renders_turns_in_order_newest_last() {
    let mut conv = Conversation::new();
    conv.push(ChatRole::User, "hello");
    conv.push(ChatRole::Assistant, "hi there");

    let lines = render(&conv);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("you"));
    assert!(lines[0].ends_with("hello"));
    assert!(lines[1].contains("assistant"));
    assert!(lines[1].ends_with("hi there"));
}

#[test]
fn multiline_text_stays_under_one_prefix() {
    let mut conv = Conversation::new();
    conv.push(ChatRole::Assistant, "line one\nline two");

    let lines = render(&conv);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("assistant"));
    assert!(!lines[1].contains("assistant"));
    assert!(lines[1].ends_with("line two"));
}

#[test]
fn viewport_keeps_the_newest_lines() {
    let mut conv = Conversation::new();
    for i in 0..10 {
        conv.push(ChatRole::User, format!("message {i}"));
    }

    let visible = viewport(&conv, 3);
    assert_eq!(visible.len(), 3);
    assert!(visible[0].ends_with("message 7"));
    assert!(visible[2].ends_with("message 9"));
}

#[test]
fn viewport_larger_than_the_transcript_shows_everything() {
    let mut conv = Conversation::new();
    conv.push(ChatRole::User, "only one");

    let visible = viewport(&conv, 50);
    assert_eq!(visible.len(), 1);
}
