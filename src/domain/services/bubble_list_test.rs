use test_utils::fake_png_bytes;
use test_utils::long_prompt_fixture;

use super::BubbleList;
use crate::domain::models::Attachment;
use crate::domain::models::Message;
use crate::domain::models::Sender;

fn transcript() -> Vec<Message> {
    return vec![
        Message::text(Sender::User, "check this"),
        Message::image(
            Sender::User,
            Attachment::new("shot.png", "image/png", fake_png_bytes()),
        ),
        Message::text(Sender::Bot, "all green"),
    ];
}

#[test]
fn it_has_no_cached_lines() {
    let bubble_list = BubbleList::new();

    assert_eq!(bubble_list.cache.len(), 0);
    assert!(bubble_list.is_empty());
}

#[test]
fn it_caches_lines() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&transcript(), 50);

    assert_eq!(bubble_list.cache.len(), 3);
}

#[test]
fn it_returns_correct_length() {
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&transcript(), 50);

    // One text line for each text bubble, two for the image card, plus borders.
    assert_eq!(bubble_list.len(), 3 + 4 + 3);
}

#[test]
fn it_rebuilds_on_width_change() {
    let messages = vec![Message::text(Sender::Bot, long_prompt_fixture())];
    let mut bubble_list = BubbleList::new();

    bubble_list.set_messages(&messages, 100);
    let wide = bubble_list.len();
    bubble_list.set_messages(&messages, 40);
    let narrow = bubble_list.len();

    assert!(narrow > wide);
}

#[test]
fn it_picks_up_appended_messages() {
    let mut messages = transcript();
    let mut bubble_list = BubbleList::new();
    bubble_list.set_messages(&messages, 50);

    messages.push(Message::text(Sender::User, "thanks"));
    bubble_list.set_messages(&messages, 50);

    assert_eq!(bubble_list.cache.len(), 4);
    assert_eq!(bubble_list.len(), 13);
}
