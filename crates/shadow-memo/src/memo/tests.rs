use super::{MemoBuffer, PastedImage, Variant, DEFAULT_CHAR_LIMIT};
use crate::error::MemoError;

fn image() -> PastedImage {
    PastedImage::from_rgba(2, 2, vec![128; 16]).expect("image")
}

#[test]
fn insert_and_backspace_track_cursor() {
    let mut memo = MemoBuffer::new(Variant::Unbounded);
    assert!(memo.insert_char('忍'));
    assert!(memo.insert_char('者'));
    assert_eq!(memo.text(), "忍者");
    assert_eq!(memo.cursor(), 2);

    memo.move_left();
    assert!(memo.backspace());
    assert_eq!(memo.text(), "者");
    assert_eq!(memo.cursor(), 0);
    assert!(!memo.backspace(), "backspace at start changes nothing");
}

#[test]
fn delete_removes_char_under_cursor() {
    let mut memo = MemoBuffer::new(Variant::Unbounded);
    memo.insert_str("abc");
    memo.move_home();
    assert!(memo.delete());
    assert_eq!(memo.text(), "bc");
    memo.move_end();
    assert!(!memo.delete());
}

#[test]
fn home_and_end_are_line_relative() {
    let mut memo = MemoBuffer::new(Variant::Unbounded);
    memo.insert_str("first\nsecond");
    memo.move_home();
    assert_eq!(memo.cursor(), 6);
    memo.move_left();
    memo.move_home();
    assert_eq!(memo.cursor(), 0);
    memo.move_end();
    assert_eq!(memo.cursor(), 5);
}

#[test]
fn capped_variant_never_stores_past_limit() {
    let mut memo = MemoBuffer::new(Variant::Capped(DEFAULT_CHAR_LIMIT));
    for _ in 0..DEFAULT_CHAR_LIMIT + 10 {
        memo.insert_char('x');
    }
    assert_eq!(memo.char_count(), DEFAULT_CHAR_LIMIT);
    assert_eq!(memo.remaining(), Some(0));
    assert!(!memo.insert_char('y'));
    assert!(!memo.insert_str("more"));
    assert_eq!(memo.char_count(), DEFAULT_CHAR_LIMIT);
}

#[test]
fn capped_paste_is_truncated_to_room_left() {
    let mut memo = MemoBuffer::new(Variant::Capped(5));
    memo.insert_str("ab");
    assert!(memo.insert_str("火遁の術だ"));
    assert_eq!(memo.text(), "ab火遁の");
    assert_eq!(memo.cursor(), 5);
}

#[test]
fn pasted_carriage_returns_become_newlines() {
    let mut memo = MemoBuffer::new(Variant::Unbounded);
    memo.insert_str("a\r\nb\rc");
    assert_eq!(memo.text(), "a\nb\nc");
}

#[test]
fn capped_variant_rejects_images() {
    let mut memo = MemoBuffer::new(Variant::Capped(DEFAULT_CHAR_LIMIT));
    let err = memo.push_image(image()).unwrap_err();
    assert!(matches!(err, MemoError::ImagesDisabled));
    assert!(memo.images().is_empty());
}

#[test]
fn images_alone_make_buffer_non_empty() {
    let mut memo = MemoBuffer::new(Variant::Unbounded);
    assert!(memo.is_empty());
    memo.push_image(image()).expect("push image");
    assert!(!memo.is_empty());
    assert!(memo.pop_image().is_some());
    assert!(memo.is_empty());
}

#[test]
fn clear_resets_text_images_and_cursor() {
    let mut memo = MemoBuffer::new(Variant::Unbounded);
    memo.insert_str("burn me");
    memo.push_image(image()).expect("push image");
    memo.clear();
    assert!(memo.is_empty());
    assert_eq!(memo.cursor(), 0);
}
