//! Integration tests for buffer functionality
//!
//! Tests the core text buffer operations that are fundamental to the editor

use quill::buffer::Buffer;

#[test]
fn test_buffer_creation() {
    let buffer = Buffer::new();

    assert_eq!(buffer.name, "untitled");
    assert_eq!(buffer.line_count(), 1); // Should have one empty line
    assert_eq!(buffer.line(0), "");
    assert!(!buffer.dirty);
    assert!(buffer.path.is_none());
}

#[test]
fn test_buffer_from_text_splits_lines() {
    let buffer = Buffer::from_text(None, "Hello\nWorld\nTest");

    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line(0), "Hello");
    assert_eq!(buffer.line(1), "World");
    assert_eq!(buffer.line(2), "Test");
    assert!(!buffer.dirty);
}

#[test]
fn test_buffer_from_text_normalizes_crlf() {
    let buffer = Buffer::from_text(None, "one\r\ntwo\r\nthree");

    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line(0), "one");
    assert_eq!(buffer.line(1), "two");
    assert_eq!(buffer.line(2), "three");
}

#[test]
fn test_buffer_from_text_empty_input() {
    let buffer = Buffer::from_text(None, "");

    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(0), "");
}

#[test]
fn test_buffer_from_text_keeps_trailing_empty_line() {
    let buffer = Buffer::from_text(None, "last\n");

    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.line(0), "last");
    assert_eq!(buffer.line(1), "");
}

#[test]
fn test_buffer_contents_round_trip() {
    let text = "alpha\nbeta\n\ngamma";
    let buffer = Buffer::from_text(None, text);

    assert_eq!(buffer.contents(), text);
}

#[test]
fn test_buffer_insert_char() {
    let mut buffer = Buffer::new();

    buffer.insert_char(0, 0, 'H');
    buffer.insert_char(0, 1, 'i');

    assert_eq!(buffer.line(0), "Hi");
    assert!(buffer.dirty);
}

#[test]
fn test_buffer_insert_char_clamps_column() {
    let mut buffer = Buffer::from_text(None, "ab");

    // Column is past the end of the line; insert lands at the end.
    buffer.insert_char(0, 99, '!');

    assert_eq!(buffer.line(0), "ab!");
}

#[test]
fn test_buffer_insert_newline_splits_line() {
    let mut buffer = Buffer::from_text(None, "abc\ndef");

    let cursor = buffer.insert_newline(0, 1);

    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line(0), "a");
    assert_eq!(buffer.line(1), "bc");
    assert_eq!(buffer.line(2), "def");
    assert_eq!(cursor, (1, 0));
    assert!(buffer.dirty);
}

#[test]
fn test_buffer_insert_newline_at_line_end() {
    let mut buffer = Buffer::from_text(None, "abc");

    let cursor = buffer.insert_newline(0, 3);

    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.line(0), "abc");
    assert_eq!(buffer.line(1), "");
    assert_eq!(cursor, (1, 0));
}

#[test]
fn test_buffer_backspace_within_line() {
    let mut buffer = Buffer::from_text(None, "Hello");

    let cursor = buffer.delete_char_backward(0, 5);

    assert_eq!(buffer.line(0), "Hell");
    assert_eq!(cursor, (0, 4));
    assert!(buffer.dirty);
}

#[test]
fn test_buffer_backspace_joins_lines() {
    let mut buffer = Buffer::from_text(None, "a\nbc");

    let cursor = buffer.delete_char_backward(1, 0);

    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(0), "abc");
    assert_eq!(cursor, (0, 1));
    assert!(buffer.dirty);
}

#[test]
fn test_buffer_backspace_at_origin_is_noop() {
    let mut buffer = Buffer::from_text(None, "abc");

    let cursor = buffer.delete_char_backward(0, 0);

    assert_eq!(buffer.line(0), "abc");
    assert_eq!(cursor, (0, 0));
    assert!(!buffer.dirty); // no structural change
}

#[test]
fn test_buffer_delete_forward() {
    let mut buffer = Buffer::from_text(None, "abc");

    buffer.delete_char_forward(0, 1);

    assert_eq!(buffer.line(0), "ac");
    assert!(buffer.dirty);
}

#[test]
fn test_buffer_delete_forward_joins_next_line() {
    let mut buffer = Buffer::from_text(None, "ab\ncd");

    buffer.delete_char_forward(0, 2);

    assert_eq!(buffer.line_count(), 1);
    assert_eq!(buffer.line(0), "abcd");
}

#[test]
fn test_buffer_line_out_of_range_is_empty() {
    let buffer = Buffer::from_text(None, "one");

    assert_eq!(buffer.line(5), "");
    assert_eq!(buffer.line_len(5), 0);
}

#[test]
fn test_buffer_multibyte_columns() {
    let mut buffer = Buffer::from_text(None, "héllo");

    // Columns are characters: inserting at 2 goes after the accent.
    buffer.insert_char(0, 2, 'x');

    assert_eq!(buffer.line(0), "héxllo");
    assert_eq!(buffer.line_len(0), 6);
}

#[test]
fn test_buffer_gutter_width_grows_with_line_count() {
    let small = Buffer::from_text(None, "a\nb");
    let large = Buffer::from_text(None, &"x\n".repeat(5000));

    assert_eq!(small.gutter_width(), 4); // 3-digit floor + spacing
    assert_eq!(large.gutter_width(), 5);
}
