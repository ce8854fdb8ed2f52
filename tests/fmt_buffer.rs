//! Tests for fragment joining.

use ezlog::MessageBuffer;

#[test]
fn empty_buffer_renders_empty() {
    let buffer = MessageBuffer::new();
    assert!(buffer.is_empty());
    assert_eq!(buffer.render(), "");
}

#[test]
fn space_between_fragments() {
    let mut buffer = MessageBuffer::new();
    buffer.push("a");
    buffer.push("b");
    assert_eq!(buffer.render(), "a b");
    assert_eq!(buffer.len(), 2);
}

#[test]
fn newline_suppresses_space() {
    let mut buffer = MessageBuffer::new();
    buffer.push("a\n");
    buffer.push("b");
    assert_eq!(buffer.render(), "a\nb");
}

#[test]
fn empty_leading_fragment_adds_no_space() {
    let mut buffer = MessageBuffer::new();
    buffer.push("");
    buffer.push("b");
    assert_eq!(buffer.render(), "b");
}

#[test]
fn join_looks_at_whole_text_not_fragment_pairs() {
    let mut buffer = MessageBuffer::new();
    buffer.push("a\n");
    buffer.push("");
    buffer.push("b");
    // The empty fragment leaves the text ending in '\n'.
    assert_eq!(buffer.render(), "a\nb");
}

#[test]
fn multibyte_tail_is_decoded() {
    let mut buffer = MessageBuffer::new();
    buffer.push("größe");
    buffer.push("héllo\n");
    buffer.push("日本");
    buffer.push("語");
    assert_eq!(buffer.render(), "größe héllo\n日本 語");
}

#[test]
fn attach_concatenates_without_separator() {
    let mut buffer = MessageBuffer::new();
    buffer.push("key");
    buffer.attach(":");
    buffer.push("value");
    assert_eq!(buffer.fragments(), ["key:", "value"]);
    assert_eq!(buffer.render(), "key: value");
}

#[test]
fn attach_on_empty_buffer_starts_a_fragment() {
    let mut buffer = MessageBuffer::new();
    buffer.attach(":");
    assert_eq!(buffer.render(), ":");
}

#[test]
fn clear_resets() {
    let mut buffer = MessageBuffer::new();
    buffer.push("x");
    buffer.clear();
    assert!(buffer.is_empty());
}
