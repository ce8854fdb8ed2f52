//! Tests for value-to-text conversion.

use ezlog::Stringify;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct Server {
    name: &'static str,
    port: u16,
}

#[test]
fn strings_render_raw() {
    let s = Stringify::new();
    assert_eq!(s.str("plain"), "plain");
    assert_eq!(s.str(String::from("owned")), "owned");
    assert_eq!(s.str("with \"quotes\""), "with \"quotes\"");
}

#[test]
fn scalars_render_as_literals() {
    let s = Stringify::new();
    assert_eq!(s.str(7u8), "7");
    assert_eq!(s.str(-3i64), "-3");
    assert_eq!(s.str(false), "false");
    assert_eq!(s.str('c'), "c");
}

#[test]
fn unit_and_none_render_empty() {
    let s = Stringify::new();
    assert_eq!(s.str(()), "");
    assert_eq!(s.str(None::<i32>), "");
    assert_eq!(s.str(Some(5)), "5");
}

#[test]
fn indent_is_on_by_default() {
    assert!(Stringify::new().is_indented());
    assert!(Stringify::default().is_indented());
}

#[test]
fn structs_keep_field_order() {
    let server = Server {
        name: "web",
        port: 80,
    };
    let compact = Stringify::new().indent(false);
    assert_eq!(compact.str(&server), r#"{"name":"web","port":80}"#);
}

#[test]
fn indented_sequences_span_lines() {
    let s = Stringify::new();
    assert_eq!(s.str([1, 2]), "[\n  1,\n  2\n]");
    assert_eq!(s.indent(false).str(vec!["a", "b"]), r#"["a","b"]"#);
}

#[test]
fn non_string_map_keys_fail() {
    let mut map = HashMap::new();
    map.insert(vec![1], "x");
    let s = Stringify::new();
    assert!(matches!(s.try_str(&map), Err(ezlog::Error::Format(_))));
    assert_eq!(s.str(&map), "");
}

#[test]
fn set_indent_toggles_in_place() {
    let mut s = Stringify::new();
    s.set_indent(false);
    assert!(!s.is_indented());
}
