//! Black-box tests for the entry parser (spec.md §4.1).

use pretty_assertions::assert_eq;
use xresourcedb::{parse_entry, ParseMode};

#[test]
fn full_entry_requires_a_value() {
    assert!(parse_entry(b"First.second", ParseMode::FullEntry).is_err());
    assert!(parse_entry(b"First.second:", ParseMode::FullEntry).is_ok());
}

#[test]
fn query_mode_rejects_value_syntax_and_wildcards() {
    assert!(parse_entry(b"First.second: 1", ParseMode::QueryOnly).is_err());
    assert!(parse_entry(b"First.?", ParseMode::QueryOnly).is_err());
    assert!(parse_entry(b"First*second", ParseMode::QueryOnly).is_err());
}

#[test]
fn query_mode_parses_a_plain_dotted_path() {
    let entry = parse_entry(b"xmh.toc.messagefunctions", ParseMode::QueryOnly).unwrap();
    assert_eq!(entry.len(), 3);
    assert_eq!(entry.value(), None);
}

#[test]
fn leading_wildcard_binding_is_loose() {
    let entry = parse_entry(b"*incorporate.Foreground: blue", ParseMode::FullEntry).unwrap();
    assert_eq!(entry.components()[0].0, xresourcedb::Binding::Loose);
}

#[test]
fn trailing_loose_binding_with_nothing_after_it_is_illegal() {
    assert!(parse_entry(b"First.second*: 1", ParseMode::FullEntry).is_err());
}

#[test]
fn trailing_wildcard_component_is_illegal() {
    assert!(parse_entry(b"First.second.?: 1", ParseMode::FullEntry).is_err());
}

#[test]
fn value_escaping_round_trips_through_render() {
    let entry = parse_entry(b"Third: \\  a\\\\ b\\nc d\te ", ParseMode::FullEntry).unwrap();
    assert_eq!(entry.value(), Some(&b"  a\\ b\nc d\te "[..]));
    assert_eq!(entry.render(), b"Third: \\  a\\\\ b\\nc d\te ");
}

#[test]
fn octal_escape_decodes_three_digits() {
    let entry = parse_entry(b"First: \\101\\102\\103", ParseMode::FullEntry).unwrap();
    assert_eq!(entry.value(), Some(&b"ABC"[..]));
}

#[test]
fn render_then_reparse_is_identity_for_specifier_and_value() {
    let original = parse_entry(b"xmh.toc*Command.activeForeground: black", ParseMode::FullEntry).unwrap();
    let reparsed = parse_entry(&original.render(), ParseMode::FullEntry).unwrap();
    assert!(original.specifier_eq(&reparsed));
    assert_eq!(original.value(), reparsed.value());
}

#[test]
fn render_passes_non_utf8_value_bytes_through_unchanged() {
    let original = parse_entry(b"First: \\377", ParseMode::FullEntry).unwrap();
    let rendered = original.render();
    assert_eq!(rendered, b"First: \xff");
    let reparsed = parse_entry(&rendered, ParseMode::FullEntry).unwrap();
    assert_eq!(reparsed.value(), Some(&[0xFFu8][..]));
}
