//! Black-box tests for the entry and database model (spec.md §3, §4.2, §4.3).

use pretty_assertions::assert_eq;
use xresourcedb::{parse_entry, Binding, Component, Database, ParseMode};

#[test]
fn specifier_equality_ignores_value_but_not_binding() {
    let a = parse_entry(b"First.second: 1", ParseMode::FullEntry).unwrap();
    let b = parse_entry(b"First.second: 2", ParseMode::FullEntry).unwrap();
    let c = parse_entry(b"First*second: 3", ParseMode::FullEntry).unwrap();

    assert!(a.specifier_eq(&b));
    assert!(!a.specifier_eq(&c));
}

#[test]
fn database_insert_or_replace_keeps_one_entry_per_specifier() {
    let mut db = Database::new();
    db.put_resource("First.second", b"1").unwrap();
    db.put_resource("First.second", b"2").unwrap();
    db.put_resource("Other.third", b"3").unwrap();

    assert_eq!(db.len(), 2);
}

#[test]
fn database_round_trips_through_canonical_text() {
    let mut db = Database::new();
    db.put_resource("xmh.toc*Command.activeForeground", b"black").unwrap();
    db.put_resource("*incorporate.Foreground", b"blue").unwrap();

    let text = db.to_text();
    let reloaded = Database::from_bytes(&text);

    assert_eq!(reloaded.len(), db.len());
    for (original, reloaded) in db.entries().iter().zip(reloaded.entries().iter()) {
        assert!(original.specifier_eq(reloaded));
        assert_eq!(original.value(), reloaded.value());
    }
}

#[test]
fn comments_and_malformed_lines_are_dropped_from_file_text() {
    let db = Database::from_str(
        "! this is a comment\n\
         # so is this\n\
         First: 1\n\
         @not-legal@: 2\n\
         Second: 3\n",
    );
    assert_eq!(db.len(), 2);
}

#[test]
fn component_sequence_reflects_bindings_and_wildcards() {
    let entry = parse_entry(b"xmh.toc*?.Foreground: white", ParseMode::FullEntry).unwrap();
    let components: Vec<_> = entry.components().to_vec();
    assert_eq!(
        components,
        vec![
            (Binding::Tight, Component::Normal("xmh".to_string())),
            (Binding::Tight, Component::Normal("toc".to_string())),
            (Binding::Loose, Component::Wildcard),
            (Binding::Tight, Component::Normal("Foreground".to_string())),
        ]
    );
}

#[test]
fn backslash_newline_continuation_joins_logical_lines() {
    let db = Database::from_bytes(b"First: one\\\ntwo\n");
    assert_eq!(db.len(), 1);
    assert_eq!(db.entries()[0].value(), Some(&b"onetwo"[..]));
}
