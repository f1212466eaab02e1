//! Black-box tests for the query resolution API (spec.md §6, §4.4).

use pretty_assertions::assert_eq;
use xresourcedb::{resource_get_bool, resource_get_long, resource_get_string, Database, ResourceError};

#[test]
fn concrete_name_beats_wildcard() {
    let db = Database::from_str("First.second: 1\nFirst.?: 2\n");
    let value = resource_get_string(&db, "First.second", "").unwrap();
    assert_eq!(value, b"1");
}

#[test]
fn missing_resource_is_not_found() {
    let db = Database::from_str("First: 1\n");
    assert!(matches!(resource_get_string(&db, "Second", ""), Err(ResourceError::NotFound)));
}

#[test]
fn query_class_must_match_name_length() {
    let db = Database::from_str("First.second: 1\n");
    assert!(matches!(
        resource_get_string(&db, "First.second", "OnlyOne"),
        Err(ResourceError::NotFound)
    ));
}

#[test]
fn get_long_converts_the_resolved_value() {
    let db = Database::from_str("app.retries: 5\n");
    assert_eq!(resource_get_long(&db, "app.retries", "").unwrap(), 5);
}

#[test]
fn get_long_on_absent_resource_is_not_found() {
    let db = Database::from_str("app.retries: 5\n");
    assert!(matches!(resource_get_long(&db, "app.timeout", ""), Err(ResourceError::NotFound)));
}

#[test]
fn get_long_on_unparsable_value_is_invalid() {
    let db = Database::from_str("app.retries: many\n");
    assert!(matches!(
        resource_get_long(&db, "app.retries", ""),
        Err(ResourceError::InvalidConversion { .. })
    ));
}

#[test]
fn get_bool_accepts_words_and_numbers_case_insensitively() {
    let db = Database::from_str("a: TRUE\nb: no\nc: 7\n");
    assert!(resource_get_bool(&db, "a", "").unwrap());
    assert!(!resource_get_bool(&db, "b", "").unwrap());
    assert!(resource_get_bool(&db, "c", "").unwrap());
}
