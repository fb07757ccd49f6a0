#![allow(clippy::unwrap_used, clippy::expect_used)]

// Scenario 1: a user maps to a two-column insert

use rowmap_core::domain::User;
use rowmap_core::{build_insert, build_insert_with, Entity, PlaceholderStyle, Value};

#[test]
fn test_user_insert_sql_and_values() {
    let sam = User::new("sam", "8/30/1999");

    let stmt = build_insert(&sam).unwrap();

    assert_eq!(stmt.sql, "INSERT INTO users (name, birthday) VALUES (?, ?);");
    assert_eq!(
        stmt.values,
        vec![
            Value::Text("sam".to_string()),
            Value::Text("8/30/1999".to_string())
        ]
    );
}

#[test]
fn test_user_insert_with_format_placeholders() {
    let bob = User::new("bob", "8/3/1997");

    let stmt = build_insert_with(&bob, PlaceholderStyle::Format).unwrap();

    assert_eq!(
        stmt.sql,
        "INSERT INTO users (name, birthday) VALUES (%s, %s);"
    );
    assert_eq!(stmt.values[0], Value::Text("bob".to_string()));
}

#[test]
fn test_users_share_one_descriptor() {
    let sam = User::new("sam", "8/30/1999");
    let bob = User::new("bob", "8/30/1999");

    assert!(std::ptr::eq(sam.descriptor(), bob.descriptor()));
    assert_eq!(User::DESCRIPTOR.table_name(), "users");
}

#[test]
fn test_build_insert_does_not_mutate_entity() {
    let sam = User::new("sam", "8/30/1999");
    let before = sam.clone();

    build_insert(&sam).unwrap();

    assert_eq!(sam, before);
}
