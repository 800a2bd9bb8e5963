//! Shared fixtures for admin row tests.

#![allow(dead_code)]

use fieldcraft_admin::PickObjectCatalog;
use fieldcraft_model::FieldRecord;
use indexmap::IndexMap;
use serde_json::Value;

pub fn field(value: Value) -> FieldRecord {
    serde_json::from_value(value).unwrap()
}

/// A catalog shaped like the one the field editor offers.
pub fn catalog() -> PickObjectCatalog {
    PickObjectCatalog::new()
        .with_label("", "-- Select --")
        .with_group("Custom", [("custom-simple", "Simple (custom defined list)")])
        .with_group(
            "Post Types",
            [("post_type-post", "Posts (post)"), ("post_type-page", "Pages (page)")],
        )
        .with_group("Taxonomies", [("taxonomy-category", "Categories (category)")])
        .with_label("user", "Users")
        .with_label("comment", "Comments")
}

pub fn type_labels() -> IndexMap<String, String> {
    IndexMap::from([
        ("text".to_string(), "Plain Text".to_string()),
        ("pick".to_string(), "Relationship".to_string()),
        ("currency".to_string(), "Currency".to_string()),
    ])
}
