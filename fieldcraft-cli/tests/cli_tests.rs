use fieldcraft_cli::{builtin_registry, load_catalog, load_field, load_type_labels, parse_options};
use fieldcraft_currency::CurrencyConfig;
use fieldcraft_model::FieldTypeHandler;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;

// ── Option parsing ───────────────────────────────────────────────

#[test]
fn parses_key_value_pairs() {
    let bag = parse_options(&[
        "currency_decimals=3".to_string(),
        "currency_format=9.999,99".to_string(),
    ])
    .unwrap();
    assert_eq!(bag.get("currency_decimals"), Some(&json!("3")));
    assert_eq!(bag.get("currency_format"), Some(&json!("9.999,99")));
}

#[test]
fn value_may_contain_equals() {
    let bag = parse_options(&["label=a=b".to_string()]).unwrap();
    assert_eq!(bag.get("label"), Some(&Value::String("a=b".into())));
}

#[test]
fn rejects_malformed_pairs() {
    assert!(parse_options(&["currency_decimals".to_string()]).is_err());
    assert!(parse_options(&["=3".to_string()]).is_err());
}

// ── Registry ─────────────────────────────────────────────────────

#[test]
fn builtin_registry_has_currency() {
    let registry = builtin_registry(CurrencyConfig::default()).unwrap();
    assert!(registry.contains("currency"));
    assert_eq!(registry.type_labels().get("currency").map(String::as_str), Some("Currency"));
}

#[test]
fn options_flow_through_registry_handler() {
    let registry = builtin_registry(CurrencyConfig::default()).unwrap();
    let handler = registry.get("currency").unwrap();
    let bag = parse_options(&["currency_format=9.999,99".to_string()]).unwrap();
    assert_eq!(handler.format(&json!("1234.5"), &bag), "1.234,50");
}

// ── File loading ─────────────────────────────────────────────────

#[test]
fn loads_json_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let field = dir.path().join("field.json");
    let types = dir.path().join("types.json");
    let catalog = dir.path().join("catalog.json");
    fs::write(&field, r#"{"id": 4, "name": "price", "type": "currency"}"#).unwrap();
    fs::write(&types, r#"{"currency": "Money"}"#).unwrap();
    fs::write(&catalog, r#"{"user": "Users", "Post Types": {"post_type-post": "Posts (post)"}}"#)
        .unwrap();

    assert_eq!(load_field(&field).unwrap().name, "price");
    assert_eq!(load_type_labels(&types).unwrap()["currency"], "Money");
    assert_eq!(load_catalog(&catalog).unwrap().len(), 2);
}

#[test]
fn missing_file_reports_path() {
    let err = load_field(std::path::Path::new("/nonexistent/field.json")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/field.json"));
}
