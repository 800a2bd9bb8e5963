use fieldcraft_model::FieldError;

#[test]
fn not_numeric_names_the_field() {
    let err = FieldError::NotNumeric { label: "Unit Price".into() };
    assert_eq!(format!("{err}"), "Unit Price is not numeric");
    assert!(err.is_validation());
}

#[test]
fn duplicate_type_display() {
    let err = FieldError::DuplicateFieldType("currency".into());
    assert!(format!("{err}").contains("already registered"));
    assert!(!err.is_validation());
}

#[test]
fn error_from_serde_json() {
    let serde_err: Result<serde_json::Value, _> = serde_json::from_str("not json");
    let err: FieldError = serde_err.unwrap_err().into();
    assert!(format!("{err}").contains("serialization"));
}
