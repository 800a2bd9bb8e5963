use fieldcraft_model::{FieldError, FieldTypeDescriptor, FieldTypeHandler, FieldTypeRegistry};

struct Named(&'static str, &'static str);

impl FieldTypeHandler for Named {
    fn descriptor(&self) -> FieldTypeDescriptor {
        FieldTypeDescriptor {
            group: "Test".into(),
            type_id: self.0.into(),
            label: self.1.into(),
        }
    }
}

#[test]
fn register_and_get() {
    let mut registry = FieldTypeRegistry::new();
    assert!(registry.is_empty());
    registry.register(Named("text", "Plain Text")).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains("text"));
    let handler = registry.get("text").unwrap();
    assert_eq!(handler.descriptor().label, "Plain Text");
    assert!(registry.get("missing").is_none());
}

#[test]
fn duplicate_registration_fails() {
    let mut registry = FieldTypeRegistry::new();
    registry.register(Named("text", "Plain Text")).unwrap();
    let err = registry.register(Named("text", "Other")).unwrap_err();
    assert!(matches!(err, FieldError::DuplicateFieldType(ref id) if id == "text"));
    assert_eq!(registry.get("text").unwrap().descriptor().label, "Plain Text");
}

#[test]
fn type_labels_follow_registration_order() {
    let mut registry = FieldTypeRegistry::new();
    registry.register(Named("text", "Plain Text")).unwrap();
    registry.register(Named("pick", "Relationship")).unwrap();
    registry.register(Named("currency", "Currency")).unwrap();

    let labels = registry.type_labels();
    let keys: Vec<_> = labels.keys().map(String::as_str).collect();
    assert_eq!(keys, ["text", "pick", "currency"]);
    assert_eq!(labels["pick"], "Relationship");
}

#[test]
fn debug_lists_type_ids() {
    let mut registry = FieldTypeRegistry::new();
    registry.register(Named("text", "Plain Text")).unwrap();
    assert!(format!("{registry:?}").contains("text"));
}
