use modepress_schema::{BoolItem, ItemKind, SchemaItem, SchemaItemFactory as F, ValidationError};
use serde_json::json;

#[test]
fn true_and_false_are_valid() {
    let mut yes = F::bool("done", true);
    let mut no = F::bool("done", false);
    assert!(yes.validate().is_ok());
    assert!(no.validate().is_ok());
}

#[test]
fn missing_value_fails_with_field_name() {
    let mut item = SchemaItem::new("public", ItemKind::Bool(BoolItem::new(None)));
    let err = item.validate().unwrap_err();
    assert_eq!(err, ValidationError::Missing { field: "public".into() });
    assert!(err.to_string().contains("public"));
}

#[test]
fn null_assignment_then_fails() {
    let mut item = F::bool("done", false);
    item.set_value(&json!(null)).unwrap();
    assert_eq!(item.value(false), json!(null));
    assert!(item.validate().is_err());
}

#[test]
fn non_boolean_is_rejected() {
    let mut item = F::bool("done", false);
    assert!(matches!(
        item.set_value(&json!("true")),
        Err(ValidationError::TypeMismatch { expected: "boolean", .. })
    ));
}

#[test]
fn clone_is_independent() {
    let original = F::bool("done", false);
    let mut copy = original.clone();
    copy.set_value(&json!(true)).unwrap();
    assert_eq!(original.value(false), json!(false));
    assert_eq!(copy.value(false), json!(true));
}
