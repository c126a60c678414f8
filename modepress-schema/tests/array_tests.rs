use modepress_schema::{NumberType, SchemaItemFactory as F, ValidationError};
use serde_json::json;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

// ── Text arrays ──────────────────────────────────────────────────

#[test]
fn text_array_strips_tags_from_entries() {
    let item = F::text_array("tags", strings(&["<b>rust</b>", "web"]));
    assert_eq!(item.value(false), json!(["rust", "web"]));
}

#[test]
fn text_array_too_few_items() {
    let mut item = F::text_array_bounded("categories", vec![], 1, 5, 0, 100);
    let err = item.validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooFewItems {
            field: "categories".into(),
            min: 1
        }
    );
}

#[test]
fn text_array_too_many_items() {
    let mut item = F::text_array_bounded("tags", strings(&["a", "b", "c"]), 0, 2, 0, 100);
    let msg = item.validate().unwrap_err().to_string();
    assert!(msg.contains("tags"));
    assert!(msg.contains('2'));
}

#[test]
fn text_array_entry_length_reports_index() {
    let mut item = F::text_array_bounded("tags", strings(&["ok", "far too long"]), 0, 10, 1, 5);
    assert_eq!(
        item.validate().unwrap_err(),
        ValidationError::ItemTooLong {
            field: "tags".into(),
            index: 1,
            max: 5
        }
    );
}

#[test]
fn text_array_rejects_mixed_entries() {
    let mut item = F::text_array("tags", vec![]);
    assert!(item.set_value(&json!(["a", 1])).is_err());
    assert_eq!(item.value(false), json!([]));
}

// ── Number arrays ────────────────────────────────────────────────

#[test]
fn num_array_normalizes_entries() {
    let mut item = F::num_array("scores", vec![1.9, 2.2], 0.0, 10.0, NumberType::Int);
    item.validate().unwrap();
    assert_eq!(item.value(false), json!([1.0, 2.0]));
}

#[test]
fn num_array_entry_out_of_range() {
    let mut item = F::num_array("scores", vec![1.0, 20.0], 0.0, 10.0, NumberType::Int);
    assert_eq!(
        item.validate().unwrap_err(),
        ValidationError::ItemAboveMax {
            field: "scores".into(),
            index: 1,
            max: 10.0
        }
    );
}

#[test]
fn num_array_non_finite_entry_reports_index() {
    let mut item = F::num_array("scores", vec![1.0, f64::NAN], 0.0, 10.0, NumberType::Float);
    let err = item.validate().unwrap_err();
    assert_eq!(
        err,
        ValidationError::ItemNotFinite {
            field: "scores".into(),
            index: 1
        }
    );
    assert!(err.to_string().contains("item 1 of 'scores'"));
}

#[test]
fn num_array_assignment() {
    let mut item = F::num_array("scores", vec![], 0.0, 10.0, NumberType::Float);
    item.set_value(&json!([1, 2.5])).unwrap();
    assert_eq!(item.value(false), json!([1.0, 2.5]));
    assert!(item.set_value(&json!(["x"])).is_err());
}

#[test]
fn array_clone_is_independent() {
    let original = F::text_array("tags", strings(&["a"]));
    let mut copy = original.clone();
    copy.set_value(&json!(["b", "c"])).unwrap();
    assert_eq!(original.value(false), json!(["a"]));
    assert_eq!(copy.value(false), json!(["b", "c"]));
}
