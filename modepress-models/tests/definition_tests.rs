use modepress_models::collections::Posts;
use modepress_models::{Model, ModelDefinition, ModelError};
use pretty_assertions::assert_eq;
use serde_json::json;

const BOOKMARKS: &str = r#"{
    "collection": "bookmarks",
    "items": [
        {"name": "url", "type": "text", "value": "", "min_characters": 1, "unique": true},
        {"name": "starred", "type": "bool", "value": false},
        {"name": "rating", "type": "number", "value": 0, "min": 0, "max": 5, "number_type": "float", "decimal_places": 1},
        {"name": "seen", "type": "date", "use_now": true}
    ]
}"#;

#[test]
fn loads_model_from_json() {
    let model = Model::from_json(BOOKMARKS).unwrap();
    assert_eq!(model.collection_name(), "bookmarks");
    assert_eq!(model.default_schema().len(), 4);
    assert!(model.default_schema().get("url").unwrap().is_unique());
}

#[test]
fn loaded_model_validates_documents() {
    let model = Model::from_json(BOOKMARKS).unwrap();
    let instance = model
        .create_instance(&json!({"url": "https://x.dev", "rating": 4.26}))
        .unwrap();
    assert_eq!(instance.clean_data(false)["rating"], json!(4.3));
    assert!(model.create_instance(&json!({"rating": 9})).is_err());
}

#[test]
fn rejects_duplicate_fields() {
    let json = r#"{
        "collection": "dupes",
        "items": [
            {"name": "a", "type": "bool", "value": true},
            {"name": "a", "type": "text", "value": ""}
        ]
    }"#;
    assert!(matches!(Model::from_json(json), Err(ModelError::Serialization(_))));
}

#[test]
fn rejects_unknown_item_type() {
    let json = r#"{"collection": "x", "items": [{"name": "a", "type": "blob", "value": 1}]}"#;
    assert!(Model::from_json(json).is_err());
}

#[test]
fn built_in_definition_round_trips() {
    let model = Model::of::<Posts>().unwrap();
    let json = serde_json::to_string(&model.definition()).unwrap();
    let back = Model::from_json(&json).unwrap();
    assert_eq!(back, model);
}

#[test]
fn definition_converts_back_to_model() {
    let definition: ModelDefinition = serde_json::from_str(BOOKMARKS).unwrap();
    let model = Model::from_definition(definition.clone());
    assert_eq!(model.definition(), definition);
}
