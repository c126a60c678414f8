use modepress_models::collections::{Categories, Comments, Posts, Renders, Todo};
use modepress_models::{Collection, Model, ModelError};
use modepress_schema::ValidationError;
use serde_json::json;

fn model<C: Collection>() -> Model {
    Model::of::<C>().unwrap()
}

// ── Todo ─────────────────────────────────────────────────────────

#[test]
fn todo_defaults_are_valid() {
    let todo = model::<Todo>().create_instance(&json!({})).unwrap();
    let data = todo.clean_data(false);
    assert_eq!(data["title"], json!("New Todo"));
    assert_eq!(data["done"], json!(false));
    assert!(data["lastUpdated"].is_i64());
}

#[test]
fn todo_title_is_bounded() {
    let err = model::<Todo>()
        .create_instance(&json!({"title": "a".repeat(25)}))
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("title"));
    assert!(msg.contains("20"));
}

#[test]
fn todo_last_updated_refreshes() {
    let mut todo = model::<Todo>()
        .create_instance(&json!({"lastUpdated": 1}))
        .unwrap();
    assert!(todo.clean_data(false)["lastUpdated"].as_i64().unwrap() > 1);
    todo.update(&json!({"done": true})).unwrap();
    assert_eq!(todo.clean_data(false)["done"], json!(true));
}

// ── Posts ────────────────────────────────────────────────────────

#[test]
fn post_requires_slug_and_title() {
    let err = model::<Posts>()
        .create_instance(&json!({"author": "admin", "title": "Hello"}))
        .unwrap_err();
    assert!(matches!(
        err,
        ModelError::Validation(ValidationError::TooShort { ref field, .. }) if field == "slug"
    ));
}

#[test]
fn post_content_is_filtered() {
    let post = model::<Posts>()
        .create_instance(&json!({
            "author": "admin",
            "title": "Hello",
            "slug": "hello",
            "content": "<p>Hi</p><script>steal()</script>",
            "tags": ["<b>rust</b>"]
        }))
        .unwrap();
    let data = post.clean_data(false);
    assert_eq!(data["content"], json!("<p>Hi</p>"));
    assert_eq!(data["tags"], json!(["rust"]));
}

// ── Categories, comments, renders ────────────────────────────────

#[test]
fn category_needs_title() {
    assert!(model::<Categories>()
        .create_instance(&json!({"slug": "news"}))
        .is_err());
    assert!(model::<Categories>()
        .create_instance(&json!({"title": "News", "slug": "news"}))
        .is_ok());
}

#[test]
fn comment_references_must_be_ids() {
    let comments = model::<Comments>();
    let err = comments
        .create_instance(&json!({"author": "a", "content": "<p>x</p>", "post": "123"}))
        .unwrap_err();
    assert!(matches!(err, ModelError::Validation(ValidationError::InvalidId { .. })));

    assert!(comments
        .create_instance(&json!({
            "author": "a",
            "content": "<p>x</p>",
            "post": "507f1f77bcf86cd799439011"
        }))
        .is_ok());
}

#[test]
fn render_keeps_full_page() {
    let page = "<!DOCTYPE html><html><head><title>t</title></head><body></body></html>";
    let render = model::<Renders>()
        .create_instance(&json!({"url": "/home", "html": page, "expiration": 3600}))
        .unwrap();
    assert_eq!(render.clean_data(false)["html"], json!(page));
}

#[test]
fn render_expiration_cannot_be_negative() {
    assert!(model::<Renders>()
        .create_instance(&json!({"url": "/home", "expiration": -5}))
        .is_err());
}
