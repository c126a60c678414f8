//! Schema items for Modepress documents.
//!
//! Defines the typed field layer that every Modepress collection is built on:
//! - [`SchemaItem`] — one named field with sensitive/indexable/unique flags
//! - [`ItemKind`] — the closed set of field types (text, number, date, bool,
//!   text and number arrays, id, html, json), each with its own constraints
//! - [`Schema`] — the ordered, name-unique set of items describing a document
//! - [`SchemaItemFactory`] — shorthand constructors used by model definitions
//!
//! Validation never panics; a failing field yields a [`ValidationError`]
//! whose message names the field and the breached constraint.

mod error;
mod factory;
pub mod items;
pub mod sanitize;
mod schema;

pub use error::{SchemaError, SchemaResult, ValidationError, ValidationResult};
pub use factory::SchemaItemFactory;
pub use items::{
    BoolItem, DateItem, HtmlItem, IdItem, ItemKind, JsonItem, NumArrayItem, NumberItem,
    NumberType, SchemaItem, TextArrayItem, TextItem,
};
pub use schema::{Schema, ID_FIELD};
