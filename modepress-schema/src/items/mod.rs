//! Schema items: one named, typed, constrained field of a document.
//!
//! A [`SchemaItem`] carries the field's name and flags; its [`ItemKind`] is a
//! closed set of variants, each holding its own value and constraint payload.
//! Validation, assignment and output are dispatched over the variant.

mod array;
mod boolean;
mod date;
mod html;
mod id;
mod json;
mod number;
mod text;

pub use array::{NumArrayItem, TextArrayItem};
pub use boolean::BoolItem;
pub use date::{now_millis, DateItem};
pub use html::HtmlItem;
pub use id::{is_valid_id, IdItem};
pub use json::JsonItem;
pub use number::{NumberItem, NumberType, DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
pub use text::TextItem;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ValidationError, ValidationResult};

/// Default upper bound on characters for text-like items.
pub const DEFAULT_MAX_CHARACTERS: usize = 10_000;

/// Default upper bound on entries for array items.
pub const DEFAULT_MAX_ITEMS: usize = 10_000;

/// Character used to mask sensitive values.
pub const MASK_CHAR: char = '*';

/// A single field of a document schema.
///
/// `Clone` is a deep copy: the clone shares nothing with the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaItem {
    name: String,
    #[serde(default, skip_serializing_if = "is_false")]
    sensitive: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    indexable: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    unique: bool,
    #[serde(flatten)]
    kind: ItemKind,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The value and constraints of a schema item, per field type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Text(TextItem),
    Number(NumberItem),
    Date(DateItem),
    Bool(BoolItem),
    TextArray(TextArrayItem),
    NumArray(NumArrayItem),
    Id(IdItem),
    Html(HtmlItem),
    Json(JsonItem),
}

impl ItemKind {
    /// Human-readable type name, used in type-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Date(_) => "date",
            Self::Bool(_) => "boolean",
            Self::TextArray(_) => "array of text",
            Self::NumArray(_) => "array of numbers",
            Self::Id(_) => "id",
            Self::Html(_) => "html",
            Self::Json(_) => "json",
        }
    }
}

impl SchemaItem {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            sensitive: false,
            indexable: false,
            unique: false,
            kind,
        }
    }

    /// Marks the item as sensitive: sanitized output masks its value.
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Flags the item for index creation by the storage layer.
    #[must_use]
    pub fn indexable(mut self) -> Self {
        self.indexable = true;
        self
    }

    /// Flags the item as unique. Unique items are always indexable.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self.indexable = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ItemKind {
        &mut self.kind
    }

    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    pub fn is_indexable(&self) -> bool {
        self.indexable
    }

    pub fn is_unique(&self) -> bool {
        self.unique
    }

    /// Checks the value against the variant's constraints.
    ///
    /// May normalize the value: text and html are re-sanitized, numbers are
    /// truncated or rounded, and `use_now` dates are set to the current time.
    pub fn validate(&mut self) -> ValidationResult {
        let field = self.name.as_str();
        match &mut self.kind {
            ItemKind::Text(item) => item.validate(field),
            ItemKind::Number(item) => item.validate(field),
            ItemKind::Date(item) => item.validate(),
            ItemKind::Bool(item) => item.validate(field),
            ItemKind::TextArray(item) => item.validate(field),
            ItemKind::NumArray(item) => item.validate(field),
            ItemKind::Id(item) => item.validate(field),
            ItemKind::Html(item) => item.validate(field),
            ItemKind::Json(_) => Ok(()),
        }
    }

    /// The value as JSON.
    ///
    /// With `sanitize` set, a sensitive text or html item yields a mask of
    /// equal character length and any other sensitive item yields `null`.
    /// An unset date yields the current time.
    pub fn value(&self, sanitize: bool) -> Value {
        if sanitize && self.sensitive {
            return match &self.kind {
                ItemKind::Text(item) => mask(item.value()),
                ItemKind::Html(item) => mask(item.value()),
                _ => Value::Null,
            };
        }
        match &self.kind {
            ItemKind::Text(item) => Value::from(item.value()),
            ItemKind::Number(item) => Value::from(item.value()),
            ItemKind::Date(item) => Value::from(item.value()),
            ItemKind::Bool(item) => item.value().map_or(Value::Null, Value::Bool),
            ItemKind::TextArray(item) => Value::from(item.value().to_vec()),
            ItemKind::NumArray(item) => Value::from(item.value().to_vec()),
            ItemKind::Id(item) => item.value().map_or(Value::Null, Value::from),
            ItemKind::Html(item) => Value::from(item.value()),
            ItemKind::Json(item) => item.value().clone(),
        }
    }

    /// Assigns a JSON value, rejecting values of the wrong type.
    ///
    /// Text-like values go through the same sanitization as construction.
    /// `null` clears optional values (date, bool, id).
    pub fn set_value(&mut self, value: &Value) -> ValidationResult {
        let expected = self.kind.type_name();
        let field = &self.name;
        let mismatch = || ValidationError::TypeMismatch {
            field: field.clone(),
            expected,
        };
        match (&mut self.kind, value) {
            (ItemKind::Text(item), Value::String(s)) => item.set_value(s.as_str()),
            (ItemKind::Html(item), Value::String(s)) => item.set_value(s.as_str()),
            (ItemKind::Number(item), Value::Number(n)) => {
                item.set_value(n.as_f64().ok_or_else(mismatch)?);
            }
            (ItemKind::Date(item), Value::Null) => item.set_value(None),
            (ItemKind::Date(item), Value::Number(n)) => {
                let millis = match n.as_i64() {
                    Some(millis) => millis,
                    None => n.as_f64().ok_or_else(mismatch)?.trunc() as i64,
                };
                item.set_value(Some(millis));
            }
            (ItemKind::Bool(item), Value::Null) => item.set_value(None),
            (ItemKind::Bool(item), Value::Bool(b)) => item.set_value(Some(*b)),
            (ItemKind::Id(item), Value::Null) => item.set_value(None),
            (ItemKind::Id(item), Value::String(s)) => item.set_value(Some(s.clone())),
            (ItemKind::TextArray(item), Value::Array(entries)) => {
                let texts = entries
                    .iter()
                    .map(|e| e.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(mismatch)?;
                item.set_value(texts);
            }
            (ItemKind::NumArray(item), Value::Array(entries)) => {
                let numbers = entries
                    .iter()
                    .map(Value::as_f64)
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(mismatch)?;
                item.set_value(numbers);
            }
            (ItemKind::Json(item), v) => item.set_value(v.clone()),
            _ => return Err(mismatch()),
        }
        Ok(())
    }
}

fn mask(value: &str) -> Value {
    Value::String(std::iter::repeat_n(MASK_CHAR, value.chars().count()).collect())
}

pub(crate) fn check_length(field: &str, len: usize, min: usize, max: usize) -> ValidationResult {
    if len < min {
        return Err(ValidationError::TooShort {
            field: field.into(),
            min,
        });
    }
    if len > max {
        return Err(ValidationError::TooLong {
            field: field.into(),
            max,
        });
    }
    Ok(())
}

pub(crate) fn check_item_count(field: &str, len: usize, min: usize, max: usize) -> ValidationResult {
    if len < min {
        return Err(ValidationError::TooFewItems {
            field: field.into(),
            min,
        });
    }
    if len > max {
        return Err(ValidationError::TooManyItems {
            field: field.into(),
            max,
        });
    }
    Ok(())
}
