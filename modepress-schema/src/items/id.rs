use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::{ValidationError, ValidationResult};

static OBJECT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9a-fA-F]{24}$").expect("valid id pattern"));

/// Returns true if `id` looks like a document id (24 hex digits).
pub fn is_valid_id(id: &str) -> bool {
    OBJECT_ID.is_match(id)
}

/// A reference to another document by id. Unset is allowed; a set value
/// must be a well-formed id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdItem {
    #[serde(default)]
    value: Option<String>,
}

impl IdItem {
    pub fn new(value: Option<String>) -> Self {
        let mut item = Self { value: None };
        item.set_value(value);
        item
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Empty strings are stored as unset.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value.filter(|v| !v.is_empty());
    }

    pub(crate) fn validate(&self, field: &str) -> ValidationResult {
        match &self.value {
            Some(id) if !is_valid_id(id) => Err(ValidationError::InvalidId { field: field.into() }),
            _ => Ok(()),
        }
    }
}
