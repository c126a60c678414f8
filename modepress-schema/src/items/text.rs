use serde::{Deserialize, Serialize};

use super::{check_length, DEFAULT_MAX_CHARACTERS};
use crate::sanitize::strip_tags;
use crate::ValidationResult;

/// A plain-text field. Markup is never stored: every assignment strips tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    value: String,
    #[serde(default)]
    min_characters: usize,
    #[serde(default = "default_max_characters")]
    max_characters: usize,
}

fn default_max_characters() -> usize {
    DEFAULT_MAX_CHARACTERS
}

impl TextItem {
    /// Text with the default bounds `[0, 10000]`.
    pub fn new(value: impl Into<String>) -> Self {
        Self::bounded(value, 0, DEFAULT_MAX_CHARACTERS)
    }

    /// Text with explicit character bounds. The value is stripped of tags here.
    pub fn bounded(value: impl Into<String>, min_characters: usize, max_characters: usize) -> Self {
        Self {
            value: strip_tags(&value.into()),
            min_characters,
            max_characters,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the value, stripping tags.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = strip_tags(&value.into());
    }

    pub fn min_characters(&self) -> usize {
        self.min_characters
    }

    pub fn max_characters(&self) -> usize {
        self.max_characters
    }

    /// Re-strips the value (it may have arrived through deserialization)
    /// and checks its character count against the bounds.
    pub(crate) fn validate(&mut self, field: &str) -> ValidationResult {
        self.value = strip_tags(&self.value);
        check_length(
            field,
            self.value.chars().count(),
            self.min_characters,
            self.max_characters,
        )
    }
}
