use serde::{Deserialize, Serialize};

use super::{check_length, DEFAULT_MAX_CHARACTERS};
use crate::sanitize::{filter_tags, DEFAULT_ALLOWED_TAGS};
use crate::{ValidationError, ValidationResult};

fn default_allowed_tags() -> Option<Vec<String>> {
    Some(DEFAULT_ALLOWED_TAGS.iter().map(|t| (*t).to_string()).collect())
}

fn default_max_characters() -> usize {
    DEFAULT_MAX_CHARACTERS
}

/// A rich-text field that keeps a whitelist of tags.
///
/// `allowed_tags: None` keeps every tag and attribute (used for pre-rendered
/// pages). Otherwise kept tags are also stripped of attributes and urls that
/// [`filter_tags`] does not allow. Disallowed markup is silently removed
/// unless `error_bad_html` is set, in which case the raw value is kept and
/// validation rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HtmlItem {
    value: String,
    #[serde(default = "default_allowed_tags")]
    allowed_tags: Option<Vec<String>>,
    #[serde(default)]
    error_bad_html: bool,
    #[serde(default)]
    min_characters: usize,
    #[serde(default = "default_max_characters")]
    max_characters: usize,
}

impl HtmlItem {
    /// Html restricted to the default tag whitelist.
    pub fn new(value: impl Into<String>) -> Self {
        Self::with_constraints(value, default_allowed_tags(), false, 0, DEFAULT_MAX_CHARACTERS)
    }

    /// Html restricted to the default tag whitelist with character bounds.
    pub fn bounded(value: impl Into<String>, min_characters: usize, max_characters: usize) -> Self {
        Self::with_constraints(value, default_allowed_tags(), false, min_characters, max_characters)
    }

    /// Html that keeps every tag.
    pub fn permissive(value: impl Into<String>, max_characters: usize) -> Self {
        Self::with_constraints(value, None, false, 0, max_characters)
    }

    pub fn with_constraints(
        value: impl Into<String>,
        allowed_tags: Option<Vec<String>>,
        error_bad_html: bool,
        min_characters: usize,
        max_characters: usize,
    ) -> Self {
        let mut item = Self {
            value: String::new(),
            allowed_tags,
            error_bad_html,
            min_characters,
            max_characters,
        };
        item.set_value(value);
        item
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.value = if self.error_bad_html {
            value
        } else {
            self.filtered(&value)
        };
    }

    pub fn allowed_tags(&self) -> Option<&[String]> {
        self.allowed_tags.as_deref()
    }

    pub fn error_bad_html(&self) -> bool {
        self.error_bad_html
    }

    pub fn min_characters(&self) -> usize {
        self.min_characters
    }

    pub fn max_characters(&self) -> usize {
        self.max_characters
    }

    fn filtered(&self, value: &str) -> String {
        match &self.allowed_tags {
            Some(allowed) => filter_tags(value, allowed),
            None => value.to_string(),
        }
    }

    pub(crate) fn validate(&mut self, field: &str) -> ValidationResult {
        let filtered = self.filtered(&self.value);
        if filtered != self.value {
            if self.error_bad_html {
                return Err(ValidationError::DisallowedHtml { field: field.into() });
            }
            self.value = filtered;
        }
        check_length(
            field,
            self.value.chars().count(),
            self.min_characters,
            self.max_characters,
        )
    }
}
