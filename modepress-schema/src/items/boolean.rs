use serde::{Deserialize, Serialize};

use crate::{ValidationError, ValidationResult};

/// A true/false field. A missing value fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolItem {
    #[serde(default)]
    value: Option<bool>,
}

impl BoolItem {
    pub fn new(value: Option<bool>) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Option<bool> {
        self.value
    }

    pub fn set_value(&mut self, value: Option<bool>) {
        self.value = value;
    }

    pub(crate) fn validate(&self, field: &str) -> ValidationResult {
        match self.value {
            Some(_) => Ok(()),
            None => Err(ValidationError::Missing { field: field.into() }),
        }
    }
}
