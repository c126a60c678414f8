use serde::{Deserialize, Serialize};

use super::number::{default_decimal_places, infinity, is_unbounded, neg_infinity, MAX_DECIMAL_PLACES};
use super::{check_item_count, DEFAULT_MAX_CHARACTERS, DEFAULT_MAX_ITEMS};
use crate::items::NumberType;
use crate::sanitize::strip_tags;
use crate::{ValidationError, ValidationResult};

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_max_characters() -> usize {
    DEFAULT_MAX_CHARACTERS
}

/// A list of plain-text entries (tags, category slugs, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextArrayItem {
    value: Vec<String>,
    #[serde(default)]
    min_items: usize,
    #[serde(default = "default_max_items")]
    max_items: usize,
    #[serde(default)]
    min_characters: usize,
    #[serde(default = "default_max_characters")]
    max_characters: usize,
}

impl TextArrayItem {
    pub fn new(value: Vec<String>) -> Self {
        Self::bounded(value, 0, DEFAULT_MAX_ITEMS, 0, DEFAULT_MAX_CHARACTERS)
    }

    pub fn bounded(
        value: Vec<String>,
        min_items: usize,
        max_items: usize,
        min_characters: usize,
        max_characters: usize,
    ) -> Self {
        Self {
            value: value.iter().map(|s| strip_tags(s)).collect(),
            min_items,
            max_items,
            min_characters,
            max_characters,
        }
    }

    pub fn value(&self) -> &[String] {
        &self.value
    }

    pub fn set_value(&mut self, value: Vec<String>) {
        self.value = value.iter().map(|s| strip_tags(s)).collect();
    }

    pub fn min_items(&self) -> usize {
        self.min_items
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn min_characters(&self) -> usize {
        self.min_characters
    }

    pub fn max_characters(&self) -> usize {
        self.max_characters
    }

    pub(crate) fn validate(&mut self, field: &str) -> ValidationResult {
        for entry in &mut self.value {
            *entry = strip_tags(entry);
        }
        check_item_count(field, self.value.len(), self.min_items, self.max_items)?;
        for (index, entry) in self.value.iter().enumerate() {
            let len = entry.chars().count();
            if len < self.min_characters {
                return Err(ValidationError::ItemTooShort {
                    field: field.into(),
                    index,
                    min: self.min_characters,
                });
            }
            if len > self.max_characters {
                return Err(ValidationError::ItemTooLong {
                    field: field.into(),
                    index,
                    max: self.max_characters,
                });
            }
        }
        Ok(())
    }
}

/// A list of numbers sharing one set of range and type constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumArrayItem {
    value: Vec<f64>,
    #[serde(default)]
    min_items: usize,
    #[serde(default = "default_max_items")]
    max_items: usize,
    #[serde(default = "neg_infinity", skip_serializing_if = "is_unbounded")]
    min: f64,
    #[serde(default = "infinity", skip_serializing_if = "is_unbounded")]
    max: f64,
    #[serde(default)]
    number_type: NumberType,
    #[serde(default = "default_decimal_places")]
    decimal_places: u8,
}

impl NumArrayItem {
    pub fn new(value: Vec<f64>) -> Self {
        Self::with_constraints(
            value,
            0,
            DEFAULT_MAX_ITEMS,
            f64::NEG_INFINITY,
            f64::INFINITY,
            NumberType::Int,
            default_decimal_places(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_constraints(
        value: Vec<f64>,
        min_items: usize,
        max_items: usize,
        min: f64,
        max: f64,
        number_type: NumberType,
        decimal_places: u8,
    ) -> Self {
        Self {
            value,
            min_items,
            max_items,
            min,
            max,
            number_type,
            decimal_places: decimal_places.min(MAX_DECIMAL_PLACES),
        }
    }

    pub fn value(&self) -> &[f64] {
        &self.value
    }

    pub fn set_value(&mut self, value: Vec<f64>) {
        self.value = value;
    }

    pub fn min_items(&self) -> usize {
        self.min_items
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn number_type(&self) -> NumberType {
        self.number_type
    }

    pub fn decimal_places(&self) -> u8 {
        self.decimal_places
    }

    pub(crate) fn validate(&mut self, field: &str) -> ValidationResult {
        check_item_count(field, self.value.len(), self.min_items, self.max_items)?;
        let decimal_places = self.decimal_places.min(MAX_DECIMAL_PLACES);
        for (index, entry) in self.value.iter_mut().enumerate() {
            if !entry.is_finite() {
                return Err(ValidationError::ItemNotFinite {
                    field: field.into(),
                    index,
                });
            }
            *entry = self.number_type.normalize(*entry, decimal_places);
            if *entry < self.min {
                return Err(ValidationError::ItemBelowMin {
                    field: field.into(),
                    index,
                    min: self.min,
                });
            }
            if *entry > self.max {
                return Err(ValidationError::ItemAboveMax {
                    field: field.into(),
                    index,
                    max: self.max,
                });
            }
        }
        Ok(())
    }
}
