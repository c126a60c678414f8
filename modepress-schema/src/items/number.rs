use serde::{Deserialize, Serialize};

use crate::{ValidationError, ValidationResult};

/// Upper limit for `decimal_places`; larger requests are clamped.
pub const MAX_DECIMAL_PLACES: u8 = 20;

/// Default rounding precision for float numbers.
pub const DEFAULT_DECIMAL_PLACES: u8 = 2;

/// How a number is normalized before range checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberType {
    /// Fractional part is truncated toward zero.
    #[default]
    Int,
    /// Rounded to the item's decimal places.
    Float,
}

impl NumberType {
    /// Applies this type's normalization to `value`.
    pub fn normalize(self, value: f64, decimal_places: u8) -> f64 {
        match self {
            Self::Int => value.trunc(),
            Self::Float => {
                let factor = 10f64.powi(i32::from(decimal_places));
                let scaled = value * factor;
                if scaled.is_finite() {
                    scaled.round() / factor
                } else {
                    value
                }
            }
        }
    }
}

/// A numeric field bounded by `[min, max]`. Unbounded sides are ±infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberItem {
    value: f64,
    #[serde(default = "neg_infinity", skip_serializing_if = "is_unbounded")]
    min: f64,
    #[serde(default = "infinity", skip_serializing_if = "is_unbounded")]
    max: f64,
    #[serde(default)]
    number_type: NumberType,
    #[serde(default = "default_decimal_places")]
    decimal_places: u8,
}

pub(super) fn neg_infinity() -> f64 {
    f64::NEG_INFINITY
}

pub(super) fn infinity() -> f64 {
    f64::INFINITY
}

pub(super) fn is_unbounded(bound: &f64) -> bool {
    bound.is_infinite()
}

pub(super) fn default_decimal_places() -> u8 {
    DEFAULT_DECIMAL_PLACES
}

impl NumberItem {
    /// An unbounded integer.
    pub fn new(value: f64) -> Self {
        Self::with_constraints(
            value,
            f64::NEG_INFINITY,
            f64::INFINITY,
            NumberType::Int,
            DEFAULT_DECIMAL_PLACES,
        )
    }

    pub fn with_constraints(
        value: f64,
        min: f64,
        max: f64,
        number_type: NumberType,
        decimal_places: u8,
    ) -> Self {
        Self {
            value,
            min,
            max,
            number_type,
            decimal_places: decimal_places.min(MAX_DECIMAL_PLACES),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
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

    /// Normalizes the value according to its number type, then checks range.
    pub(crate) fn validate(&mut self, field: &str) -> ValidationResult {
        if !self.value.is_finite() {
            return Err(ValidationError::NotFinite { field: field.into() });
        }
        self.value = self
            .number_type
            .normalize(self.value, self.decimal_places.min(MAX_DECIMAL_PLACES));
        if self.value < self.min {
            return Err(ValidationError::BelowMin {
                field: field.into(),
                min: self.min,
            });
        }
        if self.value > self.max {
            return Err(ValidationError::AboveMax {
                field: field.into(),
                max: self.max,
            });
        }
        Ok(())
    }
}
