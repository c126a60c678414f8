//! Error types for schema items and schemas.

use thiserror::Error;

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for item validation and assignment.
pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// A single field failing one of its constraints.
///
/// Every message names the field and the breached bound (or the expected
/// type), so callers can surface it to API consumers as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("the character length of '{field}' is too short, please keep it above {min}")]
    TooShort { field: String, min: usize },

    #[error("the character length of '{field}' is too long, please keep it below {max}")]
    TooLong { field: String, max: usize },

    #[error("the value of '{field}' cannot be below {min}")]
    BelowMin { field: String, min: f64 },

    #[error("the value of '{field}' cannot be above {max}")]
    AboveMax { field: String, max: f64 },

    #[error("'{field}' must be a finite number")]
    NotFinite { field: String },

    #[error("you must select at least {min} items for '{field}'")]
    TooFewItems { field: String, min: usize },

    #[error("you have selected too many items for '{field}', please only use up to {max}")]
    TooManyItems { field: String, max: usize },

    #[error("item {index} of '{field}' is too short, please keep it above {min} characters")]
    ItemTooShort { field: String, index: usize, min: usize },

    #[error("item {index} of '{field}' is too long, please keep it below {max} characters")]
    ItemTooLong { field: String, index: usize, max: usize },

    #[error("item {index} of '{field}' must be a finite number")]
    ItemNotFinite { field: String, index: usize },

    #[error("item {index} of '{field}' cannot be below {min}")]
    ItemBelowMin { field: String, index: usize, min: f64 },

    #[error("item {index} of '{field}' cannot be above {max}")]
    ItemAboveMax { field: String, index: usize, max: f64 },

    #[error("'{field}' must have a value")]
    Missing { field: String },

    #[error("please use a valid ID for '{field}'")]
    InvalidId { field: String },

    #[error("'{field}' has html code that is not allowed")]
    DisallowedHtml { field: String },

    #[error("'{field}' expects a value of type {expected}")]
    TypeMismatch { field: String, expected: &'static str },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            Self::TooShort { field, .. }
            | Self::TooLong { field, .. }
            | Self::BelowMin { field, .. }
            | Self::AboveMax { field, .. }
            | Self::NotFinite { field }
            | Self::TooFewItems { field, .. }
            | Self::TooManyItems { field, .. }
            | Self::ItemTooShort { field, .. }
            | Self::ItemTooLong { field, .. }
            | Self::ItemNotFinite { field, .. }
            | Self::ItemBelowMin { field, .. }
            | Self::ItemAboveMax { field, .. }
            | Self::Missing { field }
            | Self::InvalidId { field }
            | Self::DisallowedHtml { field }
            | Self::TypeMismatch { field, .. } => field,
        }
    }
}

/// Errors raised while assembling a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two items with the same name in one schema.
    #[error("a schema item named '{0}' already exists")]
    DuplicateName(String),

    /// The name is reserved for the document id.
    #[error("you cannot use the schema item name '{0}' as it is a reserved keyword")]
    ReservedName(String),
}
