//! Error types for models and instances.

use modepress_schema::{SchemaError, ValidationError};
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building models or documents.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A document field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The model's schema could not be assembled.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A model definition could not be parsed or written.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input was not shaped like a document.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A registry already holds a model for this collection.
    #[error("a model for collection '{0}' is already registered")]
    DuplicateCollection(String),

    /// A registry holds no model for this collection.
    #[error("no model registered for collection '{0}'")]
    UnknownCollection(String),
}
