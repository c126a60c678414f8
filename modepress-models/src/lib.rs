//! Collection models for Modepress.
//!
//! A [`Model`] binds a collection name to the [`Schema`](modepress_schema::Schema)
//! every document of that collection must satisfy:
//! - [`Collection`] — declares a collection in code (name + default schema)
//! - [`ModelInstance`] — one validated document with its own schema copy
//! - [`ModelDefinition`] — the JSON configuration form of a model
//! - [`ModelRegistry`] — models by collection name, plus the index plan the
//!   storage layer applies at startup
//!
//! The built-in collections live in [`collections`].

pub mod collections;
mod definition;
mod error;
mod instance;
mod model;
mod registry;

pub use definition::ModelDefinition;
pub use error::{ModelError, ModelResult};
pub use instance::ModelInstance;
pub use model::{Collection, IndexSpec, Model};
pub use registry::ModelRegistry;
