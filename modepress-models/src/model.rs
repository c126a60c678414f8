use modepress_schema::{Schema, SchemaResult, ID_FIELD};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::instance::{apply, parse_id};
use crate::{ModelDefinition, ModelInstance, ModelResult};

/// A collection declared in code.
///
/// Implementors only describe the document shape; [`Model::of`] binds it to
/// the collection name.
pub trait Collection {
    /// Name of the backing collection.
    const NAME: &'static str;

    /// The default schema, built from factory shorthands.
    fn schema() -> SchemaResult<Schema>;
}

/// A field the storage layer should index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    pub field: String,
    pub unique: bool,
}

/// A named collection paired with the schema its documents must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    collection_name: String,
    default_schema: Schema,
}

impl Model {
    pub fn new(collection_name: impl Into<String>, default_schema: Schema) -> Self {
        Self {
            collection_name: collection_name.into(),
            default_schema,
        }
    }

    /// Builds the model for a collection declared in code.
    pub fn of<C: Collection>() -> ModelResult<Self> {
        Ok(Self::new(C::NAME, C::schema()?))
    }

    /// Builds a model from its configuration form.
    pub fn from_definition(definition: ModelDefinition) -> Self {
        Self::new(definition.collection, definition.items)
    }

    /// Parses a JSON model definition. Duplicate or reserved field names
    /// are rejected as they are by [`Schema::add`].
    pub fn from_json(json: &str) -> ModelResult<Self> {
        let definition: ModelDefinition = serde_json::from_str(json)?;
        Ok(Self::from_definition(definition))
    }

    /// The configuration form of this model.
    pub fn definition(&self) -> ModelDefinition {
        ModelDefinition {
            collection: self.collection_name.clone(),
            items: self.default_schema.clone(),
        }
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn default_schema(&self) -> &Schema {
        &self.default_schema
    }

    /// Builds a validated document from request data.
    ///
    /// The default schema is cloned, fields are assigned by name and the
    /// whole schema is validated. The first failing field is returned.
    /// A string `_id` in the data becomes the instance id.
    pub fn create_instance(&self, data: &Value) -> ModelResult<ModelInstance> {
        let mut schema = self.default_schema.clone();
        let result = apply(&mut schema, data).and_then(|()| match data.get(ID_FIELD) {
            Some(id) => parse_id(id),
            None => Ok(None),
        });
        match result {
            Ok(id) => Ok(ModelInstance::new(&self.collection_name, id, schema)),
            Err(err) => {
                debug!(collection = %self.collection_name, error = %err, "Document rejected");
                Err(err)
            }
        }
    }

    /// Index requests for every indexable field, in schema order.
    pub fn index_specs(&self) -> Vec<IndexSpec> {
        self.default_schema
            .indexable_items()
            .map(|item| IndexSpec {
                field: item.name().to_string(),
                unique: item.is_unique(),
            })
            .collect()
    }
}
