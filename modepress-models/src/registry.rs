use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::collections::{Categories, Comments, Posts, Renders, Todo};
use crate::{IndexSpec, Model, ModelError, ModelInstance, ModelResult};

/// Models keyed by collection name.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, Model>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in collection.
    pub fn with_defaults() -> ModelResult<Self> {
        let mut registry = Self::new();
        registry.register(Model::of::<Todo>()?)?;
        registry.register(Model::of::<Renders>()?)?;
        registry.register(Model::of::<Posts>()?)?;
        registry.register(Model::of::<Categories>()?)?;
        registry.register(Model::of::<Comments>()?)?;
        Ok(registry)
    }

    /// Adds a model. Collection names must be unique.
    pub fn register(&mut self, model: Model) -> ModelResult<()> {
        let name = model.collection_name().to_string();
        if self.models.contains_key(&name) {
            return Err(ModelError::DuplicateCollection(name));
        }
        debug!(
            collection = %name,
            fields = model.default_schema().len(),
            "Model registered"
        );
        self.models.insert(name, model);
        Ok(())
    }

    pub fn get(&self, collection: &str) -> Option<&Model> {
        self.models.get(collection)
    }

    /// Creates a validated document for the named collection.
    pub fn create_instance(&self, collection: &str, data: &Value) -> ModelResult<ModelInstance> {
        self.get(collection)
            .ok_or_else(|| ModelError::UnknownCollection(collection.to_string()))?
            .create_instance(data)
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Index requests per collection, for the storage layer to apply at startup.
    /// Collections without indexable fields are omitted.
    pub fn index_plan(&self) -> BTreeMap<String, Vec<IndexSpec>> {
        self.models
            .iter()
            .map(|(name, model)| (name.clone(), model.index_specs()))
            .filter(|(_, specs)| !specs.is_empty())
            .collect()
    }
}
