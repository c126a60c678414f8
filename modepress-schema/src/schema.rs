use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use crate::{SchemaError, SchemaItem, SchemaResult, ValidationError, ValidationResult};

/// Field name reserved for the document id.
pub const ID_FIELD: &str = "_id";

/// The ordered set of fields that makes up a document.
///
/// Names are unique and `_id` is reserved, including when a schema is
/// deserialized. Order is insertion order and is kept for serialization; it
/// has no effect on validation outcomes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SchemaItem>", into = "Vec<SchemaItem>")]
pub struct Schema {
    items: Vec<SchemaItem>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, returning the schema for further `add` calls.
    pub fn add(&mut self, item: SchemaItem) -> SchemaResult<&mut Self> {
        if item.name() == ID_FIELD {
            return Err(SchemaError::ReservedName(item.name().to_string()));
        }
        if self.get(item.name()).is_some() {
            return Err(SchemaError::DuplicateName(item.name().to_string()));
        }
        self.items.push(item);
        Ok(self)
    }

    /// Builds a schema from items, applying the same checks as [`Schema::add`].
    pub fn from_items(items: impl IntoIterator<Item = SchemaItem>) -> SchemaResult<Self> {
        let mut schema = Self::new();
        for item in items {
            schema.add(item)?;
        }
        Ok(schema)
    }

    pub fn remove(&mut self, name: &str) -> Option<SchemaItem> {
        let index = self.items.iter().position(|i| i.name() == name)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&SchemaItem> {
        self.items.iter().find(|i| i.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SchemaItem> {
        self.items.iter_mut().find(|i| i.name() == name)
    }

    pub fn items(&self) -> &[SchemaItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Assigns values by field name. Keys with no matching item are ignored.
    /// Stops at the first value of the wrong type.
    pub fn set(&mut self, data: &Map<String, Value>) -> ValidationResult {
        for (key, value) in data {
            match self.get_mut(key) {
                Some(item) => item.set_value(value)?,
                None => trace!(field = %key, "Ignoring unknown field"),
            }
        }
        Ok(())
    }

    /// Validates every item in order and returns the first failure.
    pub fn validate(&mut self) -> ValidationResult {
        self.items.iter_mut().try_for_each(SchemaItem::validate)
    }

    /// Validates every item and returns all failures.
    pub fn validate_all(&mut self) -> Vec<ValidationError> {
        self.items
            .iter_mut()
            .filter_map(|item| item.validate().err())
            .collect()
    }

    /// Raw values keyed by field name, for persistence.
    pub fn raw_values(&self) -> Map<String, Value> {
        self.collect_values(false)
    }

    /// Values keyed by field name for API responses. With `sanitize` set,
    /// sensitive values are masked.
    pub fn clean_data(&self, sanitize: bool) -> Map<String, Value> {
        self.collect_values(sanitize)
    }

    fn collect_values(&self, sanitize: bool) -> Map<String, Value> {
        self.items
            .iter()
            .map(|item| (item.name().to_string(), item.value(sanitize)))
            .collect()
    }

    /// Items flagged for index creation (unique items included).
    pub fn indexable_items(&self) -> impl Iterator<Item = &SchemaItem> {
        self.items.iter().filter(|i| i.is_indexable())
    }

    pub fn unique_items(&self) -> impl Iterator<Item = &SchemaItem> {
        self.items.iter().filter(|i| i.is_unique())
    }
}

impl TryFrom<Vec<SchemaItem>> for Schema {
    type Error = SchemaError;

    fn try_from(items: Vec<SchemaItem>) -> SchemaResult<Self> {
        Self::from_items(items)
    }
}

impl From<Schema> for Vec<SchemaItem> {
    fn from(schema: Schema) -> Self {
        schema.items
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a SchemaItem;
    type IntoIter = std::slice::Iter<'a, SchemaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
