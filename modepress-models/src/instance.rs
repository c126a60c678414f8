use modepress_schema::items::is_valid_id;
use modepress_schema::{Schema, ID_FIELD};
use serde_json::{Map, Value};

use crate::{ModelError, ModelResult};

/// One document of a collection, holding its own copy of the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInstance {
    collection: String,
    id: Option<String>,
    schema: Schema,
}

impl ModelInstance {
    pub(crate) fn new(collection: &str, id: Option<String>, schema: Schema) -> Self {
        Self {
            collection: collection.to_string(),
            id,
            schema,
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Sets the document id assigned by the store.
    pub fn set_id(&mut self, id: &str) -> ModelResult<()> {
        self.id = parse_id(&Value::from(id))?;
        Ok(())
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Assigns and validates new field values.
    ///
    /// The update is all-or-nothing: on any failure the instance keeps its
    /// previous values.
    pub fn update(&mut self, data: &Value) -> ModelResult<()> {
        let mut next = self.schema.clone();
        apply(&mut next, data)?;
        self.schema = next;
        Ok(())
    }

    /// The document as stored: raw values plus `_id` when known.
    pub fn to_document(&self) -> Value {
        self.with_id(self.schema.raw_values())
    }

    /// The document as returned to API callers. With `sanitize` set,
    /// sensitive values are masked.
    pub fn clean_data(&self, sanitize: bool) -> Value {
        self.with_id(self.schema.clean_data(sanitize))
    }

    fn with_id(&self, mut fields: Map<String, Value>) -> Value {
        if let Some(id) = &self.id {
            fields.insert(ID_FIELD.to_string(), Value::from(id.as_str()));
        }
        Value::Object(fields)
    }
}

/// Assigns `data` onto `schema` and validates it.
pub(crate) fn apply(schema: &mut Schema, data: &Value) -> ModelResult<()> {
    let fields = data
        .as_object()
        .ok_or_else(|| ModelError::InvalidData("expected a JSON object".into()))?;
    schema.set(fields)?;
    schema.validate()?;
    Ok(())
}

pub(crate) fn parse_id(value: &Value) -> ModelResult<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(id) if is_valid_id(id) => Ok(Some(id.clone())),
        other => Err(ModelError::InvalidData(format!("'{other}' is not a valid {ID_FIELD}"))),
    }
}
