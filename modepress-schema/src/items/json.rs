use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form JSON. Stored as given; always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonItem {
    #[serde(default)]
    value: Value,
}

impl JsonItem {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn set_value(&mut self, value: Value) {
        self.value = value;
    }
}
