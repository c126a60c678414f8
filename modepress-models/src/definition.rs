use modepress_schema::Schema;
use serde::{Deserialize, Serialize};

/// The configuration form of a model, for declaring collections in JSON:
///
/// ```json
/// {
///   "collection": "bookmarks",
///   "items": [
///     {"name": "url", "type": "text", "value": "", "min_characters": 1, "unique": true},
///     {"name": "starred", "type": "bool", "value": false}
///   ]
/// }
/// ```
///
/// Item keys follow the item types: every item takes `name`, `type` and
/// `value`, optional `sensitive`/`indexable`/`unique` flags, and the
/// constraints of its type. Omitted constraints take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub collection: String,
    pub items: Schema,
}
