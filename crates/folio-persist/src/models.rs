use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storage-neutral key/value form of a record
pub type Fields = Map<String, Value>;

pub const CREATED_AT: &str = "created_at";
pub const UPDATED_AT: &str = "updated_at";

/// Fields the gateway stamps at insert time
pub const TIMESTAMP_FIELDS: [&str; 2] = [CREATED_AT, UPDATED_AT];

/// A document as held by a store, together with its assigned identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Fields,
}

impl StoredDocument {
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}
