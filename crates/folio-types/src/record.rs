use serde::{de::DeserializeOwned, Serialize};

use crate::schema;

/// A record shape that belongs to a named collection of the document store
pub trait Record: Serialize + DeserializeOwned + Send + Sync {
    /// Collection the record is stored in (or described under, for static data)
    const COLLECTION: &'static str;

    /// Declared field names, in declaration order
    fn field_names() -> &'static [&'static str] {
        schema::field_names::<Self>()
    }
}
