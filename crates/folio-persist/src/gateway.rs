//! The single path through which records become stored documents.
//!
//! A record is serialized into a plain key/value mapping, stamped with
//! `created_at`/`updated_at` when the caller left them unset, and handed to a
//! [`DocumentStore`] as one unconditional insert. Nothing is retried: store
//! failures go straight back to the caller.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_types::Record;
use serde::Serialize;
use serde_json::Value;

use crate::error::{PersistError, Result};
use crate::models::{Fields, TIMESTAMP_FIELDS};
use crate::store::DocumentStore;

/// Insert `record` into the collection its type belongs to
pub async fn create_document<R: Record>(store: &dyn DocumentStore, record: &R) -> Result<String> {
    insert_record(store, R::COLLECTION, record).await
}

/// Insert `record` into `collection`, returning the store-assigned identifier
pub async fn insert_record<T>(store: &dyn DocumentStore, collection: &str, record: &T) -> Result<String>
where
    T: Serialize + Sync + ?Sized,
{
    if collection.is_empty() {
        return Err(PersistError::InvalidRecord("collection name is empty".to_string()));
    }

    let mut fields = to_fields(record)?;
    stamp_timestamps(&mut fields, Utc::now());

    let id = store.insert_document(collection, fields).await?;
    tracing::debug!(collection, id = %id, "Document inserted");
    Ok(id)
}

/// Serialize a record into its key/value form, keeping every declared field
pub fn to_fields<T: Serialize + ?Sized>(record: &T) -> Result<Fields> {
    match serde_json::to_value(record)? {
        Value::Object(fields) => Ok(fields),
        other => Err(PersistError::InvalidRecord(format!(
            "expected a key/value record, got {}",
            json_kind(&other)
        ))),
    }
}

/// Set both timestamps to `now` wherever they are absent or null
pub fn stamp_timestamps(fields: &mut Fields, now: DateTime<Utc>) {
    let stamp = Value::String(now.to_rfc3339_opts(SecondsFormat::Millis, true));

    for key in TIMESTAMP_FIELDS {
        if fields.get(key).map_or(true, Value::is_null) {
            fields.insert(key.to_string(), stamp.clone());
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
