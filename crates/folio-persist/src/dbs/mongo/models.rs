use bson::{Bson, Document};
use chrono::DateTime;

use crate::error::{PersistError, Result};
use crate::models::{Fields, TIMESTAMP_FIELDS};

/// Convert gateway fields into a BSON document.
///
/// Timestamp fields holding RFC 3339 strings become native BSON dates so they
/// sort and index as dates.
pub fn to_bson_document(fields: Fields) -> Result<Document> {
    let mut document =
        bson::to_document(&fields).map_err(|e| PersistError::InvalidRecord(e.to_string()))?;

    for key in TIMESTAMP_FIELDS {
        let millis = match document.get(key) {
            Some(Bson::String(raw)) => DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|parsed| parsed.timestamp_millis()),
            _ => None,
        };

        if let Some(millis) = millis {
            document.insert(key, bson::DateTime::from_millis(millis));
        }
    }

    Ok(document)
}

pub fn inserted_id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}
