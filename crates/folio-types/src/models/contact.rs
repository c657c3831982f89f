use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::record::Record;

/// Source recorded when the client does not send one
pub const DEFAULT_SOURCE: &str = "portfolio";

/// Message submitted through the contact form
///
/// Timestamps are assigned by the persistence gateway at insert time; a
/// client may send them, in which case they are kept as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default = "default_source", deserialize_with = "source_or_default")]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
            source: default_source(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}

impl Record for ContactMessage {
    const COLLECTION: &'static str = "contactmessage";
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

// `"source": null` is treated the same as a missing field
fn source_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_source))
}
