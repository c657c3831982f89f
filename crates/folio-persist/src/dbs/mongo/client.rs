use async_trait::async_trait;
use bson::Document;
use mongodb::{error::ErrorKind, Database};

use super::{inserted_id_to_string, to_bson_document, MongoStoreBuilder};
use crate::error::{PersistError, Result};
use crate::models::Fields;
use crate::store::DocumentStore;

#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn builder() -> MongoStoreBuilder {
        MongoStoreBuilder::new()
    }

    /// Connect with default options
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        Self::builder().uri(uri).database(database).build().await
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_document(&self, collection: &str, fields: Fields) -> Result<String> {
        let document = to_bson_document(fields)?;

        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| classify(e, PersistError::Write))?;

        Ok(inserted_id_to_string(result.inserted_id))
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| classify(e, PersistError::Query))
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }
}

// Server selection and I/O failures mean the store could not be reached at all
fn classify(err: mongodb::error::Error, otherwise: fn(String) -> PersistError) -> PersistError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            PersistError::Unavailable(err.to_string())
        }
        _ => otherwise(err.to_string()),
    }
}
