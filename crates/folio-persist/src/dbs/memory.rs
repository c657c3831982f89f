use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Fields, StoredDocument};
use crate::store::DocumentStore;

/// Process-local document store
///
/// Collections come into existence on first insert, the same way they do in
/// MongoDB. Identifiers are random UUIDs.
#[derive(Debug)]
pub struct MemoryStore {
    name: String,
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(HashMap::new()),
        }
    }

    /// Documents of `collection` in insertion order
    pub async fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_document(&self, collection: &str, fields: Fields) -> Result<String> {
        let id = Uuid::new_v4().to_string();

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                fields,
            });

        Ok(id)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.collections.read().await.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn database_name(&self) -> &str {
        &self.name
    }
}
