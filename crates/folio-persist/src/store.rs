use async_trait::async_trait;

use crate::error::Result;
use crate::models::Fields;

/// Document database operations the API relies on
///
/// Implementations are shared across request handlers behind an `Arc`, so
/// every method takes `&self`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document into `collection` and return its identifier
    async fn insert_document(&self, collection: &str, fields: Fields) -> Result<String>;

    /// Names of the collections in the store's database
    async fn list_collection_names(&self) -> Result<Vec<String>>;

    /// Name of the database this store writes to
    fn database_name(&self) -> &str;
}
