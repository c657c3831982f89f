pub mod dbs;
pub mod error;
pub mod gateway;
pub mod models;
pub mod store;

pub use dbs::MemoryStore;
#[cfg(feature = "mongodb")]
pub use dbs::mongo::{MongoStore, MongoStoreBuilder};
pub use error::{PersistError, Result};
pub use gateway::{create_document, insert_record, stamp_timestamps, to_fields};
pub use models::{Fields, StoredDocument, CREATED_AT, TIMESTAMP_FIELDS, UPDATED_AT};
pub use store::DocumentStore;
