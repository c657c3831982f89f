use std::sync::Arc;

use folio_persist::{DocumentStore, MemoryStore, MongoStore};
use folio_types::Schema;

use crate::config::{Config, StoreBackend};

/// Shared application state passed to all handlers
///
/// The store handle is built once at startup. It is `None` when no database
/// is configured or the client could not be created; handlers decide how to
/// report that.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Option<Arc<dyn DocumentStore>>,
    pub schema: Arc<Schema>,
}

impl AppState {
    pub fn new(config: Config, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            schema: Arc::new(Schema::portfolio()),
        }
    }
}

/// Build the document store handle. A missing or broken database setup is
/// not fatal: the service starts without a store and reports it on /test.
pub async fn init_store(config: &Config) -> Option<Arc<dyn DocumentStore>> {
    match config.database.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            Some(Arc::new(MemoryStore::new(&config.database.name)))
        }
        StoreBackend::Mongodb => {
            let Some(uri) = config.database_url.as_deref() else {
                tracing::warn!("DATABASE_URL is not set; running without a document store");
                return None;
            };

            tracing::info!("Connecting to MongoDB");
            let result = MongoStore::builder()
                .uri(uri)
                .database(&config.database.name)
                .timeout(config.database.timeout())
                .app_name(&config.app.name)
                .build()
                .await;

            match result {
                Ok(store) => {
                    tracing::info!(database = %config.database.name, "MongoDB client ready");
                    Some(Arc::new(store))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to create MongoDB client; running without a document store");
                    None
                }
            }
        }
    }
}
