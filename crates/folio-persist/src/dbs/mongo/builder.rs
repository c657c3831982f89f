use std::time::Duration;

use mongodb::{options::ClientOptions, Client};

use super::MongoStore;
use crate::error::{PersistError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct MongoStoreBuilder {
    uri: Option<String>,
    database: Option<String>,
    timeout: Duration,
    app_name: Option<String>,
}

impl MongoStoreBuilder {
    pub fn new() -> Self {
        Self {
            uri: None,
            database: None,
            timeout: DEFAULT_TIMEOUT,
            app_name: None,
        }
    }

    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Bounds server selection and connection establishment
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    /// Create the client. The driver connects lazily, so an unreachable
    /// server only shows up on the first operation.
    pub async fn build(self) -> Result<MongoStore> {
        let uri = self
            .uri
            .ok_or_else(|| PersistError::Configuration("uri is required".to_string()))?;
        let database = self
            .database
            .ok_or_else(|| PersistError::Configuration("database is required".to_string()))?;

        let mut options = ClientOptions::parse(uri.as_str())
            .await
            .map_err(|e| PersistError::Connection(e.to_string()))?;
        options.server_selection_timeout = Some(self.timeout);
        options.connect_timeout = Some(self.timeout);
        if self.app_name.is_some() {
            options.app_name = self.app_name;
        }

        let client = Client::with_options(options)
            .map_err(|e| PersistError::Connection(e.to_string()))?;

        tracing::debug!(database = %database, "MongoDB client created");
        Ok(MongoStore::new(client.database(&database)))
    }
}

impl Default for MongoStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
