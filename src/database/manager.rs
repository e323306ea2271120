use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::config::{DatabaseConfig, StoreBackend};

use super::memory::MemoryMovieStore;
use super::mongo::MongoMovieStore;
use super::store::{MovieStore, StoreError};

/// Builds the process-wide movie store from configuration
pub struct DatabaseManager;

impl DatabaseManager {
    /// Create the configured store. MongoDB connects lazily, so this only
    /// fails on missing configuration.
    pub fn open(config: &DatabaseConfig) -> Result<Arc<dyn MovieStore>, StoreError> {
        match config.backend {
            StoreBackend::MongoDb => {
                let url = config
                    .url
                    .as_deref()
                    .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;
                info!("Using MongoDB movie store");
                Ok(Arc::new(MongoMovieStore::new(
                    url,
                    config.name.clone(),
                    Duration::from_secs(config.connection_timeout),
                )))
            }
            StoreBackend::Memory => {
                info!("Using in-memory movie store");
                Ok(Arc::new(MemoryMovieStore::new()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn mongodb_backend_requires_url() {
        let config = AppConfig::development().database;
        let err = DatabaseManager::open(&config).err().expect("missing url");
        assert_eq!(err.to_string(), "Missing configuration: DATABASE_URL");
    }

    #[tokio::test]
    async fn memory_backend_needs_no_url() {
        let mut config = AppConfig::development().database;
        config.backend = StoreBackend::Memory;
        let store = DatabaseManager::open(&config).unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
