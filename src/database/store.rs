use async_trait::async_trait;
use thiserror::Error;

use super::models::{Movie, MovieFields, MovieId};

/// Errors raised by a movie store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Persistence adapter for movie records.
///
/// Every operation is a single-document (or single-batch) call against the
/// backing store. Lookups by id take an already-parsed [`MovieId`]; identifier
/// syntax is checked by the caller before the store is touched.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Bulk insert, used by the seed operation
    async fn insert_many(&self, records: Vec<MovieFields>) -> Result<(), StoreError>;

    /// Insert one record and return its newly assigned id
    async fn insert_one(&self, record: MovieFields) -> Result<MovieId, StoreError>;

    /// All records in store-native order
    async fn find_all(&self) -> Result<Vec<Movie>, StoreError>;

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, StoreError>;

    /// Overwrite the fields of the matching record. No-op when nothing matches.
    async fn update_by_id(&self, id: &MovieId, fields: MovieFields) -> Result<(), StoreError>;

    /// Remove the matching record. No-op when nothing matches.
    async fn delete_by_id(&self, id: &MovieId) -> Result<(), StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections on shutdown
    async fn close(&self) {}
}
