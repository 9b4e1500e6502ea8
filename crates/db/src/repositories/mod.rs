//! Repository port and the in-memory adapter.

mod in_memory;

use async_trait::async_trait;
use kemomimi_core::models::Record;

use crate::error::RepositoryError;

pub use in_memory::InMemoryRepository;

#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Snapshot of every record, in insertion order.
    async fn list(&self) -> Result<Vec<T>, RepositoryError>;

    /// Fetch a record by identifier.
    async fn get(&self, id: &str) -> Result<Option<T>, RepositoryError>;

    /// Store a new record. Fails with [`RepositoryError::Conflict`] if the
    /// identifier is taken.
    async fn insert(&self, record: T) -> Result<T, RepositoryError>;
}
