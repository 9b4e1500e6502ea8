use async_trait::async_trait;
use kemomimi_core::models::Record;
use tokio::sync::RwLock;

use super::Repository;
use crate::error::RepositoryError;

/// A [`Repository`] backed by a vector behind an async `RwLock`.
///
/// Readers get a cloned snapshot, so a list request never observes a
/// half-applied insert.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Build a repository pre-populated with `records`.
    ///
    /// Fails on the first duplicate identifier.
    pub fn with_records(records: Vec<T>) -> Result<Self, RepositoryError> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.id().to_string()) {
                return Err(RepositoryError::conflict(T::ENTITY, record.id()));
            }
        }

        Ok(Self {
            records: RwLock::new(records),
        })
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: &str) -> Result<Option<T>, RepositoryError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn insert(&self, record: T) -> Result<T, RepositoryError> {
        let mut records = self.records.write().await;

        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(RepositoryError::conflict(T::ENTITY, record.id()));
        }

        tracing::debug!(entity = T::ENTITY, id = record.id(), "Inserted record");
        records.push(record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use kemomimi_core::models::Category;

    fn category(id: &str, name: &str) -> Category {
        Category {
            category_id: id.into(),
            name: name.into(),
            remarks: None,
        }
    }

    #[tokio::test]
    async fn insert_then_get_and_list() {
        let repo = InMemoryRepository::new();
        repo.insert(category("1", "けもみみ")).await.unwrap();
        repo.insert(category("2", "家具")).await.unwrap();

        assert_eq!(repo.get("2").await.unwrap().unwrap().name, "家具");
        assert_eq!(repo.get("3").await.unwrap(), None);

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["けもみみ", "家具"]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_a_conflict() {
        let repo = InMemoryRepository::new();
        repo.insert(category("1", "a")).await.unwrap();

        let err = repo.insert(category("1", "b")).await.unwrap_err();
        assert_matches!(err, RepositoryError::Conflict { entity: "Category", ref id } if id == "1");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_is_a_snapshot() {
        let repo = InMemoryRepository::with_records(vec![category("1", "a")]).unwrap();
        let snapshot = repo.list().await.unwrap();

        repo.insert(category("2", "b")).await.unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[test]
    fn with_records_rejects_duplicates() {
        let result = InMemoryRepository::with_records(vec![category("1", "a"), category("1", "b")]);
        assert_matches!(result, Err(RepositoryError::Conflict { .. }));
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo: InMemoryRepository<Category> = InMemoryRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
