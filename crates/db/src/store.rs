use std::sync::Arc;

use kemomimi_core::models::{Category, Product, PublicItem, User};

use crate::error::RepositoryError;
use crate::fixtures;
use crate::repositories::{InMemoryRepository, Repository};

/// The four collections, each behind its repository port.
///
/// Cheaply cloneable; clones share the same underlying repositories.
#[derive(Clone)]
pub struct Store {
    pub products: Arc<dyn Repository<Product>>,
    pub public_items: Arc<dyn Repository<PublicItem>>,
    pub categories: Arc<dyn Repository<Category>>,
    pub users: Arc<dyn Repository<User>>,
}

impl Store {
    /// Empty in-memory collections.
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(InMemoryRepository::<Product>::new()),
            public_items: Arc::new(InMemoryRepository::<PublicItem>::new()),
            categories: Arc::new(InMemoryRepository::<Category>::new()),
            users: Arc::new(InMemoryRepository::<User>::new()),
        }
    }

    /// In-memory collections pre-populated with [`fixtures`].
    pub fn seeded() -> Result<Self, RepositoryError> {
        let store = Self {
            products: Arc::new(InMemoryRepository::with_records(fixtures::products())?),
            public_items: Arc::new(InMemoryRepository::with_records(fixtures::public_items())?),
            categories: Arc::new(InMemoryRepository::with_records(fixtures::categories())?),
            users: Arc::new(InMemoryRepository::with_records(fixtures::users())?),
        };

        tracing::info!("Seeded in-memory store with fixture records");
        Ok(store)
    }
}
