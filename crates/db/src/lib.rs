//! Storage for the inventory collections.
//!
//! Handlers talk to the [`Repository`] port; the only adapter shipped is the
//! in-memory one, which is also what tests inject with their own fixtures.

pub mod error;
pub mod fixtures;
pub mod repositories;
pub mod store;

pub use error::RepositoryError;
pub use repositories::{InMemoryRepository, Repository};
pub use store::Store;
