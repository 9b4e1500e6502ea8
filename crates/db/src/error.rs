use thiserror::Error;

/// Errors raised by [`Repository`](crate::Repository) adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// A record with the same identifier already exists.
    #[error("{entity} with id {id} already exists")]
    Conflict { entity: &'static str, id: String },
}

impl RepositoryError {
    pub fn conflict(entity: &'static str, id: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            id: id.into(),
        }
    }
}
