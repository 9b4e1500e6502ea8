//! Request handlers, one module per collection.

pub mod lookups;
pub mod products;
pub mod public_items;

use axum::extract::rejection::QueryRejection;
use axum::extract::Query;
use kemomimi_core::query::ListParams;

/// Identifier for a newly registered record.
pub(crate) fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}

/// Unwrap list parameters, falling back to a passthrough query when the
/// query string cannot be decoded at all.
pub(crate) fn list_params(params: Result<Query<ListParams>, QueryRejection>) -> ListParams {
    match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Ignoring undecodable list query");
            ListParams::default()
        }
    }
}
