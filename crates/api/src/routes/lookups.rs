use axum::routing::get;
use axum::Router;

use crate::handlers::lookups;
use crate::state::AppState;

/// ```text
/// GET    /categories  -> list_categories
/// GET    /users       -> list_users
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(lookups::list_categories))
        .route("/users", get(lookups::list_users))
}
