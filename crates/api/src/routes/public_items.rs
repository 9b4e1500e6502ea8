//! Route definitions for public items.

use axum::routing::get;
use axum::Router;

use crate::handlers::public_items;
use crate::state::AppState;

/// Public item routes mounted at `/public-items`.
///
/// ```text
/// GET    /        -> list_public_items
/// POST   /        -> create_public_item
/// GET    /{id}    -> get_public_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(public_items::list_public_items).post(public_items::create_public_item),
        )
        .route("/{id}", get(public_items::get_public_item))
}
