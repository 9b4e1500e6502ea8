pub mod health;
pub mod lookups;
pub mod products;
pub mod public_items;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                     list (filter/search/sort), register
/// /products/{id}                get
///
/// /public-items                 list (filter/search/sort), register
/// /public-items/{id}            get
///
/// /categories                   list
/// /users                        list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/public-items", public_items::router())
        .merge(lookups::router())
}
