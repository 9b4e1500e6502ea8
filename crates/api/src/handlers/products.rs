//! Handlers for the product catalog.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kemomimi_core::error::CoreError;
use kemomimi_core::models::{Product, Record};
use kemomimi_core::query::{query, ListParams, QueryOptions};
use kemomimi_core::registration::NewProduct;

use super::{list_params, new_id};
use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/products
///
/// Filter, search, and sort the catalog. Unknown `filter`/`sort` values are
/// ignored.
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = list_params(params);
    let snapshot = state.store.products.list().await?;
    let options = QueryOptions::<Product>::from_params(&params);

    let products = query(&snapshot, &options);
    tracing::debug!(?options, total = snapshot.len(), returned = products.len(), "Listed products");

    Ok(Json(products))
}

/// GET /api/v1/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let product = state
        .store
        .products
        .get(&product_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: Product::ENTITY,
            id: product_id,
        })?;

    Ok(Json(product))
}

/// POST /api/v1/products
///
/// Register a product. `name` is required; the identifier is assigned here.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;

    let product = input.into_product(new_id())?;
    let product = state.store.products.insert(product).await?;

    tracing::info!(product_id = %product.product_id, name = %product.name, "Product registered");

    Ok((StatusCode::CREATED, Json(product)))
}
