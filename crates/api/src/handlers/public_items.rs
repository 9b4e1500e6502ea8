//! Handlers for public items.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kemomimi_core::error::CoreError;
use kemomimi_core::models::{Product, PublicItem, Record};
use kemomimi_core::query::{query, ListParams, QueryOptions};
use kemomimi_core::registration::{NewPublicItem, ResolvedRefs};
use kemomimi_db::Store;

use super::{list_params, new_id};
use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/public-items
pub async fn list_public_items(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let params = list_params(params);
    let snapshot = state.store.public_items.list().await?;
    let options = QueryOptions::<PublicItem>::from_params(&params);

    let items = query(&snapshot, &options);
    tracing::debug!(?options, total = snapshot.len(), returned = items.len(), "Listed public items");

    Ok(Json(items))
}

/// GET /api/v1/public-items/{id}
pub async fn get_public_item(
    State(state): State<AppState>,
    Path(public_item_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let item = state
        .store
        .public_items
        .get(&public_item_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: PublicItem::ENTITY,
            id: public_item_id,
        })?;

    Ok(Json(item))
}

/// POST /api/v1/public-items
///
/// Register a public item against an existing product (`product_id`), a new
/// inline product (`product`), or no product at all. Referenced categories
/// and users must already exist. Without an explicit `category_id` the item
/// takes the first category of its product.
pub async fn create_public_item(
    State(state): State<AppState>,
    payload: Result<Json<NewPublicItem>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    input.check()?;

    let refs = resolve_refs(&state.store, &input).await?;
    let item = input.into_public_item(new_id(), refs)?;
    let item = state.store.public_items.insert(item).await?;

    tracing::info!(
        public_item_id = %item.public_item_id,
        product_id = ?item.product_id,
        "Public item registered",
    );

    Ok((StatusCode::CREATED, Json(item)))
}

/// Look up every reference in `input`. An inline product is only inserted
/// once all other references have resolved.
async fn resolve_refs(store: &Store, input: &NewPublicItem) -> AppResult<ResolvedRefs> {
    let existing_product = match &input.product_id {
        Some(id) => Some(store.products.get(id).await?.ok_or_else(|| {
            CoreError::Validation(format!("Unknown product_id '{id}'"))
        })?),
        None => None,
    };

    let explicit_category = match &input.category_id {
        Some(id) => Some(store.categories.get(id).await?.ok_or_else(|| {
            CoreError::Validation(format!("Unknown category_id '{id}'"))
        })?),
        None => None,
    };

    let main_user = match &input.main_user {
        Some(user) => Some(store.users.get(&user.user_id).await?.ok_or_else(|| {
            CoreError::Validation(format!("Unknown main_user '{}'", user.user_id))
        })?),
        None => None,
    };

    let product = match (existing_product, &input.product) {
        (Some(product), _) => Some(product),
        (None, Some(new_product)) => {
            let product = new_product.clone().into_product(new_id())?;
            let product = store.products.insert(product).await?;
            tracing::info!(product_id = %product.product_id, "Product registered inline");
            Some(product)
        }
        (None, None) => None,
    };

    let category = explicit_category.or_else(|| {
        product
            .as_ref()
            .and_then(|p: &Product| p.categories.first().cloned())
    });

    Ok(ResolvedRefs {
        category,
        main_user,
        product_id: product.map(|p| p.product_id),
    })
}
