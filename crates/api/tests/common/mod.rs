#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use kemomimi_api::app;
use kemomimi_api::config::ServerConfig;
use kemomimi_api::state::AppState;
use kemomimi_core::models::{Category, Product, PublicItem, User};
use kemomimi_db::{InMemoryRepository, Store};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        seed_fixtures: true,
    }
}

/// Build the full application router (same middleware stack as production)
/// over the given store.
pub fn build_test_app(store: Store) -> Router {
    app::build_router(AppState::new(store, test_config()))
}

/// A store pre-populated with the startup fixtures.
pub fn seeded_store() -> Store {
    Store::seeded().unwrap()
}

/// A store holding exactly the given records.
pub fn store_with(
    products: Vec<Product>,
    public_items: Vec<PublicItem>,
    categories: Vec<Category>,
    users: Vec<User>,
) -> Store {
    Store {
        products: Arc::new(InMemoryRepository::with_records(products).unwrap()),
        public_items: Arc::new(InMemoryRepository::with_records(public_items).unwrap()),
        categories: Arc::new(InMemoryRepository::with_records(categories).unwrap()),
        users: Arc::new(InMemoryRepository::with_records(users).unwrap()),
    }
}

pub fn product(id: &str, name: &str) -> Product {
    Product {
        product_id: id.into(),
        name: name.into(),
        model_number: None,
        product_url: None,
        categories: Vec::new(),
        main_users: Vec::new(),
        remarks: None,
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &json.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect `key` from every object in a JSON array response.
pub fn ids(json: &serde_json::Value, key: &str) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|record| record[key].as_str().unwrap().to_string())
        .collect()
}
