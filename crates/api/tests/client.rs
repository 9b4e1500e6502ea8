//! End-to-end tests for `InventoryClient` against a server on an ephemeral port.

mod common;

use assert_matches::assert_matches;
use kemomimi_api::client::{ClientError, InventoryClient};
use kemomimi_core::query::ListParams;
use kemomimi_core::registration::{NewProduct, NewPublicItem};
use tokio::net::TcpListener;

/// Serve the seeded app on `127.0.0.1:0` and return a client pointed at it.
async fn spawn_server() -> InventoryClient {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = common::build_test_app(common::seeded_store());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    InventoryClient::new(&format!("http://{addr}/api/v1/")).unwrap()
}

#[tokio::test]
async fn fetches_lists_with_query_params() {
    let client = spawn_server().await;

    let products = client.fetch_products(&ListParams::default()).await.unwrap();
    assert_eq!(products.len(), 2);

    let params = ListParams {
        filter: Some("is_remaining".into()),
        is_remaining: Some("false".into()),
        ..Default::default()
    };
    let items = client.fetch_public_items(&params).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].public_item_id, "3");

    let params = ListParams {
        search: Some("みみ".into()),
        ..Default::default()
    };
    let products = client.fetch_products(&params).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_id, "1");
}

#[tokio::test]
async fn fetches_lookups() {
    let client = spawn_server().await;

    assert_eq!(client.fetch_categories().await.unwrap().len(), 3);

    let users = client.fetch_users().await.unwrap();
    assert_eq!(users[0].handle_name, "KEMO");
}

#[tokio::test]
async fn registers_product_and_reads_it_back() {
    let client = spawn_server().await;
    let payload = NewProduct {
        name: Some("ねこみみ".into()),
        ..Default::default()
    };

    let created = client.register_product(&payload).await.unwrap();
    let fetched = client.fetch_product(&created.product_id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn registers_public_item() {
    let client = spawn_server().await;
    let payload = NewPublicItem {
        name: Some("予備けもみみ".into()),
        product_id: Some("1".into()),
        ..Default::default()
    };

    let created = client.register_public_item(&payload).await.unwrap();
    assert_eq!(created.category_id(), Some("1"));
    assert!(created.is_remaining);
}

#[tokio::test]
async fn rejected_registration_surfaces_status_and_message() {
    let client = spawn_server().await;

    let err = client
        .register_product(&NewProduct::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_matches!(err, ClientError::Status { message, .. } if message == "name is required");
}

#[tokio::test]
async fn missing_record_is_a_404() {
    let client = spawn_server().await;

    let err = client.fetch_product("nope").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn ids_with_reserved_characters_stay_one_path_segment() {
    let client = spawn_server().await;

    // Unencoded, these would resolve to product 1 or 2.
    for id in ["1?x=1", "1#frag", "1/../2"] {
        let err = client.fetch_product(id).await.unwrap_err();
        assert_eq!(err.status(), Some(404), "id {id}");
        assert_matches!(
            err,
            ClientError::Status { ref message, .. } if message == &format!("Product with id {id} not found")
        );
    }
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let client = InventoryClient::new(&format!("http://{addr}/api/v1")).unwrap();

    let err = client.fetch_categories().await.unwrap_err();
    assert_matches!(err, ClientError::Transport(_));
}
