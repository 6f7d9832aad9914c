//! Operator API: the session gate around every mutation, and the
//! category/product lifecycle behind it.

mod support;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use carta_core::{CatalogStore, CategoryOrder, ProductFilter};
use serde_json::{Value, json};
use support::{login, spawn_app};

async fn create_category(app: &support::TestApp, token: &str, name: &str) -> String {
    let response = app
        .server
        .post("/api/v1/admin/categories")
        .authorization_bearer(token)
        .json(&json!({ "name": name }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = spawn_app();
    let response = app
        .server
        .post("/api/v1/auth/login")
        .json(&json!({
            "email": support::OPERATOR_EMAIL,
            "password": "nope",
        }))
        .await;
    response.assert_status_unauthorized();

    // Errors come back in the same envelope as successes.
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(body["error"].is_string());
    assert!(body.get("data").is_none_or(Value::is_null));
}

#[tokio::test]
async fn mutations_without_a_session_are_rejected_and_change_nothing() {
    let app = spawn_app();
    let token = login(&app.server).await;
    create_category(&app, &token, "Starters").await;

    let before = app
        .db
        .backend()
        .list_categories(CategoryOrder::DisplayIndex)
        .await
        .unwrap();

    // No token at all
    let response = app
        .server
        .post("/api/v1/admin/categories")
        .json(&json!({ "name": "Sneaky" }))
        .await;
    response.assert_status_unauthorized();

    // Garbage token
    let id = before[0].id;
    let response = app
        .server
        .delete(&format!("/api/v1/admin/categories/{id}?confirm=true"))
        .authorization_bearer("not-a-real-token")
        .await;
    response.assert_status_unauthorized();

    let after = app
        .db
        .backend()
        .list_categories(CategoryOrder::DisplayIndex)
        .await
        .unwrap();
    assert_eq!(before, after, "unauthorized calls must not touch the store");
}

#[tokio::test]
async fn logout_invalidates_the_session_for_further_mutations() {
    let app = spawn_app();
    let token = login(&app.server).await;

    app.server
        .post("/api/v1/auth/logout")
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    let response = app
        .server
        .post("/api/v1/admin/categories")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Too late" }))
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn session_status_reports_the_operator() {
    let app = spawn_app();
    let token = login(&app.server).await;

    let response = app
        .server
        .get("/api/v1/auth/session")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["email"], support::OPERATOR_EMAIL);
}

#[tokio::test]
async fn categories_are_created_at_the_end_of_the_display_order() {
    let app = spawn_app();
    let token = login(&app.server).await;

    create_category(&app, &token, "Starters").await;
    create_category(&app, &token, "Mains").await;

    let categories = app
        .db
        .backend()
        .list_categories(CategoryOrder::DisplayIndex)
        .await
        .unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].name, "Starters");
    assert_eq!(categories[0].order_index, 1);
    assert_eq!(categories[1].name, "Mains");
    assert_eq!(categories[1].order_index, 2);
}

#[tokio::test]
async fn operator_category_listing_is_alphabetical() {
    let app = spawn_app();
    let token = login(&app.server).await;

    // Created in display order, which is not alphabetical.
    for name in ["Starters", "Drinks", "Mains"] {
        create_category(&app, &token, name).await;
    }

    let body: Value = app
        .server
        .get("/api/v1/admin/categories")
        .authorization_bearer(&token)
        .await
        .json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Drinks", "Mains", "Starters"]);

    // The storefront keeps display order.
    let storefront: Value = app.server.get("/api/v1/categories").await.json();
    let names: Vec<&str> = storefront["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Starters", "Drinks", "Mains"]);
}

#[tokio::test]
async fn blank_category_names_are_rejected_before_any_write() {
    let app = spawn_app();
    let token = login(&app.server).await;

    let response = app
        .server
        .post("/api/v1/admin/categories")
        .authorization_bearer(&token)
        .json(&json!({ "name": "   " }))
        .await;
    response.assert_status_bad_request();

    let categories = app
        .db
        .backend()
        .list_categories(CategoryOrder::DisplayIndex)
        .await
        .unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn moving_a_category_swaps_display_positions() {
    let app = spawn_app();
    let token = login(&app.server).await;

    let starters = create_category(&app, &token, "Starters").await;
    create_category(&app, &token, "Mains").await;

    let response = app
        .server
        .post(&format!("/api/v1/admin/categories/{starters}/move"))
        .authorization_bearer(&token)
        .json(&json!({ "direction": "down" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["moved"], true);

    // Caller refetches to observe the new order
    let menu: Value = app.server.get("/api/v1/categories").await.json();
    let names: Vec<&str> = menu["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Mains", "Starters"]);

    // Boundary move reports success without change
    let response = app
        .server
        .post(&format!("/api/v1/admin/categories/{starters}/move"))
        .authorization_bearer(&token)
        .json(&json!({ "direction": "down" }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["moved"], false);
}

#[tokio::test]
async fn category_rename_keeps_its_position() {
    let app = spawn_app();
    let token = login(&app.server).await;

    let id = create_category(&app, &token, "Startrs").await;
    create_category(&app, &token, "Mains").await;

    let response = app
        .server
        .put(&format!("/api/v1/admin/categories/{id}"))
        .authorization_bearer(&token)
        .json(&json!({ "name": "Starters" }))
        .await;
    response.assert_status_ok();

    let categories = app
        .db
        .backend()
        .list_categories(CategoryOrder::DisplayIndex)
        .await
        .unwrap();
    assert_eq!(categories[0].name, "Starters");
    assert_eq!(categories[0].order_index, 1);
}

#[tokio::test]
async fn cascade_delete_requires_explicit_confirmation() {
    let app = spawn_app();
    let token = login(&app.server).await;

    let id = create_category(&app, &token, "Seasonal").await;

    let response = app
        .server
        .delete(&format!("/api/v1/admin/categories/{id}"))
        .authorization_bearer(&token)
        .await;
    response.assert_status_bad_request();

    assert_eq!(
        app.db
            .backend()
            .list_categories(CategoryOrder::DisplayIndex)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn cascade_delete_removes_category_and_products() {
    let app = spawn_app();
    let token = login(&app.server).await;

    let id = create_category(&app, &token, "Seasonal").await;
    for name in ["Soup", "Salad"] {
        app.server
            .post("/api/v1/admin/products")
            .authorization_bearer(&token)
            .json(&json!({
                "name": name,
                "price": "45.00",
                "category_id": id,
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let response = app
        .server
        .delete(&format!("/api/v1/admin/categories/{id}?confirm=true"))
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["products_removed"], 2);

    assert!(
        app.db
            .backend()
            .list_products(&ProductFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn product_with_image_gets_a_served_asset_url() {
    let app = spawn_app();
    let token = login(&app.server).await;
    let category = create_category(&app, &token, "Mains").await;

    let image = BASE64.encode([0xff, 0xd8, 0xff, 0xe0]);
    let response = app
        .server
        .post("/api/v1/admin/products")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Kokoreç",
            "price": "185.00",
            "description": "İzmir usulü",
            "category_id": category,
            "is_campaign": true,
            "image": { "data": image, "extension": "jpg" },
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    let url = body["data"]["image_url"].as_str().unwrap();
    assert!(url.contains("/assets/"));
    assert!(url.ends_with(".jpg"));

    // Bytes are really on disk and served back via /assets
    let name = url.rsplit('/').next().unwrap();
    let served = app.server.get(&format!("/assets/{name}")).await;
    served.assert_status_ok();
    assert_eq!(served.as_bytes().as_ref(), [0xff, 0xd8, 0xff, 0xe0]);
}

#[tokio::test]
async fn invalid_base64_image_is_rejected_without_a_product_row() {
    let app = spawn_app();
    let token = login(&app.server).await;
    let category = create_category(&app, &token, "Mains").await;

    let response = app
        .server
        .post("/api/v1/admin/products")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Kokoreç",
            "price": "185.00",
            "category_id": category,
            "image": { "data": "%%% not base64 %%%", "extension": "jpg" },
        }))
        .await;
    response.assert_status_bad_request();

    assert!(
        app.db
            .backend()
            .list_products(&ProductFilter::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn product_creation_against_a_missing_category_is_rejected() {
    let app = spawn_app();
    let token = login(&app.server).await;

    let response = app
        .server
        .post("/api/v1/admin/products")
        .authorization_bearer(&token)
        .json(&json!({
            "name": "Orphan",
            "price": "10.00",
            "category_id": uuid::Uuid::now_v7(),
        }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn deleting_a_product_removes_only_that_product() {
    let app = spawn_app();
    let token = login(&app.server).await;
    let category = create_category(&app, &token, "Mains").await;

    let first: Value = app
        .server
        .post("/api/v1/admin/products")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Keep", "price": "10.00", "category_id": category }))
        .await
        .json();
    let second: Value = app
        .server
        .post("/api/v1/admin/products")
        .authorization_bearer(&token)
        .json(&json!({ "name": "Drop", "price": "12.00", "category_id": category }))
        .await
        .json();

    let drop_id = second["data"]["id"].as_str().unwrap();
    app.server
        .delete(&format!("/api/v1/admin/products/{drop_id}"))
        .authorization_bearer(&token)
        .await
        .assert_status_ok();

    let remaining = app
        .db
        .backend()
        .list_products(&ProductFilter::default())
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(
        remaining[0].id.to_string(),
        first["data"]["id"].as_str().unwrap()
    );
}
