//! Public storefront reads: no session required, ordered categories,
//! grouped products, campaign subset.

mod support;

use serde_json::{Value, json};
use support::{login, spawn_app};

async fn seed_catalog(app: &support::TestApp) {
    let token = login(&app.server).await;

    let mut categories = Vec::new();
    for name in ["Starters", "Mains", "Drinks"] {
        let body: Value = app
            .server
            .post("/api/v1/admin/categories")
            .authorization_bearer(&token)
            .json(&json!({ "name": name }))
            .await
            .json();
        categories.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let products = [
        ("Soup", &categories[0], false),
        ("Grill", &categories[1], true),
        ("Pasta", &categories[1], false),
        ("Ayran", &categories[2], true),
    ];
    for (name, category, is_campaign) in products {
        app.server
            .post("/api/v1/admin/products")
            .authorization_bearer(&token)
            .json(&json!({
                "name": name,
                "price": "45.50",
                "category_id": category,
                "is_campaign": is_campaign,
            }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }
}

#[tokio::test]
async fn health_endpoint_is_public() {
    let app = spawn_app();
    let response = app.server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn empty_catalog_menu_is_an_empty_list() {
    let app = spawn_app();
    let body: Value = app.server.get("/api/v1/menu").await.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn menu_returns_ordered_sections_with_grouped_products() {
    let app = spawn_app();
    seed_catalog(&app).await;

    // No authorization header anywhere below.
    let body: Value = app.server.get("/api/v1/menu").await.json();
    let sections = body["data"].as_array().unwrap();
    assert_eq!(sections.len(), 3);

    let names: Vec<&str> = sections
        .iter()
        .map(|s| s["category"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Starters", "Mains", "Drinks"]);

    let mains = &sections[1];
    let mains_products: Vec<&str> = mains["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(mains_products.len(), 2);
    assert!(mains_products.contains(&"Grill"));
    assert!(mains_products.contains(&"Pasta"));
}

#[tokio::test]
async fn campaigns_are_exactly_the_flagged_subset() {
    let app = spawn_app();
    seed_catalog(&app).await;

    let body: Value = app.server.get("/api/v1/campaigns").await.json();
    let campaigns = body["data"].as_array().unwrap();
    assert_eq!(campaigns.len(), 2);
    for product in campaigns {
        assert_eq!(product["is_campaign"], true);
    }
    let names: Vec<&str> = campaigns
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Grill"));
    assert!(names.contains(&"Ayran"));
}

#[tokio::test]
async fn category_product_listing_is_public_and_scoped() {
    let app = spawn_app();
    seed_catalog(&app).await;

    let categories: Value = app.server.get("/api/v1/categories").await.json();
    let mains_id = categories["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["name"] == "Mains")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let body: Value = app
        .server
        .get(&format!("/api/v1/categories/{mains_id}/products"))
        .await
        .json();
    let products = body["data"].as_array().unwrap();
    assert_eq!(products.len(), 2);
    for product in products {
        assert_eq!(product["category_id"].as_str().unwrap(), mains_id);
    }
}

#[tokio::test]
async fn unknown_category_listing_is_empty_not_an_error() {
    let app = spawn_app();
    let id = uuid::Uuid::now_v7();
    let response = app
        .server
        .get(&format!("/api/v1/categories/{id}/products"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
