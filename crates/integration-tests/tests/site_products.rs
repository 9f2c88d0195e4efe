//! Integration tests for the product API.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The site running (cargo run -p tulsi-site)
//!
//! Run with: cargo test -p tulsi-integration-tests -- --ignored

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use tulsi_core::Category;
use tulsi_integration_tests::{authenticated_client, client, site_base_url};

/// Product shape as it crosses the wire. Prices arrive as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductPayload {
    id: i32,
    name: String,
    price: String,
    category: String,
    benefits: Vec<String>,
    dosage: String,
}

/// A valid create body with a unique name.
fn product_body() -> Value {
    json!({
        "name": format!("Integration Blend {}", Uuid::new_v4()),
        "description": "Created by the integration test suite.",
        "price": "499.00",
        "category": "Immunity",
        "benefits": ["Strengthens natural defences", "Rich in antioxidants"],
        "ingredients": ["Tulsi extract", "Amla"]
    })
}

/// Create a product and return its wire payload.
async fn create_product(client: &reqwest::Client, body: &Value) -> ProductPayload {
    let base_url = site_base_url();
    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(body)
        .send()
        .await
        .expect("Failed to create product");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    serde_json::from_value(body["product"].clone()).expect("Unexpected product shape")
}

// ============================================================================
// CRUD Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_product_crud_round_trip() {
    let base_url = site_base_url();
    let (client, _) = authenticated_client().await;

    let created = create_product(&client, &product_body()).await;
    assert_eq!(created.price, "499.00");
    assert_eq!(created.category, "Immunity");
    assert_eq!(created.benefits.len(), 2);
    assert_eq!(created.dosage, "1-2 tablets daily");

    // Read it back
    let resp = client
        .get(format!("{base_url}/api/products/{}", created.id))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);

    // Partial update: only the price changes, everything else survives
    let resp = client
        .put(format!("{base_url}/api/products/{}", created.id))
        .json(&json!({"price": "599.00"}))
        .send()
        .await
        .expect("Failed to update product");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse response");
    let updated: ProductPayload =
        serde_json::from_value(body["product"].clone()).expect("Unexpected product shape");
    assert_eq!(updated.price, "599.00");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.benefits, created.benefits);

    // Delete, then reads return 404
    let resp = client
        .delete(format!("{base_url}/api/products/{}", created.id))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"success": true}));

    let resp = client
        .get(format!("{base_url}/api/products/{}", created.id))
        .send()
        .await
        .expect("Failed to get deleted product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_product_list_is_public() {
    let base_url = site_base_url();

    let resp = client()
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .expect("Failed to list products");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert!(body["products"].is_array());
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_product_delete_unknown_is_404() {
    let base_url = site_base_url();
    let (client, _) = authenticated_client().await;

    let resp = client
        .delete(format!("{base_url}/api/products/999999"))
        .send()
        .await
        .expect("Failed to send delete");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Product not found");
}

// ============================================================================
// Authorization Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_product_mutations_require_auth() {
    let base_url = site_base_url();
    let client = client();

    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&product_body())
        .send()
        .await
        .expect("Failed to send create");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Not authorized");

    let resp = client
        .delete(format!("{base_url}/api/products/1"))
        .send()
        .await
        .expect("Failed to send delete");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_product_rejects_unknown_category() {
    let base_url = site_base_url();
    let (client, _) = authenticated_client().await;

    let mut body = product_body();
    body["category"] = json!("Unknown");

    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let message = body["message"].as_str().unwrap_or_default();

    // The error lists every allowed category
    for category in Category::ALL {
        assert!(
            message.contains(category.as_str()),
            "Error message should mention {category}: {message}"
        );
    }
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_product_rejects_negative_price() {
    let base_url = site_base_url();
    let (client, _) = authenticated_client().await;

    let mut body = product_body();
    body["price"] = json!("-1.00");

    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&body)
        .send()
        .await
        .expect("Failed to send create");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(
        body["message"]
            .as_str()
            .unwrap_or_default()
            .contains("Price cannot be negative")
    );
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_product_create_reports_every_missing_field() {
    let base_url = site_base_url();
    let (client, _) = authenticated_client().await;

    let resp = client
        .post(format!("{base_url}/api/products"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send create");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let message = body["message"].as_str().unwrap_or_default();

    for field in ["name", "description", "price", "category"] {
        assert!(
            message.contains(field),
            "Error message should mention {field}: {message}"
        );
    }
}
