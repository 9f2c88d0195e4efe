//! Integration tests for inquiry and contact form submissions.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The site running (cargo run -p tulsi-site)
//!
//! Run with: cargo test -p tulsi-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use tulsi_integration_tests::{authenticated_client, client, site_base_url};

/// Find the list position of the entry whose `message` carries the marker.
fn position_of(list: &Value, marker: &str) -> Option<usize> {
    list.as_array()?.iter().position(|entry| {
        entry["message"]
            .as_str()
            .is_some_and(|m| m.contains(marker))
    })
}

// ============================================================================
// Inquiry Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_inquiry_submissions_list_newest_first() {
    let base_url = site_base_url();
    let client = client();

    let first_marker = Uuid::new_v4().to_string();
    let second_marker = Uuid::new_v4().to_string();

    for marker in [&first_marker, &second_marker] {
        let resp = client
            .post(format!("{base_url}/api/inquiries"))
            .json(&json!({
                "productId": 1,
                "productName": "Tulsi Immunity Blend",
                "name": "Integration Tester",
                "email": "tester@example.com",
                "phone": "+91 98765 43210",
                "message": format!("Inquiry marker {marker}")
            }))
            .send()
            .await
            .expect("Failed to submit inquiry");
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = resp.json().await.expect("Failed to parse response");
        assert_eq!(body["success"], true);
        assert!(body["inquiry"]["id"].is_number());
    }

    let resp = client
        .get(format!("{base_url}/api/inquiries"))
        .send()
        .await
        .expect("Failed to list inquiries");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse response");
    let first_pos =
        position_of(&body["inquiries"], &first_marker).expect("First inquiry not in list");
    let second_pos =
        position_of(&body["inquiries"], &second_marker).expect("Second inquiry not in list");
    assert!(
        second_pos < first_pos,
        "Later submission should list before the earlier one"
    );
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_inquiry_reports_missing_fields() {
    let base_url = site_base_url();

    let resp = client()
        .post(format!("{base_url}/api/inquiries"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to submit inquiry");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let message = body["message"].as_str().unwrap_or_default();
    for field in ["productId", "name", "email", "phone", "message"] {
        assert!(
            message.contains(field),
            "Error message should mention {field}: {message}"
        );
    }
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_inquiry_survives_product_deletion() {
    let base_url = site_base_url();
    let (admin, _) = authenticated_client().await;

    // Create a product to inquire about
    let product_name = format!("Deletable Blend {}", Uuid::new_v4());
    let resp = admin
        .post(format!("{base_url}/api/products"))
        .json(&json!({
            "name": product_name,
            "description": "Created by the integration test suite.",
            "price": "499.00",
            "category": "Detox"
        }))
        .send()
        .await
        .expect("Failed to create product");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let product_id = body["product"]["id"].as_i64().expect("Product id missing");

    // Submit an inquiry against it
    let marker = Uuid::new_v4().to_string();
    let resp = client()
        .post(format!("{base_url}/api/inquiries"))
        .json(&json!({
            "productId": product_id,
            "productName": product_name,
            "name": "Integration Tester",
            "email": "tester@example.com",
            "phone": "+91 98765 43210",
            "message": format!("Inquiry marker {marker}")
        }))
        .send()
        .await
        .expect("Failed to submit inquiry");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Delete the product
    let resp = admin
        .delete(format!("{base_url}/api/products/{product_id}"))
        .send()
        .await
        .expect("Failed to delete product");
    assert_eq!(resp.status(), StatusCode::OK);

    // The inquiry remains, with its snapshot of the product name
    let resp = client()
        .get(format!("{base_url}/api/inquiries"))
        .send()
        .await
        .expect("Failed to list inquiries");
    let body: Value = resp.json().await.expect("Failed to parse response");

    let inquiries = body["inquiries"].as_array().expect("Expected a list");
    let survivor = inquiries
        .iter()
        .find(|entry| {
            entry["message"]
                .as_str()
                .is_some_and(|m| m.contains(&marker))
        })
        .expect("Inquiry disappeared with its product");
    assert_eq!(survivor["productName"], json!(product_name));
}

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_contact_submissions_list_newest_first() {
    let base_url = site_base_url();
    let client = client();

    let first_marker = Uuid::new_v4().to_string();
    let second_marker = Uuid::new_v4().to_string();

    for marker in [&first_marker, &second_marker] {
        let resp = client
            .post(format!("{base_url}/api/contact"))
            .json(&json!({
                "name": "Integration Tester",
                "email": "tester@example.com",
                "phone": "+91 98765 43210",
                "subject": "Bulk order",
                "message": format!("Contact marker {marker}")
            }))
            .send()
            .await
            .expect("Failed to submit contact message");
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = resp.json().await.expect("Failed to parse response");
        assert_eq!(body["success"], true);
        assert_eq!(body["contact"]["subject"], "Bulk order");
    }

    let resp = client
        .get(format!("{base_url}/api/contact"))
        .send()
        .await
        .expect("Failed to list contact messages");
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.expect("Failed to parse response");
    let first_pos =
        position_of(&body["contacts"], &first_marker).expect("First message not in list");
    let second_pos =
        position_of(&body["contacts"], &second_marker).expect("Second message not in list");
    assert!(second_pos < first_pos);
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_contact_reports_missing_fields() {
    let base_url = site_base_url();

    let resp = client()
        .post(format!("{base_url}/api/contact"))
        .json(&json!({"name": "Integration Tester"}))
        .send()
        .await
        .expect("Failed to submit contact message");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let message = body["message"].as_str().unwrap_or_default();
    for field in ["email", "phone", "subject", "message"] {
        assert!(
            message.contains(field),
            "Error message should mention {field}: {message}"
        );
    }
}
