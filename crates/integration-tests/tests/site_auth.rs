//! Integration tests for admin authentication.
//!
//! These tests require:
//! - A running `PostgreSQL` database with migrations applied
//! - The site running (cargo run -p tulsi-site)
//!
//! Run with: cargo test -p tulsi-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use tulsi_integration_tests::{TEST_PASSWORD, client, site_base_url};
use tulsi_site::middleware::ADMIN_TOKEN_COOKIE;

/// Unique throwaway email for one test.
fn fresh_email() -> String {
    format!("integration-test-{}@example.com", Uuid::new_v4())
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_register_login_logout_flow() {
    let base_url = site_base_url();
    let client = client();
    let email = fresh_email();

    // Register
    let resp = client
        .post(format!("{base_url}/api/admin/register"))
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Admin registered successfully");

    // Login returns the token and sets the session cookie
    let resp = client
        .post(format!("{base_url}/api/admin/login"))
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to log in");

    assert_eq!(resp.status(), StatusCode::OK);
    let set_cookie = resp
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("Login did not set a cookie")
        .to_str()
        .expect("Set-Cookie is not valid UTF-8")
        .to_owned();
    assert!(set_cookie.starts_with(ADMIN_TOKEN_COOKIE));
    assert!(set_cookie.contains("HttpOnly"));

    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    let token = body["token"].as_str().expect("Token missing from login");
    assert!(!token.is_empty());
    assert!(!set_cookie.contains(TEST_PASSWORD));

    // Logout clears the cookie
    let resp = client
        .post(format!("{base_url}/api/admin/logout"))
        .send()
        .await
        .expect("Failed to log out");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"success": true}));
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_register_rejects_duplicate_email() {
    let base_url = site_base_url();
    let client = client();
    let email = fresh_email();

    let resp = client
        .post(format!("{base_url}/api/admin/register"))
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = client
        .post(format!("{base_url}/api/admin/register"))
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to send duplicate registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Email already exists");
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_register_rejects_weak_password() {
    let base_url = site_base_url();

    let resp = client()
        .post(format!("{base_url}/api/admin/register"))
        .json(&json!({"email": fresh_email(), "password": "123"}))
        .send()
        .await
        .expect("Failed to send registration");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Password should be at least 6 characters");
}

// ============================================================================
// Login Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_login_requires_credentials() {
    let base_url = site_base_url();

    let resp = client()
        .post(format!("{base_url}/api/admin/login"))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send login");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Please provide email and password");
}

#[tokio::test]
#[ignore = "Requires running site server and database"]
async fn test_login_failures_are_indistinguishable() {
    let base_url = site_base_url();
    let client = client();
    let email = fresh_email();

    let resp = client
        .post(format!("{base_url}/api/admin/register"))
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Wrong password for a known account
    let resp = client
        .post(format!("{base_url}/api/admin/login"))
        .json(&json!({"email": email, "password": "wrong-password"}))
        .send()
        .await
        .expect("Failed to send login");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = resp.json().await.expect("Failed to parse response");

    // Unknown account entirely
    let resp = client
        .post(format!("{base_url}/api/admin/login"))
        .json(&json!({"email": fresh_email(), "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to send login");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: Value = resp.json().await.expect("Failed to parse response");

    // Same body either way, so responses do not leak which emails exist
    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["message"], "Invalid credentials");
}
