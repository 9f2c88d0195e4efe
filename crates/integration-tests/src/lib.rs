//! Integration tests for Tulsi Botanicals.
//!
//! # Running Tests
//!
//! ```bash
//! # Apply migrations, then start the site
//! cargo run -p tulsi-cli -- migrate
//! cargo run -p tulsi-site
//!
//! # Run the tests (ignored by default)
//! cargo test -p tulsi-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `site_auth` - Registration, login, and session cookie behavior
//! - `site_products` - Product API CRUD and validation
//! - `site_messages` - Inquiry and contact form submissions
//! - `site_pages` - Rendered pages, health, and the dashboard gate
//! - `site_database` - Schema-level checks against the database
//!
//! Shared helpers live here; the tests themselves are under `tests/`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;
use secrecy::SecretString;
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

/// Password used for throwaway admin accounts.
pub const TEST_PASSWORD: &str = "integration-test-pw-7f2a";

/// Base URL for the site (configurable via environment).
#[must_use]
pub fn site_base_url() -> String {
    std::env::var("SITE_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client with a cookie store and redirect following disabled.
///
/// Redirects stay observable, so tests can assert on the `303 See Other`
/// responses the dashboard gate produces.
///
/// # Panics
///
/// Panics if the client cannot be built.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to create HTTP client")
}

/// Register a fresh admin account and log in.
///
/// The returned client holds the session cookie. The email is unique per
/// call so concurrently running tests do not collide.
///
/// # Panics
///
/// Panics if registration or login fails.
pub async fn authenticated_client() -> (Client, String) {
    let base_url = site_base_url();
    let client = client();

    let email = format!("integration-test-{}@example.com", Uuid::new_v4());
    let resp = client
        .post(format!("{base_url}/api/admin/register"))
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to register admin");
    assert_eq!(resp.status(), 201, "Registration failed");

    let resp = client
        .post(format!("{base_url}/api/admin/login"))
        .json(&json!({"email": email, "password": TEST_PASSWORD}))
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), 200, "Login failed");

    (client, email)
}

/// Connect to the database under test.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is unset or the connection fails.
pub async fn database_pool() -> PgPool {
    let database_url = std::env::var("DATABASE_URL")
        .map(SecretString::from)
        .expect("DATABASE_URL must be set for database tests");

    tulsi_site::db::create_pool(&database_url, 2)
        .await
        .expect("Failed to connect to database")
}
