//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                          - Home page
//! GET  /product/{id}              - Product detail
//! GET  /contact                   - Contact page
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (pings the database)
//!
//! # Admin pages
//! GET  /admin/login               - Admin login page
//! GET  /admin/dashboard           - Product management (session cookie required)
//! GET  /admin/dashboard/inquiries - Inquiry list (session cookie required)
//! GET  /admin/dashboard/contacts  - Contact message list (session cookie required)
//!
//! # Auth API
//! POST /api/admin/register        - Register an admin account
//! POST /api/admin/login           - Log in, sets the adminToken cookie
//! POST /api/admin/logout          - Log out, clears the adminToken cookie
//!
//! # Products API
//! GET    /api/products            - List products
//! POST   /api/products            - Create product (admin token)
//! GET    /api/products/{id}       - Product detail
//! PUT    /api/products/{id}       - Update product (admin token)
//! DELETE /api/products/{id}       - Delete product (admin token)
//!
//! # Inquiries API
//! GET  /api/inquiries             - List product inquiries
//! POST /api/inquiries             - Submit a product inquiry
//!
//! # Contact API
//! GET  /api/contact               - List contact messages
//! POST /api/contact               - Submit a contact message
//! ```

pub mod api;
pub mod dashboard;
pub mod pages;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::dashboard_gate;
use crate::state::AppState;

/// Create the auth API routes router.
pub fn admin_api_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(api::admin::register))
        .route("/login", post(api::admin::login))
        .route("/logout", post(api::admin::logout))
}

/// Create the product API routes router.
///
/// Mutations authenticate through the `RequireAdmin` extractor on their
/// handlers; reads are public.
pub fn product_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(api::products::list).post(api::products::create))
        .route(
            "/{id}",
            get(api::products::get)
                .put(api::products::update)
                .delete(api::products::delete),
        )
}

/// Create the inquiry API routes router.
pub fn inquiry_api_routes() -> Router<AppState> {
    Router::new().route("/", get(api::inquiries::list).post(api::inquiries::create))
}

/// Create the contact API routes router.
pub fn contact_api_routes() -> Router<AppState> {
    Router::new().route("/", get(api::contact::list).post(api::contact::create))
}

/// Create the admin dashboard routes router.
///
/// Every route here sits behind the session cookie gate; requests without
/// the cookie are redirected to the login page before a handler runs.
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/inquiries", get(dashboard::inquiries))
        .route("/contacts", get(dashboard::contacts))
        .layer(axum::middleware::from_fn(dashboard_gate))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public pages
        .route("/", get(pages::home))
        .route("/product/{id}", get(pages::product))
        .route("/contact", get(pages::contact))
        // Admin pages
        .route("/admin/login", get(dashboard::login_page))
        .nest("/admin/dashboard", dashboard_routes())
        // JSON API
        .nest("/api/admin", admin_api_routes())
        .nest("/api/products", product_api_routes())
        .nest("/api/inquiries", inquiry_api_routes())
        .nest("/api/contact", contact_api_routes())
}

/// Build the application router with every layer attached.
///
/// Shared by `main` and the router tests so both exercise the same stack.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .nest_service("/static", ServeDir::new("crates/site/static"))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
