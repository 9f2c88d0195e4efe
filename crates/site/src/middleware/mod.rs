//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Dashboard gate (cookie presence check on dashboard pages only)

pub mod auth;

pub use auth::{
    ADMIN_TOKEN_COOKIE, RequireAdmin, dashboard_gate, expired_session_cookie, session_cookie,
};
