//! Authentication middleware and extractors.
//!
//! Admin protection is two-layered. [`dashboard_gate`] is a cheap cookie
//! presence check that keeps dashboard page shells away from anonymous
//! visitors. [`RequireAdmin`] does the real work: it verifies the token
//! signature and expiry before a protected operation runs.

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;
use tracing::debug;

use crate::error::AppError;
use crate::services::token::{TOKEN_TTL_SECONDS, TokenClaims};
use crate::state::AppState;

/// Name of the session cookie holding the signed admin token.
pub const ADMIN_TOKEN_COOKIE: &str = "adminToken";

/// Extractor that requires a verified admin token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(claims): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, admin {}!", claims.sub)
/// }
/// ```
pub struct RequireAdmin(pub TokenClaims);

/// Error returned when admin authentication fails.
pub enum AdminRejection {
    /// Redirect to the login page (for page requests).
    RedirectToLogin,
    /// JSON 401 envelope (for API requests).
    Unauthorized,
}

impl IntoResponse for AdminRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin/login").into_response(),
            Self::Unauthorized => {
                AppError::Unauthorized("Not authorized".to_string()).into_response()
            }
        }
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AdminRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let is_api = parts.uri.path().starts_with("/api/");
        let reject = || {
            if is_api {
                AdminRejection::Unauthorized
            } else {
                AdminRejection::RedirectToLogin
            }
        };

        let jar = CookieJar::from_headers(&parts.headers);
        let Some(cookie) = jar.get(ADMIN_TOKEN_COOKIE) else {
            return Err(reject());
        };

        match state.tokens().verify(cookie.value()) {
            Ok(claims) => Ok(Self(claims)),
            Err(e) => {
                debug!(error = %e, "Rejected admin token");
                Err(reject())
            }
        }
    }
}

/// Edge gate for dashboard pages.
///
/// Only checks that the session cookie exists; an expired or forged token
/// still passes here and fails later at [`RequireAdmin`] when a protected
/// operation is attempted.
pub async fn dashboard_gate(jar: CookieJar, request: Request, next: Next) -> Response {
    if jar.get(ADMIN_TOKEN_COOKIE).is_none() {
        return Redirect::to("/admin/login").into_response();
    }
    next.run(request).await
}

/// Build the session cookie carrying a freshly issued token.
#[must_use]
pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((ADMIN_TOKEN_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::seconds(TOKEN_TTL_SECONDS))
        .build()
}

/// Build an immediately expiring cookie that clears the session.
#[must_use]
pub fn expired_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((ADMIN_TOKEN_COOKIE, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}
