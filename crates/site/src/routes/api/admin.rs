//! Admin authentication API handlers.
//!
//! Login hands the signed token back in the response body and also sets it
//! as the httpOnly session cookie; the dashboard uses the cookie, API
//! clients may use either.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, add_breadcrumb, clear_sentry_user, set_sentry_user};
use crate::middleware::{expired_session_cookie, session_cookie};
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Credentials payload for login and register.
#[derive(Debug, Deserialize)]
pub struct CredentialsInput {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response for registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
}

/// Response for login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: String,
}

/// Response for logout.
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Reject requests with a missing or empty email or password.
fn require_credentials(input: &CredentialsInput) -> Result<(&str, &str), AppError> {
    let email = input.email.as_deref().filter(|s| !s.is_empty());
    let password = input.password.as_deref().filter(|s| !s.is_empty());

    let (Some(email), Some(password)) = (email, password) else {
        return Err(AppError::BadRequest(
            "Please provide email and password".to_string(),
        ));
    };
    Ok((email, password))
}

/// Register a new admin account.
///
/// POST /api/admin/register
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsInput>,
) -> Result<impl IntoResponse, AppError> {
    let (email, password) = require_credentials(&input)?;

    let auth = AuthService::new(state.pool(), state.tokens());
    let admin = auth.register(email, password).await?;

    let admin_id = admin.id.to_string();
    add_breadcrumb("auth", "Admin registered", Some(&[("admin_id", &admin_id)]));

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "Admin registered successfully".to_string(),
        }),
    ))
}

/// Verify credentials, set the session cookie, and return the token.
///
/// POST /api/admin/login
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<CredentialsInput>,
) -> Result<impl IntoResponse, AppError> {
    let (email, password) = require_credentials(&input)?;

    let auth = AuthService::new(state.pool(), state.tokens());
    let (admin, token) = auth.login(email, password).await?;

    set_sentry_user(&admin.id, Some(admin.email.as_str()));
    add_breadcrumb("auth", "Admin logged in", None);

    let jar = jar.add(session_cookie(
        token.clone(),
        state.config().secure_cookies(),
    ));
    Ok((jar, Json(LoginResponse { success: true, token })))
}


/// Clear the session cookie.
///
/// POST /api/admin/logout
///
/// Already-issued tokens stay valid until expiry; there is no server-side
/// revocation list.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    clear_sentry_user();

    let jar = jar.add(expired_session_cookie(state.config().secure_cookies()));
    (jar, Json(LogoutResponse { success: true }))
}
