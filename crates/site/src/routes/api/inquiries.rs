//! Product inquiry API handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::instrument;

use crate::db::InquiryRepository;
use crate::error::AppError;
use crate::models::{Inquiry, InquiryInput};
use crate::state::AppState;

/// Response for the inquiry list.
#[derive(Debug, Serialize)]
pub struct InquiriesResponse {
    pub success: bool,
    pub inquiries: Vec<Inquiry>,
}

/// Response for a submitted inquiry.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub success: bool,
    pub inquiry: Inquiry,
}

/// List all inquiries, newest first.
///
/// GET /api/inquiries
///
/// Only read by the dashboard, which sits behind the session gate; the
/// endpoint itself carries no auth check.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let inquiries = InquiryRepository::new(state.pool()).list().await?;
    Ok(Json(InquiriesResponse {
        success: true,
        inquiries,
    }))
}

/// Submit a product inquiry.
///
/// POST /api/inquiries
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<InquiryInput>,
) -> Result<impl IntoResponse, AppError> {
    let draft = input.validate()?;
    let inquiry = InquiryRepository::new(state.pool()).create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(InquiryResponse {
            success: true,
            inquiry,
        }),
    ))
}
