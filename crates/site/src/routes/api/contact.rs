//! Contact form API handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::instrument;

use crate::db::ContactRepository;
use crate::error::AppError;
use crate::models::{Contact, ContactInput};
use crate::state::AppState;

/// Response for the contact message list.
#[derive(Debug, Serialize)]
pub struct ContactsResponse {
    pub success: bool,
    pub contacts: Vec<Contact>,
}

/// Response for a submitted contact message.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub contact: Contact,
}

/// List all contact messages, newest first.
///
/// GET /api/contact
///
/// Only read by the dashboard, which sits behind the session gate; the
/// endpoint itself carries no auth check.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let contacts = ContactRepository::new(state.pool()).list().await?;
    Ok(Json(ContactsResponse {
        success: true,
        contacts,
    }))
}

/// Submit a contact message.
///
/// POST /api/contact
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<impl IntoResponse, AppError> {
    let draft = input.validate()?;
    let contact = ContactRepository::new(state.pool()).create(&draft).await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            success: true,
            contact,
        }),
    ))
}
