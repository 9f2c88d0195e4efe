//! Authentication error types.

use thiserror::Error;

use tulsi_core::EmailError;

use crate::db::RepositoryError;
use crate::services::token::TokenError;

/// Errors that can occur during admin authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email or password did not match an account.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists.
    #[error("email already registered")]
    EmailTaken,

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password does not meet strength requirements.
    #[error("{0}")]
    WeakPassword(String),

    /// Session token was missing, malformed, or expired.
    #[error("invalid session token: {0}")]
    InvalidToken(#[from] TokenError),

    /// Password hashing failed.
    #[error("password hashing failed")]
    Hashing,

    /// Repository/database error.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),
}
