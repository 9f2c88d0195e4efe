//! Admin account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create the initial admin account
//! ADMIN_EMAIL=admin@example.com ADMIN_PASSWORD='...' tulsi admin init
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//! - `ADMIN_EMAIL` - Email for the account (unless passed with `--email`)
//! - `ADMIN_PASSWORD` - Password for the account; read only from the
//!   environment so it stays out of shell history
//!
//! The command is idempotent: if an account with the email already exists it
//! reports so and exits successfully without touching the stored credentials.

use sqlx::PgPool;
use thiserror::Error;

use tulsi_core::{Email, EmailError};
use tulsi_site::db::{AdminRepository, RepositoryError};
use tulsi_site::services::auth::{self, AuthError};

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository query error.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Password validation or hashing error.
    #[error("{0}")]
    Auth(#[from] AuthError),
}

/// Create the initial admin account.
///
/// # Arguments
///
/// * `email_arg` - Email from the command line, overriding `ADMIN_EMAIL`
///
/// # Errors
///
/// Returns an error if required environment variables are missing, the email
/// or password fails validation, or database operations fail.
pub async fn init(email_arg: Option<&str>) -> Result<(), AdminError> {
    dotenvy::dotenv().ok();

    let email = match email_arg {
        Some(e) => e.to_owned(),
        None => {
            std::env::var("ADMIN_EMAIL").map_err(|_| AdminError::MissingEnvVar("ADMIN_EMAIL"))?
        }
    };
    let email = Email::parse(&email)?;

    let password = std::env::var("ADMIN_PASSWORD")
        .map_err(|_| AdminError::MissingEnvVar("ADMIN_PASSWORD"))?;
    auth::validate_password(&password)?;

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| AdminError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    let admins = AdminRepository::new(&pool);

    if admins.get_by_email(&email).await?.is_some() {
        tracing::info!("Admin account already exists: {}", email);
        return Ok(());
    }

    let password_hash = auth::hash_password(&password)?;
    let admin = admins.create(&email, &password_hash).await?;

    tracing::info!(
        "Admin account created successfully! ID: {}, Email: {}",
        admin.id,
        admin.email
    );
    Ok(())
}
