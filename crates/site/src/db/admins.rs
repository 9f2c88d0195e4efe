//! Admin repository for database operations.
//!
//! Password hashes stay inside this module's auth row type; the
//! [`Admin`] domain model never carries one.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use tulsi_core::{AdminId, Email};

use super::RepositoryError;
use crate::models::Admin;

#[derive(Debug, Clone, sqlx::FromRow)]
struct AdminRow {
    id: AdminId,
    email: Email,
    created_at: DateTime<Utc>,
}

impl From<AdminRow> for Admin {
    fn from(row: AdminRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

/// Row shape for credential verification only.
#[derive(Debug, Clone, sqlx::FromRow)]
struct AdminAuthRow {
    id: AdminId,
    email: Email,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// Repository for admin database operations.
pub struct AdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get an admin by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<Admin>, RepositoryError> {
        let row: Option<AdminRow> = sqlx::query_as(
            r"
            SELECT id, email, created_at
            FROM admins
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Admin::from))
    }

    /// Get an admin and their password hash by email, for verification.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email_with_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(Admin, String)>, RepositoryError> {
        let row: Option<AdminAuthRow> = sqlx::query_as(
            r"
            SELECT id, email, password_hash, created_at
            FROM admins
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            (
                Admin {
                    id: r.id,
                    email: r.email,
                    created_at: r.created_at,
                },
                r.password_hash,
            )
        }))
    }

    /// Create a new admin with a pre-hashed password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, password_hash), fields(email = %email))]
    pub async fn create(
        &self,
        email: &Email,
        password_hash: &str,
    ) -> Result<Admin, RepositoryError> {
        let row: AdminRow = sqlx::query_as(
            r"
            INSERT INTO admins (email, password_hash)
            VALUES ($1, $2)
            RETURNING id, email, created_at
            ",
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        debug!(admin_id = %row.id, "Created admin");
        Ok(row.into())
    }
}
