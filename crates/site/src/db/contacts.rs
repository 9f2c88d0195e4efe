//! Contact message repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use tulsi_core::{ContactId, Email};

use super::RepositoryError;
use crate::models::{Contact, ContactDraft};

#[derive(Debug, Clone, sqlx::FromRow)]
struct ContactRow {
    id: ContactId,
    name: String,
    email: Email,
    phone: String,
    subject: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            subject: row.subject,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

/// Repository for contact form database operations.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record a contact message from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, draft), fields(subject = %draft.subject))]
    pub async fn create(&self, draft: &ContactDraft) -> Result<Contact, RepositoryError> {
        let row: ContactRow = sqlx::query_as(
            r"
            INSERT INTO contacts (name, email, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, subject, message, created_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.subject)
        .bind(&draft.message)
        .fetch_one(self.pool)
        .await?;

        debug!(contact_id = %row.id, "Recorded contact message");
        Ok(row.into())
    }

    /// List all contact messages, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Contact>, RepositoryError> {
        let rows: Vec<ContactRow> = sqlx::query_as(
            r"
            SELECT id, name, email, phone, subject, message, created_at
            FROM contacts
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    /// Get a contact message by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ContactId) -> Result<Option<Contact>, RepositoryError> {
        let row: Option<ContactRow> = sqlx::query_as(
            r"
            SELECT id, name, email, phone, subject, message, created_at
            FROM contacts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Contact::from))
    }
}
