//! Inquiry repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};

use tulsi_core::{Email, InquiryId, ProductId};

use super::RepositoryError;
use crate::models::{Inquiry, InquiryDraft};

#[derive(Debug, Clone, sqlx::FromRow)]
struct InquiryRow {
    id: InquiryId,
    product_id: ProductId,
    product_name: String,
    name: String,
    email: Email,
    phone: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<InquiryRow> for Inquiry {
    fn from(row: InquiryRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            product_name: row.product_name,
            name: row.name,
            email: row.email,
            phone: row.phone,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

/// Repository for product inquiry database operations.
pub struct InquiryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> InquiryRepository<'a> {
    /// Create a new inquiry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Record an inquiry from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, draft), fields(product_id = %draft.product_id))]
    pub async fn create(&self, draft: &InquiryDraft) -> Result<Inquiry, RepositoryError> {
        let row: InquiryRow = sqlx::query_as(
            r"
            INSERT INTO inquiries (product_id, product_name, name, email, phone, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, product_id, product_name, name, email, phone, message, created_at
            ",
        )
        .bind(draft.product_id)
        .bind(&draft.product_name)
        .bind(&draft.name)
        .bind(&draft.email)
        .bind(&draft.phone)
        .bind(&draft.message)
        .fetch_one(self.pool)
        .await?;

        debug!(inquiry_id = %row.id, "Recorded inquiry");
        Ok(row.into())
    }

    /// List all inquiries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Inquiry>, RepositoryError> {
        let rows: Vec<InquiryRow> = sqlx::query_as(
            r"
            SELECT id, product_id, product_name, name, email, phone, message, created_at
            FROM inquiries
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Inquiry::from).collect())
    }

    /// Get an inquiry by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: InquiryId) -> Result<Option<Inquiry>, RepositoryError> {
        let row: Option<InquiryRow> = sqlx::query_as(
            r"
            SELECT id, product_id, product_name, name, email, phone, message, created_at
            FROM inquiries
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Inquiry::from))
    }
}
