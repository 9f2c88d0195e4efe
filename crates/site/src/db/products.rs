//! Product repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, instrument};

use tulsi_core::{Price, ProductId};

use super::RepositoryError;
use crate::models::{Product, ProductDraft};

/// Raw row shape. Price and category are stored loosely typed and
/// validated on the way out, so a bad row becomes a
/// [`RepositoryError::DataCorruption`] instead of a decode panic.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    image: String,
    category: String,
    benefits: Vec<String>,
    ingredients: Vec<String>,
    dosage: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse()
            .map_err(|e| RepositoryError::DataCorruption(format!("product {}: {e}", row.id)))?;
        let price = Price::new(row.price)
            .map_err(|e| RepositoryError::DataCorruption(format!("product {}: {e}", row.id)))?;

        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
            image: row.image,
            category,
            benefits: row.benefits,
            ingredients: row.ingredients,
            dosage: row.dosage,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored row fails validation.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, description, price, image, category,
                   benefits, ingredients, dosage, created_at, updated_at
            FROM products
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if the stored row fails validation.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r"
            SELECT id, name, description, price, image, category,
                   benefits, ingredients, dosage, created_at, updated_at
            FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Create a product from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, RepositoryError> {
        let row: ProductRow = sqlx::query_as(
            r"
            INSERT INTO products (name, description, price, image, category,
                                  benefits, ingredients, dosage)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, description, price, image, category,
                      benefits, ingredients, dosage, created_at, updated_at
            ",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(&draft.image)
        .bind(draft.category)
        .bind(&draft.benefits)
        .bind(&draft.ingredients)
        .bind(&draft.dosage)
        .fetch_one(self.pool)
        .await?;

        debug!(product_id = %row.id, "Created product");
        row.try_into()
    }

    /// Replace a product's fields from a validated draft.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has that id.
    /// Returns `RepositoryError::Database` if the update fails.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, RepositoryError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r"
            UPDATE products
            SET name = $2, description = $3, price = $4, image = $5,
                category = $6, benefits = $7, ingredients = $8, dosage = $9,
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, price, image, category,
                      benefits, ingredients, dosage, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(draft.price)
        .bind(&draft.image)
        .bind(draft.category)
        .bind(&draft.benefits)
        .bind(&draft.ingredients)
        .bind(&draft.dosage)
        .fetch_optional(self.pool)
        .await?;

        let row = row.ok_or(RepositoryError::NotFound)?;
        debug!(product_id = %row.id, "Updated product");
        row.try_into()
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has that id.
    /// Returns `RepositoryError::Database` if the delete fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM products
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(product_id = %id, "Deleted product");
        Ok(())
    }
}
