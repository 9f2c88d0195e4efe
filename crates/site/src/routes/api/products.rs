//! Product API handlers.
//!
//! Reads are public; mutations require a verified admin token.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use tracing::instrument;

use tulsi_core::ProductId;

use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, add_breadcrumb};
use crate::middleware::RequireAdmin;
use crate::models::{Product, ProductInput};
use crate::state::AppState;

/// Response for the product list.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub success: bool,
    pub products: Vec<Product>,
}

/// Response for a single product.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub success: bool,
    pub product: Product,
}

/// Response for a deletion.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
}

/// Map a missing row onto the route's 404 message.
fn product_not_found(e: RepositoryError) -> AppError {
    match e {
        RepositoryError::NotFound => AppError::NotFound("Product not found".to_string()),
        other => other.into(),
    }
}

/// List all products, newest first.
///
/// GET /api/products
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(ProductsResponse {
        success: true,
        products,
    }))
}

/// Get a single product.
///
/// GET /api/products/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let product = ProductRepository::new(state.pool())
        .get_by_id(ProductId::from(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Create a product.
///
/// POST /api/products (admin)
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(claims): RequireAdmin,
    Json(input): Json<ProductInput>,
) -> Result<impl IntoResponse, AppError> {
    let draft = input.validate()?;
    let product = ProductRepository::new(state.pool()).create(&draft).await?;

    let admin_id = claims.sub.to_string();
    let product_id = product.id.to_string();
    add_breadcrumb(
        "admin",
        "Created product",
        Some(&[("admin_id", &admin_id), ("product_id", &product_id)]),
    );

    Ok((
        StatusCode::CREATED,
        Json(ProductResponse {
            success: true,
            product,
        }),
    ))
}

/// Update a product from a partial payload.
///
/// PUT /api/products/{id} (admin)
///
/// Fields absent from the payload keep their stored values; the merged
/// result is re-validated against the same rules as create.
#[instrument(skip_all)]
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(claims): RequireAdmin,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<impl IntoResponse, AppError> {
    let repo = ProductRepository::new(state.pool());
    let id = ProductId::from(id);

    let existing = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    let draft = input.merge(&existing).validate()?;

    let product = repo.update(id, &draft).await.map_err(product_not_found)?;

    let admin_id = claims.sub.to_string();
    let product_id = product.id.to_string();
    add_breadcrumb(
        "admin",
        "Updated product",
        Some(&[("admin_id", &admin_id), ("product_id", &product_id)]),
    );

    Ok(Json(ProductResponse {
        success: true,
        product,
    }))
}

/// Delete a product.
///
/// DELETE /api/products/{id} (admin)
///
/// Inquiries referencing the product keep their name snapshot and product
/// id; nothing cascades.
#[instrument(skip_all)]
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(claims): RequireAdmin,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ProductRepository::new(state.pool())
        .delete(ProductId::from(id))
        .await
        .map_err(product_not_found)?;

    let admin_id = claims.sub.to_string();
    let product_id = id.to_string();
    add_breadcrumb(
        "admin",
        "Deleted product",
        Some(&[("admin_id", &admin_id), ("product_id", &product_id)]),
    );

    Ok(Json(DeletedResponse { success: true }))
}
