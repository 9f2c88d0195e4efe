//! Public page route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use tulsi_core::ProductId;

use crate::db::ProductRepository;
use crate::error::AppError;
use crate::filters;
use crate::models::Product;
use crate::state::AppState;

/// Product display data for templates.
///
/// `price` is the bare amount ("499.00"); display markup adds the currency
/// sign through the `inr` filter, and the dashboard edit form reuses the
/// bare value as-is.
#[derive(Clone)]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
    pub benefits: Vec<String>,
    pub ingredients: Vec<String>,
    pub dosage: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name,
            description: product.description,
            price: product.price.to_string(),
            image: product.image,
            category: product.category.as_str().to_string(),
            benefits: product.benefits,
            ingredients: product.ingredients,
            dosage: product.dosage,
        }
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductView>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub product: ProductView,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate;

/// Missing product page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate;

/// Display the home page with the product grid.
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(HomeTemplate {
        products: products.into_iter().map(ProductView::from).collect(),
    })
}

/// Display a product detail page with its inquiry form.
pub async fn product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let product = ProductRepository::new(state.pool())
        .get_by_id(ProductId::from(id))
        .await?;

    let Some(product) = product else {
        return Ok((StatusCode::NOT_FOUND, NotFoundTemplate).into_response());
    };

    Ok(ProductTemplate {
        product: product.into(),
    }
    .into_response())
}

/// Display the contact page.
pub async fn contact() -> impl IntoResponse {
    ContactTemplate
}
