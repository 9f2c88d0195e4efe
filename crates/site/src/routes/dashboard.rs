//! Admin dashboard page handlers.
//!
//! Every page under `/admin/dashboard` sits behind the cookie presence
//! gate. The pages are read-only views; mutations go through the API,
//! where the token is actually verified.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::db::{ContactRepository, InquiryRepository, ProductRepository};
use crate::error::AppError;
use crate::filters;
use crate::models::{Contact, Inquiry};
use crate::routes::pages::ProductView;
use crate::state::AppState;

/// Inquiry display data for templates.
pub struct InquiryView {
    pub product_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub received: String,
}

impl From<Inquiry> for InquiryView {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            product_name: inquiry.product_name,
            name: inquiry.name,
            email: inquiry.email.into_inner(),
            phone: inquiry.phone,
            message: inquiry.message,
            received: inquiry.created_at.format("%b %d, %Y %H:%M").to_string(),
        }
    }
}

/// Contact message display data for templates.
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub received: String,
}

impl From<Contact> for ContactView {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name,
            email: contact.email.into_inner(),
            phone: contact.phone,
            subject: contact.subject,
            message: contact.message,
            received: contact.created_at.format("%b %d, %Y %H:%M").to_string(),
        }
    }
}

/// Admin login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate;

/// Dashboard home template: product management plus message counts.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub products: Vec<ProductView>,
    pub inquiry_count: usize,
    pub contact_count: usize,
}

/// Inquiry list template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/inquiries.html")]
pub struct InquiriesTemplate {
    pub inquiries: Vec<InquiryView>,
}

/// Contact message list template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/contacts.html")]
pub struct ContactsTemplate {
    pub contacts: Vec<ContactView>,
}

/// Display the admin login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}

/// Display the dashboard home with the product list.
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = ProductRepository::new(state.pool()).list().await?;
    let inquiries = InquiryRepository::new(state.pool()).list().await?;
    let contacts = ContactRepository::new(state.pool()).list().await?;

    Ok(DashboardTemplate {
        products: products.into_iter().map(ProductView::from).collect(),
        inquiry_count: inquiries.len(),
        contact_count: contacts.len(),
    })
}

/// Display the inquiry list.
pub async fn inquiries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let inquiries = InquiryRepository::new(state.pool()).list().await?;

    Ok(InquiriesTemplate {
        inquiries: inquiries.into_iter().map(InquiryView::from).collect(),
    })
}

/// Display the contact message list.
pub async fn contacts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let contacts = ContactRepository::new(state.pool()).list().await?;

    Ok(ContactsTemplate {
        contacts: contacts.into_iter().map(ContactView::from).collect(),
    })
}
