//! Domain models for the site.
//!
//! Each entity comes in up to three shapes:
//!
//! - an input type (`ProductInput`, ...) deserialized from client JSON, where
//!   every field is optional so that validation - not deserialization - gets
//!   to report what is missing
//! - a draft type (`ProductDraft`, ...) produced by `validate()`, carrying
//!   only well-formed values and ready for insertion
//! - the domain type (`Product`, ...) as stored, with its server-assigned ID
//!   and timestamps
//!
//! Validation collects every failing field before returning, so a client
//! fixing a form sees all problems at once rather than one per round trip.

use std::fmt;

pub mod admin;
pub mod contact;
pub mod inquiry;
pub mod product;

pub use admin::Admin;
pub use contact::{Contact, ContactDraft, ContactInput};
pub use inquiry::{Inquiry, InquiryDraft, InquiryInput};
pub use product::{Product, ProductDraft, ProductInput};

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// JSON field name as the client sent it (e.g., `productId`).
    pub field: &'static str,
    /// Human-readable description of the failed rule.
    pub message: String,
}

/// One or more failed validation rules, collected across all fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    /// Every failing field, in declaration order.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a failed rule for a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// True if no rules failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert the collector into a result: `Ok` when nothing failed.
    ///
    /// # Errors
    ///
    /// Returns `self` if any rule failed.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{joined}")
    }
}

impl std::error::Error for ValidationError {}
