//! Product inquiry domain types.
//!
//! An inquiry records a customer's interest in a specific product. The
//! product reference is a point-in-time snapshot: `product_id` is not a
//! foreign key and `product_name` is denormalized, so inquiries survive
//! product deletion unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tulsi_core::{Email, InquiryId, ProductId};

use super::ValidationError;

const MAX_MESSAGE_LENGTH: usize = 1000;

/// A product inquiry as stored (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    /// Unique inquiry ID.
    pub id: InquiryId,
    /// Product the inquiry was sent about (snapshot, may be dangling).
    pub product_id: ProductId,
    /// Product name at the time of the inquiry.
    pub product_name: String,
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: Email,
    /// Customer phone number.
    pub phone: String,
    /// Inquiry message.
    pub message: String,
    /// When the inquiry was submitted.
    pub created_at: DateTime<Utc>,
}

/// Client-supplied inquiry fields, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InquiryInput {
    pub product_id: Option<i32>,
    pub product_name: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A validated inquiry, ready for insertion.
#[derive(Debug, Clone)]
pub struct InquiryDraft {
    pub product_id: ProductId,
    pub product_name: String,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub message: String,
}

impl InquiryInput {
    /// Validate all fields, collecting every failure.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every failing field.
    pub fn validate(self) -> Result<InquiryDraft, ValidationError> {
        let mut errors = ValidationError::new();

        let product_id = match self.product_id {
            None => {
                errors.add("productId", "Please provide a product id");
                None
            }
            Some(id) => Some(ProductId::new(id)),
        };

        let name = match self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            None => {
                errors.add("name", "Please provide your name");
                None
            }
            Some(s) => Some(s.to_owned()),
        };

        let email = match self.email.as_deref().filter(|s| !s.is_empty()) {
            None => {
                errors.add("email", "Please provide your email");
                None
            }
            Some(s) => match Email::parse(s) {
                Ok(email) => Some(email),
                Err(_) => {
                    errors.add("email", "Please provide a valid email");
                    None
                }
            },
        };

        let phone = match self.phone.filter(|s| !s.is_empty()) {
            None => {
                errors.add("phone", "Please provide your phone number");
                None
            }
            Some(s) => Some(s),
        };

        let message = match self.message.filter(|s| !s.is_empty()) {
            None => {
                errors.add("message", "Please provide a message");
                None
            }
            Some(s) if s.len() > MAX_MESSAGE_LENGTH => {
                errors.add(
                    "message",
                    format!("Message cannot exceed {MAX_MESSAGE_LENGTH} characters"),
                );
                None
            }
            Some(s) => Some(s),
        };

        let (Some(product_id), Some(name), Some(email), Some(phone), Some(message)) =
            (product_id, name, email, phone, message)
        else {
            return Err(errors);
        };

        Ok(InquiryDraft {
            product_id,
            product_name: self.product_name.unwrap_or_default(),
            name,
            email,
            phone,
            message,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_input() -> InquiryInput {
        InquiryInput {
            product_id: Some(3),
            product_name: Some("Tulsi Immunity Blend".to_owned()),
            name: Some("Asha Rao".to_owned()),
            email: Some("asha@example.com".to_owned()),
            phone: Some("+91 98765 43210".to_owned()),
            message: Some("Is this suitable for daily use?".to_owned()),
        }
    }

    #[test]
    fn test_validate_happy_path() {
        let draft = valid_input().validate().unwrap();
        assert_eq!(draft.product_id, ProductId::new(3));
        assert_eq!(draft.email.as_str(), "asha@example.com");
    }

    #[test]
    fn test_validate_collects_all_missing_fields() {
        let err = InquiryInput::default().validate().unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["productId", "name", "email", "phone", "message"]
        );
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let mut input = valid_input();
        input.email = Some("not-an-email".to_owned());
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("Please provide a valid email"));
    }

    #[test]
    fn test_validate_rejects_long_message() {
        let mut input = valid_input();
        input.message = Some("x".repeat(1001));
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("cannot exceed 1000 characters"));
    }

    #[test]
    fn test_missing_product_name_defaults_to_empty() {
        let mut input = valid_input();
        input.product_name = None;
        let draft = input.validate().unwrap();
        assert_eq!(draft.product_name, "");
    }
}
