//! Contact message domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tulsi_core::{ContactId, Email};

use super::ValidationError;

const MAX_MESSAGE_LENGTH: usize = 1500;

/// A general contact message as stored (domain type).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique contact message ID.
    pub id: ContactId,
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: Email,
    /// Sender phone number.
    pub phone: String,
    /// Message subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
    /// When the message was submitted.
    pub created_at: DateTime<Utc>,
}

/// Client-supplied contact fields, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A validated contact message, ready for insertion.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactInput {
    /// Validate all fields, collecting every failure.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing every failing field.
    pub fn validate(self) -> Result<ContactDraft, ValidationError> {
        let mut errors = ValidationError::new();

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

        let subject = match self.subject.filter(|s| !s.is_empty()) {
            None => {
                errors.add("subject", "Please provide a subject");
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

        let (Some(name), Some(email), Some(phone), Some(subject), Some(message)) =
            (name, email, phone, subject, message)
        else {
            return Err(errors);
        };

        Ok(ContactDraft {
            name,
            email,
            phone,
            subject,
            message,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_input() -> ContactInput {
        ContactInput {
            name: Some("Asha Rao".to_owned()),
            email: Some("asha@example.com".to_owned()),
            phone: Some("+91 98765 43210".to_owned()),
            subject: Some("Wholesale pricing".to_owned()),
            message: Some("Do you offer wholesale rates for clinics?".to_owned()),
        }
    }

    #[test]
    fn test_validate_happy_path() {
        let draft = valid_input().validate().unwrap();
        assert_eq!(draft.subject, "Wholesale pricing");
    }

    #[test]
    fn test_validate_collects_all_missing_fields() {
        let err = ContactInput::default().validate().unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "subject", "message"]);
    }

    #[test]
    fn test_validate_requires_subject() {
        let mut input = valid_input();
        input.subject = Some(String::new());
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("Please provide a subject"));
    }

    #[test]
    fn test_validate_allows_longer_message_than_inquiry() {
        let mut input = valid_input();
        input.message = Some("x".repeat(1400));
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_long_message() {
        let mut input = valid_input();
        input.message = Some("x".repeat(1501));
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("cannot exceed 1500 characters"));
    }
}
