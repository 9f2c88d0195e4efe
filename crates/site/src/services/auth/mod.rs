//! Admin authentication service.
//!
//! Passwords are hashed with Argon2id. A successful login issues a signed
//! session token for the admin cookie. Login failures collapse into a single
//! [`AuthError::InvalidCredentials`] so responses never reveal whether the
//! email or the password was wrong.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use sqlx::PgPool;
use tracing::{debug, instrument, warn};

use tulsi_core::Email;

use crate::db::RepositoryError;
use crate::db::admins::AdminRepository;
use crate::models::Admin;
use crate::services::token::TokenService;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Admin authentication service.
pub struct AuthService<'a> {
    admins: AdminRepository<'a>,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, tokens: &'a TokenService) -> Self {
        Self {
            admins: AdminRepository::new(pool),
            tokens,
        }
    }

    /// Register a new admin account.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email fails validation.
    /// Returns `AuthError::WeakPassword` if the password is too short.
    /// Returns `AuthError::EmailTaken` if the email is already registered.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> Result<Admin, AuthError> {
        let email = Email::parse(email)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;
        let admin = self
            .admins
            .create(&email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::EmailTaken,
                other => AuthError::Database(other),
            })?;

        debug!(admin_id = %admin.id, "Registered admin");
        Ok(admin)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or the
    /// password does not match.
    #[instrument(skip(self, email, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<(Admin, String), AuthError> {
        // A malformed email matches no account; same failure as a wrong
        // password
        let Ok(email) = Email::parse(email) else {
            return Err(AuthError::InvalidCredentials);
        };

        let Some((admin, password_hash)) = self.admins.get_by_email_with_hash(&email).await?
        else {
            warn!("Login attempt for unknown email");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &password_hash) {
            warn!(admin_id = %admin.id, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(admin.id)?;
        debug!(admin_id = %admin.id, "Admin logged in");
        Ok((admin, token))
    }
}

/// Check password strength requirements.
///
/// # Errors
///
/// Returns `AuthError::WeakPassword` if the password is too short.
pub fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password should be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Hash a password with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns `AuthError::Hashing` if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::Hashing)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash.
///
/// An unparseable hash verifies as false rather than erroring; the stored
/// value is as much a part of the credential check as the password.
fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_password() {
        let password = "correct horse battery staple";
        let hash = hash_password(password).unwrap();

        assert_ne!(hash, password);
        assert!(verify_password(password, &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hash_a = hash_password("same password").unwrap();
        let hash_b = hash_password("same password").unwrap();
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_validate_password_too_short() {
        let Err(AuthError::WeakPassword(message)) = validate_password("12345") else {
            panic!("expected WeakPassword");
        };
        assert_eq!(message, "Password should be at least 6 characters");
    }

    #[test]
    fn test_validate_password_accepts_minimum_length() {
        assert!(validate_password("123456").is_ok());
    }
}
