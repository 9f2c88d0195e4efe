//! Signed admin session tokens.
//!
//! Tokens are self-contained: a versioned base64 payload of [`TokenClaims`]
//! followed by an HMAC-SHA256 signature over the version and payload, in the
//! form `v1.<payload>.<signature>`. Verification checks the signature before
//! it parses anything the client controls, then checks expiry.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use tulsi_core::AdminId;

/// Token format version prefix.
const TOKEN_VERSION: &str = "v1";

/// Tokens expire after seven days, matching the session cookie lifetime.
pub const TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Errors that can occur when issuing or verifying a session token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token structure or payload could not be parsed.
    #[error("malformed token")]
    Malformed,

    /// Signature did not match or could not be computed.
    #[error("token signature invalid")]
    BadSignature,

    /// Token expiry is in the past.
    #[error("token expired")]
    Expired,
}

/// Claims carried inside a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Admin the token was issued to.
    pub sub: AdminId,
    /// Issued-at time, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry time, seconds since the Unix epoch.
    pub exp: i64,
}

/// Issues and verifies signed session tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: SecretString,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl TokenService {
    /// Create a new token service from the configured signing secret.
    #[must_use]
    pub const fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Issue a token for an admin, valid for [`TOKEN_TTL_SECONDS`].
    ///
    /// # Errors
    ///
    /// Returns `TokenError::BadSignature` if the signature cannot be computed.
    pub fn issue(&self, admin_id: AdminId) -> Result<String, TokenError> {
        let iat = Utc::now().timestamp();
        let claims = TokenClaims {
            sub: admin_id,
            iat,
            exp: iat + TOKEN_TTL_SECONDS,
        };
        self.sign(&claims)
    }

    /// Verify a token and return its claims.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Malformed` if the token does not have the
    /// expected structure, `TokenError::BadSignature` if the signature does
    /// not match, and `TokenError::Expired` if the expiry has passed.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let parts: Vec<&str> = token.split('.').collect();
        let [version, payload_b64, sig_b64] = parts.as_slice() else {
            return Err(TokenError::Malformed);
        };
        if *version != TOKEN_VERSION {
            return Err(TokenError::Malformed);
        }

        let signing_input = format!("{version}.{payload_b64}");
        let expected = self.signature(signing_input.as_bytes())?;
        if !constant_time_compare(&expected, sig_b64) {
            return Err(TokenError::BadSignature);
        }

        // Signature is valid; the payload is now trusted
        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| TokenError::Malformed)?;
        let claims: TokenClaims =
            serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;

        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        let payload = serde_json::to_vec(claims).map_err(|_| TokenError::Malformed)?;
        let signing_input = format!("{TOKEN_VERSION}.{}", URL_SAFE_NO_PAD.encode(payload));
        let signature = self.signature(signing_input.as_bytes())?;
        Ok(format!("{signing_input}.{signature}"))
    }

    fn signature(&self, input: &[u8]) -> Result<String, TokenError> {
        // HMAC-SHA256 accepts keys of any length
        let mut mac = Hmac::<Sha256>::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|_| TokenError::BadSignature)?;
        mac.update(input);
        Ok(URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
