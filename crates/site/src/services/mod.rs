//! Business logic services for the site.
//!
//! # Services
//!
//! - `auth` - Password authentication for admin accounts
//! - `token` - Signed session tokens carried in the admin cookie

pub mod auth;
pub mod token;

pub use auth::{AuthError, AuthService};
pub use token::{TokenClaims, TokenError, TokenService};
