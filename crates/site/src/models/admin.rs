//! Admin user domain types.

use chrono::{DateTime, Utc};

use tulsi_core::{AdminId, Email};

/// An admin user (domain type).
///
/// Does not carry the password hash; repositories return the hash
/// separately when verification needs it.
#[derive(Debug, Clone)]
pub struct Admin {
    /// Unique admin ID.
    pub id: AdminId,
    /// Admin's email address.
    pub email: Email,
    /// When the admin was created.
    pub created_at: DateTime<Utc>,
}
