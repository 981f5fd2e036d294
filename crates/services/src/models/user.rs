//! User account model.

use storefront_core::{DbId, Timestamp};

/// A user account.
///
/// The password hash is a PHC-formatted Argon2id string. The struct
/// deliberately does not derive `Serialize` so the hash can never reach the
/// wire; handlers expose their own public user shapes.
#[derive(Debug, Clone)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}
