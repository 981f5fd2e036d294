//! User account storage.
//!
//! Credential verification itself (password hashing and comparison) lives
//! with the HTTP layer's auth module; this service only stores accounts and
//! their opaque password hashes.

use chrono::Utc;
use storefront_core::{CoreError, DbId};

use crate::models::user::User;
use crate::table::Table;

/// Provides account storage over the in-memory user table.
pub struct UsersService {
    table: Table<User>,
}

impl UsersService {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// Create a user with an already-hashed password.
    pub fn create(&self, email: &str, password_hash: String) -> Result<User, CoreError> {
        if self.find_by_email(email).is_some() {
            return Err(CoreError::Domain(format!(
                "User {email} already exists"
            )));
        }
        let user = self.table.insert_with(|id| User {
            id,
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        });
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.table.find(|user| user.email == email)
    }

    /// Find a user by id.
    pub fn get_or_fail(&self, id: DbId) -> Result<User, CoreError> {
        self.table.get(id).ok_or(CoreError::NotFound {
            entity: "User",
            id,
        })
    }
}

impl Default for UsersService {
    fn default() -> Self {
        Self::new()
    }
}
