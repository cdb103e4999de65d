//! User account record.
//!
//! # Invariants
//! - `user_id` is `None` until the store assigns an identity on insert.
//! - Records are created on signup and never updated or deleted in scope.
//! - `name` carries no uniqueness constraint; two accounts may share a name.

use serde::{Deserialize, Serialize};

/// Store-assigned row identity for `users_list`.
pub type UserId = i64;

/// Account row persisted in `users_list`.
///
/// The password is stored verbatim; there is no credential hashing in this
/// slice of the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// `None` for a record that has not been inserted yet.
    pub user_id: Option<UserId>,
    pub name: String,
    pub password: String,
}

impl UserRecord {
    /// Creates an unsaved account record.
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: None,
            name: name.into(),
            password: password.into(),
        }
    }
}
