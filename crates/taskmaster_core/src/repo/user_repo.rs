//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist account records created on signup.
//!
//! # Invariants
//! - Inserts use replace-on-conflict by primary key: re-inserting an
//!   existing `user_id` overwrites that row instead of failing.
//! - No read, update, or delete operations exist in this slice.

use crate::db::Store;
use crate::model::user::{UserId, UserRecord};
use crate::repo::{verify_store_schema, RepoResult};
use rusqlite::params;

/// Repository interface for account persistence.
pub trait UserRepository {
    /// Inserts the record, replacing any row with the same identity.
    ///
    /// A record without an id receives a fresh store-assigned one, which is
    /// returned either way.
    fn insert_user(&self, user: &UserRecord) -> RepoResult<UserId>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'store> {
    store: &'store Store,
}

impl<'store> SqliteUserRepository<'store> {
    /// Creates a repository after verifying the store schema is current.
    pub fn try_new(store: &'store Store) -> RepoResult<Self> {
        verify_store_schema(store, "users_list")?;
        Ok(Self { store })
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn insert_user(&self, user: &UserRecord) -> RepoResult<UserId> {
        let conn = self.store.conn();

        match user.user_id {
            Some(id) => {
                conn.execute(
                    "INSERT OR REPLACE INTO users_list (user_id, name, password)
                     VALUES (?1, ?2, ?3);",
                    params![id, user.name.as_str(), user.password.as_str()],
                )?;
                Ok(id)
            }
            None => {
                conn.execute(
                    "INSERT INTO users_list (name, password) VALUES (?1, ?2);",
                    params![user.name.as_str(), user.password.as_str()],
                )?;
                Ok(conn.last_insert_rowid())
            }
        }
    }
}
