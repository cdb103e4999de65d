//! Explicit store handle and one-time initialization cell.
//!
//! # Responsibility
//! - Own the live SQLite connection behind a mutual-exclusion guard.
//! - Provide an explicitly constructed cell that opens the store once and
//!   hands the identical handle to every subsequent caller.
//!
//! # Invariants
//! - Exactly one store is constructed per [`StoreCell`], even when two
//!   callers race on first access.
//! - Repository writes observe the store through one connection at a time.

use super::{open_store, DbResult};
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// On-disk database file name shared with the original application.
pub const STORE_FILE_NAME: &str = "task_master_database";

/// Handle to an open, fully migrated TaskMaster database.
///
/// Callers receive a `Store` from [`open_store`] or a [`StoreCell`] and pass
/// it down explicitly; there is no hidden global instance.
#[derive(Debug)]
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Wraps an already-open connection.
    ///
    /// The bootstrap path ([`open_store`]) is the normal way to obtain a
    /// store; this constructor is for embedders that manage their own
    /// connection. It applies no pragmas and no migrations, and repositories
    /// will refuse the store until the schema is current.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Borrows the underlying connection for one transaction's worth of work.
    ///
    /// The guard serializes access; hold it only for the duration of a single
    /// repository operation.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another thread panicked mid-operation;
        // the connection itself is still usable.
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One-time initialization cell for a shared [`Store`].
///
/// Replaces the lazily constructed singleton of the original application:
/// the cell is an ordinary value the embedder owns and passes down, but the
/// contained store is still opened at most once.
pub struct StoreCell {
    cell: OnceCell<Store>,
}

impl StoreCell {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the shared store, opening the database file on first access.
    ///
    /// Every call returns a reference to the identical store. When two
    /// threads race on first access, exactly one of them opens the database;
    /// the loser blocks and then receives the winner's handle. `path` is
    /// only read by the call that opens the store; later calls return the
    /// existing handle and ignore their `path` argument entirely.
    pub fn get_or_open(&self, path: impl AsRef<Path>) -> DbResult<&Store> {
        self.cell.get_or_try_init(|| open_store(path))
    }

    /// Returns the store if it has already been opened.
    pub fn get(&self) -> Option<&Store> {
        self.cell.get()
    }
}

impl Default for StoreCell {
    fn default() -> Self {
        Self::new()
    }
}
