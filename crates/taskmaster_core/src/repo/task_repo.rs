//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist and remove task rows in `tasks_list`.
//!
//! # Invariants
//! - Inserts use replace-on-conflict by primary key.
//! - Deletes match by identity and are silent no-ops for absent rows.
//!
//! The contract is deliberately write-only: no query operation exists, so
//! callers cannot read persisted tasks back out. The to-do view keeps its
//! own in-memory list (`model::task_list`) instead of loading from here.

use crate::db::Store;
use crate::model::task::{TaskId, TaskRecord};
use crate::repo::{verify_store_schema, RepoError, RepoResult};
use rusqlite::params;

/// Repository interface for task persistence. Write-only by contract.
pub trait TaskRepository {
    /// Inserts the record, replacing any row with the same identity.
    ///
    /// A record without an id receives a fresh store-assigned one, which is
    /// returned either way.
    fn insert_task(&self, task: &TaskRecord) -> RepoResult<TaskId>;

    /// Removes the row whose identity matches the record's id.
    ///
    /// Deleting an id that is not present succeeds without effect. A record
    /// that was never inserted (no id) is rejected as invalid.
    fn delete_task(&self, task: &TaskRecord) -> RepoResult<()>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'store> {
    store: &'store Store,
}

impl<'store> SqliteTaskRepository<'store> {
    /// Creates a repository after verifying the store schema is current.
    pub fn try_new(store: &'store Store) -> RepoResult<Self> {
        verify_store_schema(store, "tasks_list")?;
        Ok(Self { store })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, task: &TaskRecord) -> RepoResult<TaskId> {
        let conn = self.store.conn();

        match task.task_id {
            Some(id) => {
                conn.execute(
                    "INSERT OR REPLACE INTO tasks_list (task_id, title, description, timestamp)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        id,
                        task.title.as_str(),
                        task.description.as_str(),
                        task.timestamp
                    ],
                )?;
                Ok(id)
            }
            None => {
                conn.execute(
                    "INSERT INTO tasks_list (title, description, timestamp)
                     VALUES (?1, ?2, ?3);",
                    params![
                        task.title.as_str(),
                        task.description.as_str(),
                        task.timestamp
                    ],
                )?;
                Ok(conn.last_insert_rowid())
            }
        }
    }

    fn delete_task(&self, task: &TaskRecord) -> RepoResult<()> {
        let Some(id) = task.task_id else {
            return Err(RepoError::InvalidRecord(
                "cannot delete a task record that was never inserted".to_string(),
            ));
        };

        self.store
            .conn()
            .execute("DELETE FROM tasks_list WHERE task_id = ?1;", params![id])?;
        Ok(())
    }
}
