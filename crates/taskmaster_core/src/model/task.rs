//! Persisted task record.
//!
//! # Invariants
//! - `task_id` is `None` until the store assigns an identity on insert.
//! - `timestamp` is creation time in epoch milliseconds and never changes.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Store-assigned row identity for `tasks_list`.
pub type TaskId = i64;

/// Task row persisted in `tasks_list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// `None` for a record that has not been inserted yet.
    pub task_id: Option<TaskId>,
    pub title: String,
    pub description: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

impl TaskRecord {
    /// Creates an unsaved task record stamped with the current time.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            task_id: None,
            title: title.into(),
            description: description.into(),
            timestamp: now_epoch_ms(),
        }
    }
}

pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

#[cfg(test)]
mod tests {
    use super::{now_epoch_ms, TaskRecord};

    #[test]
    fn new_record_has_no_identity_and_a_current_timestamp() {
        let record = TaskRecord::new("title", "body");
        assert!(record.task_id.is_none());
        assert!(record.timestamp > 0);
    }

    #[test]
    fn now_epoch_ms_is_monotonic_enough() {
        let first = now_epoch_ms();
        let second = now_epoch_ms();
        assert!(second >= first);
    }
}
