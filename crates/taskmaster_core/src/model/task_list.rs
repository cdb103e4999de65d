//! In-memory task list state machine for the to-do view.
//!
//! # Responsibility
//! - Hold the UI-local list of tasks and apply create/toggle/delete edits.
//! - Derive the completion-progress metric shown in the list header.
//!
//! # Invariants
//! - Task ids are unique within the list at all times.
//! - The list is never persisted; it lives and dies with the session.
//! - Newest tasks appear first; no other ordering guarantee is made.

use crate::model::task::now_epoch_ms;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Urgency level attached to every in-memory task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    /// Human-readable label used by list views.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// One entry of the UI-local to-do list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque id, unique within the containing list.
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_completed: bool,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    pub priority: TaskPriority,
}

/// Session-scoped to-do list with create/toggle/delete edits.
///
/// Each edit is atomic at the granularity of one list mutation; the list is
/// confined to the UI's event-handling thread and needs no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task to the front of the list and returns a reference to it.
    ///
    /// Name and description are trimmed. A name that is blank after trimming
    /// is rejected silently: the list is untouched and `None` is returned.
    pub fn add(&mut self, name: &str, description: &str, priority: TaskPriority) -> Option<&Task> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let task = Task {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: description.trim().to_string(),
            is_completed: false,
            created_at: now_epoch_ms(),
            priority,
        };
        self.tasks.insert(0, task);
        Some(&self.tasks[0])
    }

    /// Flips the completion flag of the task with the given id.
    ///
    /// Returns whether a task matched; an absent id is a no-op.
    pub fn toggle_completed(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.is_completed = !task.is_completed;
                true
            }
            None => false,
        }
    }

    /// Removes the task with the given id.
    ///
    /// Returns whether a task matched; an absent id is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    /// Fraction of tasks completed, `0.0` for an empty list.
    pub fn completion_ratio(&self) -> f64 {
        if self.tasks.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.tasks.len() as f64
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.is_completed).count()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in display order, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
