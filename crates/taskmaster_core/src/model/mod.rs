//! Domain records and UI-local task list state.
//!
//! # Responsibility
//! - Define the persisted record shapes for user accounts and tasks.
//! - Hold the in-memory task list state machine driving the to-do view.
//!
//! # Invariants
//! - Persisted records carry store-assigned integer identities.
//! - The in-memory task list is never written to the store.

pub mod task;
pub mod task_list;
pub mod user;
