//! Core domain logic for TaskMaster.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{
    open_store, open_store_in_memory, DbError, DbResult, Store, StoreCell, STORE_FILE_NAME,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{TaskId, TaskRecord};
pub use model::task_list::{Task, TaskList, TaskPriority};
pub use model::user::{UserId, UserRecord};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::auth_service::{AuthError, AuthService, SignUpRequest};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
