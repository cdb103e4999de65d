//! Account signup/login use-case service.
//!
//! # Responsibility
//! - Validate signup form input and persist the resulting account record.
//! - Report outcomes as explicit results; callers navigate onward only on
//!   `Ok`, which is returned strictly after the write is durable.
//!
//! # Invariants
//! - A rejected submission never reaches the repository.
//! - Failed inserts surface as errors and never report success.

use crate::model::user::{UserId, UserRecord};
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Signup form input as submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub name: String,
    pub password: String,
    pub confirm_password: String,
}

/// Account validation and persistence errors.
///
/// Validation variants are transient user-facing notices, not fatal.
#[derive(Debug)]
pub enum AuthError {
    /// Name or password was blank after trimming.
    MissingFields,
    /// Password and confirmation did not match.
    PasswordMismatch,
    Repo(RepoError),
}

impl Display for AuthError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields => write!(f, "please fill all required fields"),
            Self::PasswordMismatch => write!(f, "passwords do not match"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AuthError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::MissingFields | Self::PasswordMismatch => None,
        }
    }
}

impl From<RepoError> for AuthError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service for account submission flows.
pub struct AuthService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates a signup submission and inserts the account record.
    ///
    /// # Contract
    /// - The name is trimmed before validation and storage.
    /// - Blank name or password fails with [`AuthError::MissingFields`].
    /// - Mismatched confirmation fails with [`AuthError::PasswordMismatch`].
    /// - On success the record is durably inserted and its store-assigned id
    ///   is returned; callers navigate onward only after receiving `Ok`.
    pub fn sign_up(&self, request: &SignUpRequest) -> Result<UserId, AuthError> {
        let name = request.name.trim();
        if name.is_empty() || request.password.trim().is_empty() {
            warn!("event=sign_up module=auth status=rejected reason=missing_fields");
            return Err(AuthError::MissingFields);
        }
        if request.password != request.confirm_password {
            warn!("event=sign_up module=auth status=rejected reason=password_mismatch");
            return Err(AuthError::PasswordMismatch);
        }

        let user = UserRecord::new(name, request.password.clone());
        let user_id = self.repo.insert_user(&user)?;
        info!("event=sign_up module=auth status=ok user_id={user_id}");
        Ok(user_id)
    }

    /// Accepts any non-blank name/password pair.
    ///
    /// Credentials are not yet checked against stored accounts; this mirrors
    /// the current product behavior and will grow a real lookup once the
    /// login flow is finished.
    pub fn log_in(&self, name: &str, password: &str) -> Result<(), AuthError> {
        if name.trim().is_empty() || password.trim().is_empty() {
            warn!("event=log_in module=auth status=rejected reason=missing_fields");
            return Err(AuthError::MissingFields);
        }
        info!("event=log_in module=auth status=ok");
        Ok(())
    }
}
