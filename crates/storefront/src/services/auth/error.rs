//! Mock authentication error types.

use thiserror::Error;

use clementine_core::EmailError;

use crate::storage::StorageError;

/// Errors that can occur during the mock auth flow.
///
/// The `Display` strings of the business-rule variants are the inline form
/// messages the view layer renders verbatim.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Registration email already exists in the directory.
    #[error("User with this email already exists")]
    DuplicateEmail,

    /// No directory user matches both email and password.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Persisting the directory or session failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
