//! Unified error handling.
//!
//! Provides an umbrella `AppError` for code that crosses component
//! boundaries (notably [`crate::state::AppState`] construction). Individual
//! components keep their own error enums; nothing in this system is fatal -
//! store-level failures are converted into view-facing state at the service
//! boundary.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration failed to load.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Persistent key-value store operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Remote catalog operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Mock auth operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
