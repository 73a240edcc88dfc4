//! Unified error handling for the back office.

use thiserror::Error;

use crate::config::ConfigError;
use cbc_core::RepositoryError;

/// Application-level error type for the back office.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Data layer operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `AdminError`.
pub type Result<T> = std::result::Result<T, AdminError>;
