//! Unified error handling for the storefront.
//!
//! Provides a unified `AppError` type; fallible storefront entry points
//! return `Result<T, AppError>`. Failures surface to the shopper as a
//! generic notice, never as structured detail.

use thiserror::Error;

use crate::config::ConfigError;
use crate::models::chat::ChatError;
use crate::services::checkout::CheckoutError;
use cbc_core::RepositoryError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Data layer operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Chat widget rejected the input.
    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    /// Checkout could not complete.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Message suitable for showing to a shopper.
    ///
    /// Internal details stay in the logs; the visible text matches the
    /// shop's best-effort tone.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Repository(_) | Self::Config(_) => {
                "Une erreur est survenue. Veuillez réessayer.".to_string()
            }
            Self::Chat(err) => err.to_string(),
            Self::Checkout(err) => err.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Chat(ChatError::EmptyMessage);
        assert!(err.to_string().starts_with("Chat error:"));
    }

    #[test]
    fn test_repository_errors_are_masked_for_shoppers() {
        let err = AppError::Repository(RepositoryError::Unavailable("boom".to_string()));
        assert!(!err.user_message().contains("boom"));
    }
}
