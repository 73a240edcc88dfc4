//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional.
//!
//! - `CBC_ADMIN_SAVE_DELAY_MS` - How long catalog writes take through the
//!   simulated-latency layer, in milliseconds

use std::time::Duration;

use thiserror::Error;

const DEFAULT_SAVE_DELAY_MS: u64 = 1000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Delay applied to catalog writes by the simulated data layer.
    pub save_delay: Duration,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let save_delay_ms =
            get_env_or_default("CBC_ADMIN_SAVE_DELAY_MS", &DEFAULT_SAVE_DELAY_MS.to_string())
                .parse::<u64>()
                .map_err(|e| {
                    ConfigError::InvalidEnvVar("CBC_ADMIN_SAVE_DELAY_MS".to_string(), e.to_string())
                })?;

        Ok(Self {
            save_delay: Duration::from_millis(save_delay_ms),
        })
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            save_delay: Duration::from_millis(DEFAULT_SAVE_DELAY_MS),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
