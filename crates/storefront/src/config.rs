//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional; defaults describe the real shop.
//!
//! - `CBC_SHOP_NAME` - Shop display name
//! - `CBC_CONTACT_PHONE` - Customer service phone number
//! - `CBC_SHOP_CITY` - City line used in chat replies
//! - `CBC_SHOP_ADDRESS` - Exact address/coordinates line
//! - `CBC_DELIVERY_COUNTRIES` - Comma-separated country phrases, with the
//!   French preposition included (e.g. `au Togo,en Côte d'Ivoire`)
//! - `CBC_CHAT_TYPING_DELAY_MS` - Chat widget typing delay in milliseconds

use std::time::Duration;

use thiserror::Error;

const DEFAULT_SHOP_NAME: &str = "COMPUTER BUSINESS CENTER";
const DEFAULT_CONTACT_PHONE: &str = "+228 91254591";
const DEFAULT_SHOP_CITY: &str = "Lomé, Togo";
const DEFAULT_SHOP_ADDRESS: &str = "6°10'49.4\"N 1°11'43.0\"E";
const DEFAULT_DELIVERY_COUNTRIES: &str =
    "au Togo,en Côte d'Ivoire,au Bénin,au Burkina Faso,au Mali,au Sénégal";
const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Shop display name.
    pub shop_name: String,
    /// Customer service phone number, quoted verbatim in chat replies.
    pub contact_phone: String,
    /// City line used in chat replies.
    pub shop_city: String,
    /// Exact address/coordinates line.
    pub shop_address: String,
    /// Countries the shop delivers to, preposition included.
    pub delivery_countries: Vec<String>,
    /// How long the chat widget pretends to type before replying.
    pub typing_delay: Duration,
}

impl StorefrontConfig {
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

        let typing_delay_ms = get_env_or_default("CBC_CHAT_TYPING_DELAY_MS", &DEFAULT_TYPING_DELAY_MS.to_string())
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CBC_CHAT_TYPING_DELAY_MS".to_string(), e.to_string())
            })?;

        let delivery_countries =
            get_env_or_default("CBC_DELIVERY_COUNTRIES", DEFAULT_DELIVERY_COUNTRIES)
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

        Ok(Self {
            shop_name: get_env_or_default("CBC_SHOP_NAME", DEFAULT_SHOP_NAME),
            contact_phone: get_env_or_default("CBC_CONTACT_PHONE", DEFAULT_CONTACT_PHONE),
            shop_city: get_env_or_default("CBC_SHOP_CITY", DEFAULT_SHOP_CITY),
            shop_address: get_env_or_default("CBC_SHOP_ADDRESS", DEFAULT_SHOP_ADDRESS),
            delivery_countries,
            typing_delay: Duration::from_millis(typing_delay_ms),
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shop_name: DEFAULT_SHOP_NAME.to_string(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            shop_city: DEFAULT_SHOP_CITY.to_string(),
            shop_address: DEFAULT_SHOP_ADDRESS.to_string(),
            delivery_countries: DEFAULT_DELIVERY_COUNTRIES
                .split(',')
                .map(str::to_string)
                .collect(),
            typing_delay: Duration::from_millis(DEFAULT_TYPING_DELAY_MS),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_shop() {
        let config = StorefrontConfig::default();
        assert_eq!(config.contact_phone, "+228 91254591");
        assert_eq!(config.delivery_countries.len(), 6);
        assert_eq!(config.typing_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_default_countries_carry_prepositions() {
        let config = StorefrontConfig::default();
        let first = config.delivery_countries.first().expect("non-empty");
        assert_eq!(first, "au Togo");
    }
}
