//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `ORCHARD_DATA_DIR` - Directory for the durable key/value store
//!   (default: `.orchard`)
//! - `ORCHARD_CATALOG_PATH` - Product catalog JSON file
//!   (default: `products.json`)
//! - `ORCHARD_VIEW_CACHE_TTL_SECS` - Lifetime of memoized catalog views
//!   (default: 60)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".orchard";
const DEFAULT_CATALOG_PATH: &str = "products.json";
const DEFAULT_VIEW_CACHE_TTL_SECS: u64 = 60;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront core configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the durable key/value store
    pub data_dir: PathBuf,
    /// Product catalog JSON file
    pub catalog_path: PathBuf,
    /// Lifetime of memoized catalog views
    pub view_cache_ttl: Duration,
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

        let data_dir = get_env_or_default("ORCHARD_DATA_DIR", DEFAULT_DATA_DIR).into();
        let catalog_path = get_env_or_default("ORCHARD_CATALOG_PATH", DEFAULT_CATALOG_PATH).into();
        let view_cache_ttl = match std::env::var("ORCHARD_VIEW_CACHE_TTL_SECS") {
            Ok(value) => parse_ttl_secs("ORCHARD_VIEW_CACHE_TTL_SECS", &value)?,
            Err(_) => Duration::from_secs(DEFAULT_VIEW_CACHE_TTL_SECS),
        };

        Ok(Self {
            data_dir,
            catalog_path,
            view_cache_ttl,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.into(),
            catalog_path: DEFAULT_CATALOG_PATH.into(),
            view_cache_ttl: Duration::from_secs(DEFAULT_VIEW_CACHE_TTL_SECS),
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a TTL given in whole seconds.
fn parse_ttl_secs(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.data_dir, PathBuf::from(".orchard"));
        assert_eq!(config.catalog_path, PathBuf::from("products.json"));
        assert_eq!(config.view_cache_ttl, Duration::from_secs(60));
    }

    #[test]
    fn test_parse_ttl_rejects_garbage() {
        assert!(parse_ttl_secs("ORCHARD_VIEW_CACHE_TTL_SECS", "90").is_ok());
        assert!(parse_ttl_secs("ORCHARD_VIEW_CACHE_TTL_SECS", "soon").is_err());
        assert!(parse_ttl_secs("ORCHARD_VIEW_CACHE_TTL_SECS", "-1").is_err());
    }
}
