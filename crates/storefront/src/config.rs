//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit the public demo catalog.
//!
//! - `CLEMENTINE_CATALOG_URL` - Base URL of the product catalog API
//!   (default: `https://fakestoreapi.com`)
//! - `CLEMENTINE_STORAGE_DIR` - Directory for the persistent key-value store
//!   (default: `./clementine-data`)
//! - `CLEMENTINE_AUTH_LATENCY_MS` - Simulated network latency for the mock
//!   auth flow, in milliseconds (default: 1000)
//! - `CLEMENTINE_CACHE_TTL_SECS` - TTL for cached catalog responses, in
//!   seconds (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default base URL of the product catalog API.
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com";

/// Default directory for the persistent key-value store.
pub const DEFAULT_STORAGE_DIR: &str = "./clementine-data";

/// Default simulated auth latency in milliseconds.
pub const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;

/// Default catalog cache TTL in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable holds an unparseable URL.
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        /// Environment variable name.
        var: &'static str,
        /// Underlying parse error.
        source: url::ParseError,
    },

    /// An environment variable holds an unparseable number.
    #[error("{var} is not a valid number: {source}")]
    InvalidNumber {
        /// Environment variable name.
        var: &'static str,
        /// Underlying parse error.
        source: std::num::ParseIntError,
    },
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the product catalog API.
    pub catalog_url: Url,
    /// Directory backing the persistent key-value store.
    pub storage_dir: PathBuf,
    /// Artificial delay applied to mock auth calls.
    pub auth_latency: Duration,
    /// TTL for cached catalog responses.
    pub cache_ttl: Duration,
}

impl StorefrontConfig {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file first when one is present.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let catalog_url = parse_url(
            "CLEMENTINE_CATALOG_URL",
            &get_env_or_default("CLEMENTINE_CATALOG_URL", DEFAULT_CATALOG_URL),
        )?;

        let storage_dir = PathBuf::from(get_env_or_default(
            "CLEMENTINE_STORAGE_DIR",
            DEFAULT_STORAGE_DIR,
        ));

        let auth_latency = Duration::from_millis(parse_u64(
            "CLEMENTINE_AUTH_LATENCY_MS",
            &get_env_or_default(
                "CLEMENTINE_AUTH_LATENCY_MS",
                &DEFAULT_AUTH_LATENCY_MS.to_string(),
            ),
        )?);

        let cache_ttl = Duration::from_secs(parse_u64(
            "CLEMENTINE_CACHE_TTL_SECS",
            &get_env_or_default(
                "CLEMENTINE_CACHE_TTL_SECS",
                &DEFAULT_CACHE_TTL_SECS.to_string(),
            ),
        )?);

        Ok(Self {
            catalog_url,
            storage_dir,
            auth_latency,
            cache_ttl,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid"),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

/// Get an environment variable or a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl { var, source })
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|source| ConfigError::InvalidNumber { var, source })
}
