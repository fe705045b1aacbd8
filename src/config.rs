//! Client configuration.
//!
//! This crate is a library; the host application owns persistence, so the
//! configuration is a plain struct with a `Default` impl and an optional
//! environment override.

/// Default API origin, the development backend.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the API origin.
const BASE_URL_ENV: &str = "CAMPUSMAP_API_URL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin of the map API, without a trailing slash.
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Build a config from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}
