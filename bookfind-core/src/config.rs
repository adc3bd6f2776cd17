//! Catalog connection settings

use crate::error::ConfigError;
use std::time::Duration;

/// Public Gutendex endpoint
pub const DEFAULT_BASE_URL: &str = "https://gutendex.com/books";

/// Quiet period before a typed search is sent
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Environment variable overriding the catalog base URL
pub const BASE_URL_ENV: &str = "BOOKFIND_BASE_URL";

/// Environment variable overriding the debounce period, in milliseconds
pub const DEBOUNCE_ENV: &str = "BOOKFIND_DEBOUNCE_MS";

/// Where the catalog lives and how long to wait for typing to settle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog endpoint, without a query string
    pub base_url: String,

    /// Debounce quiet period for free-text search
    pub debounce: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the process environment, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(base_url)?;
        }

        if let Some(raw) = lookup(DEBOUNCE_ENV) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidDebounce(raw.clone()))?;
            config.debounce = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Set the base URL, rejecting anything that is not http(s)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim();
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    /// Set the debounce period
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}
