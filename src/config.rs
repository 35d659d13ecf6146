//! Configuration Module
//!
//! Construction-time settings for a [`Cache`](crate::Cache), loadable from
//! environment variables.

use std::env;

use chrono::Duration;

use crate::error::{ConfigError, Result};

const NAME_VAR: &str = "CACHE_NAME";
const DEFAULT_TTL_VAR: &str = "CACHE_DEFAULT_TTL_MS";

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Label attached to every log event the cache emits
    pub name: String,
    /// TTL used by `Cache::set_default`; zero or negative means no expiration
    pub default_ttl: Duration,
}

impl CacheConfig {
    /// Creates a config with the given name and no default expiration.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the TTL applied by `Cache::set_default`.
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_NAME` - Log label (default: "cache")
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 0, never expire)
    ///
    /// Unset variables fall back to defaults; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|var| env::var(var).ok())
    }

    fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(name) = lookup(NAME_VAR) {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidName(name));
            }
            config.name = name;
        }

        if let Some(raw) = lookup(DEFAULT_TTL_VAR) {
            let ms: i64 = raw
                .trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    var: DEFAULT_TTL_VAR,
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            config.default_ttl =
                Duration::try_milliseconds(ms).ok_or_else(|| ConfigError::InvalidValue {
                    var: DEFAULT_TTL_VAR,
                    value: raw.clone(),
                    reason: "out of range".to_string(),
                })?;
        }

        Ok(config)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            name: "cache".to_string(),
            default_ttl: Duration::zero(),
        }
    }
}
