//! Error types for the cache crate
//!
//! Cache operations themselves are infallible; only configuration loading
//! can fail.

use thiserror::Error;

// == Config Error Enum ==
/// Errors raised while building a [`CacheConfig`](crate::CacheConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable was set but could not be parsed
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// A name was given that cannot label log events
    #[error("Invalid cache name: {0:?}")]
    InvalidName(String),
}

// == Result Type Alias ==
/// Convenience Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = ConfigError::InvalidValue {
            var: "CACHE_DEFAULT_TTL_MS",
            value: "soon".to_string(),
            reason: "invalid digit found in string".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("CACHE_DEFAULT_TTL_MS"));
        assert!(msg.contains("\"soon\""));
    }

    #[test]
    fn test_invalid_name_message() {
        let err = ConfigError::InvalidName("   ".to_string());
        assert_eq!(err.to_string(), "Invalid cache name: \"   \"");
    }
}
