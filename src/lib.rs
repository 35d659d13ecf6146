//! TTL Cache - A generic, thread-safe in-memory key-value store
//!
//! Entries may carry a time-to-live. Expired entries are reclaimed lazily,
//! only when a read or an enumeration touches them.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{Cache, CacheStats, Item};
pub use config::CacheConfig;
pub use error::{ConfigError, Result};
