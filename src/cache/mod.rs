//! Cache Module
//!
//! Provides the in-memory cache with lazily reclaimed TTL expiration.

mod item;
mod stats;
mod store;


// Re-export public types
pub use item::Item;
pub use stats::CacheStats;
pub use store::Cache;
