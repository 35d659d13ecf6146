//! Cache Store Module
//!
//! The lock-protected key/item mapping with lazy TTL expiration.

use std::collections::HashMap;
use std::mem;

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use tracing::{debug, info, trace};

use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheStats, Item};
use crate::config::CacheConfig;

// == Cache ==
/// Thread-safe string-keyed cache with optional per-entry TTL.
///
/// Expired entries are never removed by a timer. They are reclaimed only when
/// [`get`](Cache::get), [`get_item`](Cache::get_item), [`count`](Cache::count)
/// or [`items`](Cache::items) touches them, so an expired key that is never
/// read again keeps its slot until the next `count`, `items` or `clear`, or
/// until it is deleted or overwritten by a `set`.
///
/// Share between threads with `Arc<Cache<V>>`.
#[derive(Debug)]
pub struct Cache<V> {
    /// Key-item storage, one lock for the whole map
    entries: RwLock<HashMap<String, Item<V>>>,
    /// Lookup and reclaim counters
    stats: StatsRecorder,
    config: CacheConfig,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates an empty cache with the default configuration.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stats: StatsRecorder::default(),
            config: CacheConfig::default(),
        }
    }

    /// Creates an empty cache labelled and defaulted by `config`.
    pub fn with_config(config: CacheConfig) -> Self {
        info!(
            cache = %config.name,
            default_ttl_ms = config.default_ttl.num_milliseconds(),
            "Cache initialized"
        );

        Self {
            entries: RwLock::new(HashMap::new()),
            stats: StatsRecorder::default(),
            config,
        }
    }

    /// Returns the configuration this cache was built with.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    // == Set ==
    /// Stores a value that never expires, overwriting any previous entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.insert(key.into(), Item::new(value, None));
    }

    /// Stores a value that expires `ttl` from now.
    ///
    /// A `ttl` of zero or less stores the value without expiration, exactly
    /// like [`Cache::set`].
    pub fn set_with_expiration(&self, key: impl Into<String>, value: V, ttl: Duration) {
        self.insert(key.into(), Item::new(value, Some(ttl)));
    }

    /// Stores a value using the configured default TTL.
    pub fn set_default(&self, key: impl Into<String>, value: V) {
        self.set_with_expiration(key, value, self.config.default_ttl);
    }

    fn insert(&self, key: String, item: Item<V>) {
        self.entries.write().insert(key, item);
    }

    // == Delete ==
    /// Removes an entry. Removing an absent key is a no-op.
    pub fn delete(&self, key: &str) {
        self.entries.write().remove(key);
    }

    // == Clear ==
    /// Discards every entry, expired or not.
    pub fn clear(&self) {
        let discarded = mem::take(&mut *self.entries.write());

        debug!(
            cache = %self.config.name,
            discarded = discarded.len(),
            "Cache cleared"
        );
    }

    // == Count ==
    /// Returns the number of live entries.
    ///
    /// Takes the exclusive lock: every expired entry met during the scan is
    /// removed.
    pub fn count(&self) -> usize {
        let mut entries = self.entries.write();
        self.sweep(&mut entries);
        entries.len()
    }

    // == Stats ==
    /// Returns current counters. Does not sweep.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    /// Raw size of the mapping, including expired entries not yet reclaimed.
    pub fn len_including_expired(&self) -> usize {
        self.entries.read().len()
    }

    // == Sweep ==
    /// Drops expired entries from an already write-locked map.
    ///
    /// Returns the number of entries removed.
    fn sweep(&self, entries: &mut HashMap<String, Item<V>>) -> usize {
        self.sweep_at(entries, Utc::now())
    }

    /// Sweep against a fixed instant. Items expiring exactly at `now` stay.
    fn sweep_at(&self, entries: &mut HashMap<String, Item<V>>, now: DateTime<Utc>) -> usize {
        let before = entries.len();
        entries.retain(|_, item| !item.is_expired_at(now));
        let removed = before - entries.len();

        if removed > 0 {
            self.stats.record_expired(removed);
            debug!(
                cache = %self.config.name,
                removed,
                remaining = entries.len(),
                "Swept expired entries"
            );
        }

        removed
    }

    // == Lookup ==
    /// Reads a live entry through `read`, reclaiming it if it has expired.
    fn lookup<R>(&self, key: &str, read: impl FnOnce(&Item<V>) -> R) -> Option<R> {
        {
            let entries = self.entries.read();
            match entries.get(key) {
                None => {
                    self.stats.record_miss();
                    return None;
                }
                Some(item) if !item.is_expired() => {
                    self.stats.record_hit();
                    return Some(read(item));
                }
                Some(_) => {}
            }
        }

        // Separate critical section: a writer may replace the entry after the
        // read lock is released, and this removal then drops the new entry.
        if self.entries.write().remove(key).is_some() {
            self.stats.record_expired(1);
            trace!(cache = %self.config.name, key, "Reclaimed expired entry on read");
        }

        self.stats.record_miss();
        None
    }
}

impl<V: Clone> Cache<V> {
    // == Get ==
    /// Returns a copy of the value at `key` if present and not expired.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lookup(key, |item| item.value.clone())
    }

    /// Returns the full item at `key` if present and not expired.
    pub fn get_item(&self, key: &str) -> Option<Item<V>> {
        self.lookup(key, Item::clone)
    }

    // == Items ==
    /// Returns a snapshot of all live entries, removing expired ones.
    ///
    /// The snapshot is detached from the cache: later writes to either side
    /// are not visible to the other.
    pub fn items(&self) -> HashMap<String, Item<V>> {
        let mut entries = self.entries.write();
        self.sweep(&mut entries);
        entries.clone()
    }
}

impl<V> Default for Cache<V> {
    fn default() -> Self {
        Self::new()
    }
}
