//! Cache Item Module
//!
//! Defines the record stored for every key: the value plus its timestamps.

use chrono::{DateTime, Duration, Utc};

// == Cache Item ==
/// A single cache entry with value and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<V> {
    /// The stored value
    pub value: V,
    /// Instant the entry was written
    pub created: DateTime<Utc>,
    /// Instant after which the entry is dead, None = no expiration
    pub expiration: Option<DateTime<Utc>>,
}

impl<V> Item<V> {
    // == Constructor ==
    /// Creates an item written now.
    ///
    /// A `ttl` of zero or less means the item never expires. A positive `ttl`
    /// so large that `now + ttl` is unrepresentable also never expires.
    pub fn new(value: V, ttl: Option<Duration>) -> Self {
        let created = Utc::now();
        let expiration = ttl
            .filter(|ttl| *ttl > Duration::zero())
            .and_then(|ttl| created.checked_add_signed(ttl));

        Self {
            value,
            created,
            expiration,
        }
    }

    // == Is Expired ==
    /// Checks if the item has expired.
    ///
    /// Boundary condition: the item is still alive at exactly its expiration
    /// instant and expires at the first instant strictly after it.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Same rule as [`Item::is_expired`], evaluated against `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expiration {
            Some(expiration) => now > expiration,
            None => false,
        }
    }

    // == Time To Live ==
    /// Returns the remaining TTL, or None if no expiration is set.
    ///
    /// # Returns
    /// - `Some(zero)` if the item has expired
    /// - `Some(remaining)` if the item has a TTL and hasn't expired
    /// - `None` if the item never expires
    pub fn ttl_remaining(&self) -> Option<Duration> {
        self.expiration.map(|expiration| {
            let remaining = expiration - Utc::now();
            remaining.max(Duration::zero())
        })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_item_creation_no_ttl() {
        let item = Item::new("test_value", None);

        assert_eq!(item.value, "test_value");
        assert!(item.expiration.is_none());
        assert!(!item.is_expired());
    }

    #[test]
    fn test_item_creation_with_ttl() {
        let item = Item::new("test_value", Some(Duration::seconds(60)));

        assert_eq!(item.expiration, Some(item.created + Duration::seconds(60)));
        assert!(!item.is_expired());
    }

    #[test]
    fn test_item_non_positive_ttl_never_expires() {
        let zero = Item::new(1, Some(Duration::zero()));
        let negative = Item::new(2, Some(Duration::milliseconds(-5)));

        assert!(zero.expiration.is_none());
        assert!(negative.expiration.is_none());
    }

    #[test]
    fn test_item_overflowing_ttl_never_expires() {
        let item = Item::new((), Some(Duration::MAX));

        assert!(item.expiration.is_none());
        assert!(!item.is_expired());
    }

    #[test]
    fn test_item_expiration() {
        let item = Item::new("test_value", Some(Duration::milliseconds(10)));

        assert!(!item.is_expired());

        sleep(std::time::Duration::from_millis(20));

        assert!(item.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let item = Item {
            value: "test",
            created: now,
            expiration: Some(now),
        };

        // Alive at the instant itself, dead one nanosecond later
        assert!(!item.is_expired_at(now));
        assert!(item.is_expired_at(now + Duration::nanoseconds(1)));
        assert!(!item.is_expired_at(now - Duration::nanoseconds(1)));
    }

    #[test]
    fn test_ttl_remaining() {
        let item = Item::new("test_value", Some(Duration::seconds(10)));

        let remaining = item.ttl_remaining().unwrap();
        assert!(remaining <= Duration::seconds(10));
        assert!(remaining >= Duration::seconds(9));
    }

    #[test]
    fn test_ttl_remaining_no_expiration() {
        let item = Item::new("test_value", None);
        assert!(item.ttl_remaining().is_none());
    }

    #[test]
    fn test_ttl_remaining_expired() {
        let now = Utc::now();
        let item = Item {
            value: "test",
            created: now - Duration::seconds(2),
            expiration: Some(now - Duration::seconds(1)),
        };

        assert_eq!(item.ttl_remaining(), Some(Duration::zero()));
    }
}
