//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with creation metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached value with its creation metadata.
///
/// Entries are never updated in place: an overwrite replaces the whole
/// entry, resetting `created_at` and `seq`.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Insertion sequence number, used as a tie-break when two entries
    /// share the same millisecond timestamp
    pub seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: V, seq: u64) -> Self {
        Self {
            value,
            created_at: current_timestamp_ms(),
            seq,
        }
    }

    // == Age ==
    /// Returns the entry's age in milliseconds at time `now_ms`.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl_ms` at time `now_ms`.
    ///
    /// Boundary condition: an entry is still valid when its age equals the
    /// TTL exactly; it expires once the age exceeds it.
    pub fn is_expired(&self, ttl_ms: u64, now_ms: u64) -> bool {
        self.age_ms(now_ms) > ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let before = current_timestamp_ms();
        let entry = CacheEntry::new("value".to_string(), 7);
        let after = current_timestamp_ms();

        assert_eq!(entry.value, "value");
        assert_eq!(entry.seq, 7);
        assert!(entry.created_at >= before && entry.created_at <= after);
    }

    #[test]
    fn test_entry_age() {
        let entry = CacheEntry::new("value".to_string(), 0);
        assert_eq!(entry.age_ms(entry.created_at + 250), 250);
    }

    #[test]
    fn test_entry_age_clock_skew() {
        // A clock reading earlier than creation must not underflow
        let entry = CacheEntry::new("value".to_string(), 0);
        assert_eq!(entry.age_ms(entry.created_at.saturating_sub(10)), 0);
    }

    #[test]
    fn test_expiration_boundary() {
        let entry = CacheEntry::new("value".to_string(), 0);
        let ttl = 1000;

        // Valid at exactly TTL, expired one millisecond past it
        assert!(!entry.is_expired(ttl, entry.created_at + ttl));
        assert!(entry.is_expired(ttl, entry.created_at + ttl + 1));
    }

    #[test]
    fn test_fresh_entry_not_expired() {
        let entry = CacheEntry::new("value".to_string(), 0);
        assert!(!entry.is_expired(300_000, current_timestamp_ms()));
    }
}
