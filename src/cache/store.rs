//! Cache Store Module
//!
//! Main cache engine: HashMap storage with TTL staleness checks and a
//! size-bounded eviction sweep that prefers expired entries, then oldest.

use std::collections::HashMap;

use crate::cache::{current_timestamp_ms, CacheEntry, CacheStats, EVICTION_MARGIN};

// == Response Cache ==
/// Bounded TTL cache mapping request keys to previously computed responses.
///
/// `insert` always succeeds; the size bound is a soft invariant restored
/// immediately after any insertion pushes the map over `max_entries`.
/// `get` never returns an entry older than the TTL, but leaves expired
/// entries in place for the next sweep.
#[derive(Debug)]
pub struct ResponseCache<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Maximum entry age in milliseconds
    ttl_ms: u64,
    /// Insertion counter, stamped onto entries for deterministic ordering
    next_seq: u64,
}

impl<V: Clone> ResponseCache<V> {
    // == Constructor ==
    /// Creates a new ResponseCache with the given capacity and TTL.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries the cache can hold
    /// * `ttl_ms` - Maximum entry age in milliseconds
    pub fn new(max_entries: usize, ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_ms,
            next_seq: 0,
        }
    }

    /// Creates a ResponseCache with the service's fixed parameters.
    pub fn with_defaults() -> Self {
        Self::new(super::MAX_ENTRIES, super::CACHE_TTL_MS)
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value only if the entry exists and its age is within the
    /// TTL. An absent key and an expired entry are both misses; the caller
    /// cannot tell them apart and recomputes either way. Expired entries are
    /// not removed here, only during sweeps.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = current_timestamp_ms();
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl_ms, now) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Inserts or overwrites an entry, stamping it with the current time,
    /// then restores the size bound if the insertion exceeded it.
    ///
    /// Overwrites replace the entry wholesale; the old timestamp is gone.
    pub fn insert(&mut self, key: String, value: V) {
        self.next_seq += 1;
        self.entries.insert(key, CacheEntry::new(value, self.next_seq));

        if self.entries.len() > self.max_entries {
            self.enforce_bound();
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Bound Enforcement ==
    /// Brings the cache back within `max_entries`.
    ///
    /// First removes every expired entry. If the cache is still over the
    /// bound, removes the oldest live entries until only
    /// `max_entries - EVICTION_MARGIN` remain; the margin keeps the very
    /// next insertion from triggering another sweep.
    fn enforce_bound(&mut self) {
        self.remove_expired();

        if self.entries.len() <= self.max_entries {
            return;
        }

        // Floor at 1 so a capacity smaller than the margin never evicts
        // the entry that was just inserted.
        let target = self.max_entries.saturating_sub(EVICTION_MARGIN).max(1);
        let excess = self.entries.len() - target;

        let mut order: Vec<(u64, u64, String)> = self
            .entries
            .iter()
            .map(|(key, entry)| (entry.created_at, entry.seq, key.clone()))
            .collect();
        order.sort_unstable();

        for (_, _, key) in order.into_iter().take(excess) {
            self.entries.remove(&key);
        }

        self.stats.record_evictions(excess as u64);
    }

    // == Sweep Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Called periodically by the
    /// background cleanup task.
    pub fn sweep_expired(&mut self) -> usize {
        let removed = self.remove_expired();
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    fn remove_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired(self.ttl_ms, now));

        let removed = before - self.entries.len();
        self.stats.record_expired(removed as u64);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
