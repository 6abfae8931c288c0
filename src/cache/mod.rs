//! Cache Module
//!
//! In-memory response cache with TTL expiration and size-bounded eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Maximum age of a cached entry in milliseconds (5 minutes)
pub const CACHE_TTL_MS: u64 = 300_000;

/// Maximum number of entries the cache holds
pub const MAX_ENTRIES: usize = 200;

/// Extra entries removed beyond the bound during eviction, so the sweep
/// does not re-trigger on the very next insertion
pub const EVICTION_MARGIN: usize = 20;
