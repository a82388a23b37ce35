//! Operation counters for cache cores.
//!
//! Enabled with the `metrics` cargo feature. Counters are recorded inline
//! by the engine under the same exclusive access that guards the cache
//! itself, so plain `u64` fields suffice; [`CacheMetricsSnapshot`] is the
//! copy-out form with size gauges captured at snapshot time.

/// Running operation counters owned by a cache core.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub set_calls: u64,
    pub set_updates: u64,
    pub set_new: u64,
    pub evictions: u64,

    pub delete_calls: u64,
    pub delete_found: u64,
    pub delete_missing: u64,

    pub pop_victim_calls: u64,
    pub clear_calls: u64,
}

/// Point-in-time copy of [`CacheMetrics`] plus size gauges.
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub set_calls: u64,
    pub set_updates: u64,
    pub set_new: u64,
    pub evictions: u64,

    pub delete_calls: u64,
    pub delete_found: u64,
    pub delete_missing: u64,

    pub pop_victim_calls: u64,
    pub clear_calls: u64,

    // gauges captured at snapshot time
    pub current_size: usize,
    pub max_size: usize,
}
