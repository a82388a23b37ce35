//! First-in-first-out eviction.
//!
//! Reads and updates never reorder: only first insertion places an entry,
//! so the front of the list is always the oldest still-resident key and
//! eviction ignores the access pattern entirely.
//!
//! ```text
//!   cap 3:  set a, set b, set c        front ─► a ◄──► b ◄──► c ◄─ back
//!           get a, get c               front ─► a ◄──► b ◄──► c ◄─ back
//!           set d (full: evict a)      front ─► b ◄──► c ◄──► d ◄─ back
//! ```

use crate::policy::engine::CacheCore;
#[cfg(feature = "concurrency")]
use crate::policy::engine::ConcurrentCacheCore;
use crate::policy::EvictionPolicy;

/// Marker policy: never promote.
#[derive(Debug)]
pub enum Fifo {}

impl EvictionPolicy for Fifo {
    const PROMOTE_ON_GET: bool = false;
    const PROMOTE_ON_UPDATE: bool = false;
}

/// Cache evicting the oldest inserted key first, regardless of access.
pub type FifoCache<K, V> = CacheCore<K, V, Fifo>;

/// Thread-safe FIFO cache sharing one instance across clones.
#[cfg(feature = "concurrency")]
pub type ConcurrentFifoCache<K, V> = ConcurrentCacheCore<K, V, Fifo>;
