//! Eviction policies and the cache engine they share.
//!
//! LRU and FIFO are structurally identical: one order list, one index, one
//! capacity. The entire behavioral difference is whether a touch promotes
//! the touched entry to the most-significant position. That difference is
//! captured by [`EvictionPolicy`]'s two consts, and a single generic
//! engine ([`engine::CacheCore`]) carries the mechanics for both.

pub mod engine;
pub mod fifo;
pub mod lru;

pub use engine::CacheCore;
#[cfg(feature = "concurrency")]
pub use engine::ConcurrentCacheCore;
pub use fifo::{Fifo, FifoCache};
pub use lru::{Lru, LruCache};

/// Compile-time capability distinguishing eviction policies.
///
/// Policies never see keys or values; they only answer whether a touch
/// reorders. Selected at construction through the engine's type parameter,
/// or at runtime through [`CacheBuilder`](crate::builder::CacheBuilder).
pub trait EvictionPolicy {
    /// Whether a successful lookup moves the entry to the back
    /// (most-significant position).
    const PROMOTE_ON_GET: bool;

    /// Whether updating an existing key's value moves the entry to the
    /// back.
    const PROMOTE_ON_UPDATE: bool;
}
