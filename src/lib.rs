//! ordcache: bounded key-value caching with pluggable eviction policies.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

pub use crate::builder::{Cache, CacheBuilder, CachePolicy};
pub use crate::ds::{OrderList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError, KeyNotFound};
#[cfg(feature = "metrics")]
pub use crate::metrics::CacheMetricsSnapshot;
pub use crate::policy::engine::CacheCore;
#[cfg(feature = "concurrency")]
pub use crate::policy::engine::ConcurrentCacheCore;
pub use crate::policy::fifo::FifoCache;
pub use crate::policy::lru::LruCache;
#[cfg(feature = "concurrency")]
pub use crate::policy::{fifo::ConcurrentFifoCache, lru::ConcurrentLruCache};
