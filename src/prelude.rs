pub use crate::builder::{Cache, CacheBuilder, CachePolicy};
pub use crate::error::{ConfigError, KeyNotFound};
pub use crate::policy::fifo::FifoCache;
pub use crate::policy::lru::LruCache;
#[cfg(feature = "concurrency")]
pub use crate::policy::{fifo::ConcurrentFifoCache, lru::ConcurrentLruCache};
pub use crate::traits::{BoundedCache, VictimOrdered};
