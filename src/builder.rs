//! Runtime policy selection behind one concrete cache type.
//!
//! The engine picks its policy at compile time through a type parameter;
//! callers who want to choose at runtime (configuration, experiments) use
//! [`CacheBuilder`] and get back a [`Cache`] that hides the variant. Both
//! variants implement [`BoundedCache`] identically, so swapping policies
//! is a one-argument change.
//!
//! ## Example
//!
//! ```
//! use ordcache::builder::{CacheBuilder, CachePolicy};
//! use ordcache::traits::BoundedCache;
//!
//! let mut cache = CacheBuilder::new(100).build::<u64, String>(CachePolicy::Lru);
//! cache.set(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::{ConfigError, KeyNotFound};
use crate::policy::fifo::FifoCache;
use crate::policy::lru::LruCache;
use crate::traits::{BoundedCache, VictimOrdered};

/// Available cache eviction policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// First in, first out: strict insertion order, reads never reorder.
    Fifo,
    /// Least recently used: every touch promotes.
    Lru,
}

/// Policy-erased cache built by [`CacheBuilder`].
pub struct Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: CacheInner<K, V>,
}

enum CacheInner<K, V>
where
    K: Eq + Hash + Clone,
{
    Fifo(FifoCache<K, V>),
    Lru(LruCache<K, V>),
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Returns the policy this cache was built with.
    pub fn policy(&self) -> CachePolicy {
        match &self.inner {
            CacheInner::Fifo(_) => CachePolicy::Fifo,
            CacheInner::Lru(_) => CachePolicy::Lru,
        }
    }
}

impl<K, V> BoundedCache<K, V> for Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn max_size(&self) -> usize {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.max_size(),
            CacheInner::Lru(lru) => lru.max_size(),
        }
    }

    fn current_size(&self) -> usize {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.current_size(),
            CacheInner::Lru(lru) => lru.current_size(),
        }
    }

    fn contains(&self, key: &K) -> bool {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.contains(key),
            CacheInner::Lru(lru) => lru.contains(key),
        }
    }

    fn all_keys(&self) -> Vec<K> {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.all_keys(),
            CacheInner::Lru(lru) => lru.all_keys(),
        }
    }

    fn all_keys_reversed(&self) -> Vec<K> {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.all_keys_reversed(),
            CacheInner::Lru(lru) => lru.all_keys_reversed(),
        }
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.set(key, value),
            CacheInner::Lru(lru) => lru.set(key, value),
        }
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.get(key),
            CacheInner::Lru(lru) => lru.get(key),
        }
    }

    fn delete(&mut self, key: &K) -> Result<V, KeyNotFound> {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.delete(key),
            CacheInner::Lru(lru) => lru.delete(key),
        }
    }

    fn clear(&mut self) {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.clear(),
            CacheInner::Lru(lru) => lru.clear(),
        }
    }
}

impl<K, V> VictimOrdered<K, V> for Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn pop_victim(&mut self) -> Option<(K, V)> {
        match &mut self.inner {
            CacheInner::Fifo(fifo) => fifo.pop_victim(),
            CacheInner::Lru(lru) => lru.pop_victim(),
        }
    }

    fn peek_victim(&self) -> Option<(&K, &V)> {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.peek_victim(),
            CacheInner::Lru(lru) => lru.peek_victim(),
        }
    }

    fn victim_rank(&self, key: &K) -> Option<usize> {
        match &self.inner {
            CacheInner::Fifo(fifo) => fifo.victim_rank(key),
            CacheInner::Lru(lru) => lru.victim_rank(key),
        }
    }
}

/// Builder for creating cache instances with a runtime-chosen policy.
pub struct CacheBuilder {
    max_size: usize,
}

impl CacheBuilder {
    /// Creates a new cache builder with the specified capacity.
    pub fn new(max_size: usize) -> Self {
        Self { max_size }
    }

    /// Builds a cache with the specified policy.
    ///
    /// Capacity 0 follows [`CacheCore::new`](crate::policy::engine::CacheCore::new):
    /// the cache stores nothing.
    pub fn build<K, V>(self, policy: CachePolicy) -> Cache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        let inner = match policy {
            CachePolicy::Fifo => CacheInner::Fifo(FifoCache::new(self.max_size)),
            CachePolicy::Lru => CacheInner::Lru(LruCache::new(self.max_size)),
        };
        Cache { inner }
    }

    /// Builds a cache with the specified policy, rejecting zero capacity.
    pub fn try_build<K, V>(self, policy: CachePolicy) -> Result<Cache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        let inner = match policy {
            CachePolicy::Fifo => CacheInner::Fifo(FifoCache::try_new(self.max_size)?),
            CachePolicy::Lru => CacheInner::Lru(LruCache::try_new(self.max_size)?),
        };
        Ok(Cache { inner })
    }
}
