//! Generic cache engine shared by every eviction policy.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────────┐
//!   │                       CacheCore<K, V, P>                           │
//!   │                                                                    │
//!   │   ┌──────────────────────────────────────────────────────────┐     │
//!   │   │  FxHashMap<K, SlotId> (index)                            │     │
//!   │   │                                                          │     │
//!   │   │  ┌─────────┬──────────────────────────────────────┐      │     │
//!   │   │  │   Key   │  SlotId                              │      │     │
//!   │   │  ├─────────┼──────────────────────────────────────┤      │     │
//!   │   │  │  "a"    │  ────────────────────────────────┐   │      │     │
//!   │   │  │  "b"    │  ──────────────────────────┐     │   │      │     │
//!   │   │  └─────────┴────────────────────────────┼─────┼───┘      │     │
//!   │   └─────────────────────────────────────────┼─────┼──────────┘     │
//!   │                                             ▼     ▼                │
//!   │   ┌──────────────────────────────────────────────────────────┐     │
//!   │   │  OrderList<Entry<K, V>>                                  │     │
//!   │   │                                                          │     │
//!   │   │  front ──► [ "a" ] ◄──► [ "b" ] ◄── back                 │     │
//!   │   │  (next to evict)        (most recently significant)      │     │
//!   │   └──────────────────────────────────────────────────────────┘     │
//!   └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! New keys always enter at the back; eviction always removes the front.
//! The policy parameter `P` decides only whether `get` and
//! `set`-on-existing promote the touched entry to the back. Everything
//! else (index, splice mechanics, size laws) is shared.
//!
//! ## Invariants
//!
//! - A key is in the index iff its entry is in the order list, and the
//!   index maps it to exactly that entry's slot.
//! - `index.len() == order.len() == current_size() <= max_size()`.
//! - Front-to-back traversal visits every live entry once; back-to-front
//!   visits the same entries reversed.
//!
//! `check_invariants()` revalidates all of the above and is exercised by
//! the test suites after every mutation pattern.
//!
//! ## Performance
//!
//! | Operation                  | Time     |
//! |----------------------------|----------|
//! | `set` / `get` / `delete`   | O(1) avg |
//! | `pop_victim` / `peek_victim` | O(1)   |
//! | `all_keys` / `all_keys_reversed` | O(n) copy-out |
//! | `victim_rank`              | O(n)     |

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::ds::{OrderList, SlotId};
use crate::error::{ConfigError, InvariantError, KeyNotFound};
#[cfg(feature = "metrics")]
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::policy::EvictionPolicy;
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{BoundedCache, VictimOrdered};

/// One cached pair; its order links live in the list node around it.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Single-threaded cache engine: index + order list + fixed capacity.
///
/// Not thread-safe on its own; wrap in [`ConcurrentCacheCore`] (or an
/// external lock) for shared access.
pub struct CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    index: FxHashMap<K, SlotId>,
    order: OrderList<Entry<K, V>>,
    max_size: usize,
    #[cfg(feature = "metrics")]
    metrics: CacheMetrics,
    _policy: PhantomData<P>,
}

impl<K, V, P> CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    /// Creates a cache with the given capacity.
    ///
    /// A `max_size` of 0 creates a cache that stores nothing: every `set`
    /// is a no-op returning `None`. Use [`try_new`](Self::try_new) to
    /// reject that configuration at construction instead.
    pub fn new(max_size: usize) -> Self {
        CacheCore {
            index: FxHashMap::with_capacity_and_hasher(max_size, Default::default()),
            order: OrderList::with_capacity(max_size),
            max_size,
            #[cfg(feature = "metrics")]
            metrics: CacheMetrics::default(),
            _policy: PhantomData,
        }
    }

    /// Creates a cache with the given capacity, rejecting `max_size == 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use ordcache::policy::fifo::FifoCache;
    ///
    /// assert!(FifoCache::<u64, u64>::try_new(100).is_ok());
    /// let err = FifoCache::<u64, u64>::try_new(0).unwrap_err();
    /// assert!(err.to_string().contains("max size"));
    /// ```
    pub fn try_new(max_size: usize) -> Result<Self, ConfigError> {
        if max_size == 0 {
            return Err(ConfigError::new("max size must be greater than 0"));
        }
        Ok(Self::new(max_size))
    }

    /// Looks up `key` without promoting the entry, regardless of policy.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let &id = self.index.get(key)?;
        self.order.get(id).map(|entry| &entry.value)
    }

    /// Revalidates the index↔order-list agreement.
    ///
    /// Cheap enough for tests and debug assertions; not called on the hot
    /// path.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.order.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but order list holds {} entries",
                self.index.len(),
                self.order.len()
            )));
        }
        if self.order.len() > self.max_size {
            return Err(InvariantError::new(format!(
                "{} entries resident with max size {}",
                self.order.len(),
                self.max_size
            )));
        }

        let mut forward = 0usize;
        for entry in self.order.iter() {
            let id = match self.index.get(&entry.key) {
                Some(&id) => id,
                None => {
                    return Err(InvariantError::new(
                        "order list entry missing from index",
                    ));
                },
            };
            let points_back = self
                .order
                .get(id)
                .map(|indexed| indexed.key == entry.key)
                .unwrap_or(false);
            if !points_back {
                return Err(InvariantError::new(
                    "index does not point at the entry holding its key",
                ));
            }
            forward += 1;
            if forward > self.order.len() {
                return Err(InvariantError::new("cycle in order list"));
            }
        }
        if forward != self.order.len() {
            return Err(InvariantError::new(
                "forward walk did not visit every entry",
            ));
        }
        if self.order.iter_rev().count() != forward {
            return Err(InvariantError::new(
                "reverse walk did not visit every entry",
            ));
        }
        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        self.order.debug_validate_invariants();
        debug_assert_eq!(self.index.len(), self.order.len());
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    /// Returns a copy of the operation counters with current size gauges.
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            set_calls: self.metrics.set_calls,
            set_updates: self.metrics.set_updates,
            set_new: self.metrics.set_new,
            evictions: self.metrics.evictions,
            delete_calls: self.metrics.delete_calls,
            delete_found: self.metrics.delete_found,
            delete_missing: self.metrics.delete_missing,
            pop_victim_calls: self.metrics.pop_victim_calls,
            clear_calls: self.metrics.clear_calls,
            current_size: self.order.len(),
            max_size: self.max_size,
        }
    }
}

impl<K, V, P> BoundedCache<K, V> for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    #[inline]
    fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    fn current_size(&self) -> usize {
        self.order.len()
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn all_keys(&self) -> Vec<K> {
        self.order.iter().map(|entry| entry.key.clone()).collect()
    }

    fn all_keys_reversed(&self) -> Vec<K> {
        self.order
            .iter_rev()
            .map(|entry| entry.key.clone())
            .collect()
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.set_calls += 1;
        }

        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            {
                self.metrics.set_updates += 1;
            }

            let previous = self
                .order
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
            if P::PROMOTE_ON_UPDATE {
                self.order.move_to_back(id);
            }

            #[cfg(debug_assertions)]
            self.debug_validate();

            return previous;
        }

        // For zero capacity, never insert anything.
        if self.max_size == 0 {
            return None;
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.set_new += 1;
        }

        if self.index.len() == self.max_size {
            if let Some(evicted) = self.order.pop_front() {
                self.index.remove(&evicted.key);
                #[cfg(feature = "metrics")]
                {
                    self.metrics.evictions += 1;
                }
            }
        }

        let id = self.order.push_back(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        #[cfg(debug_assertions)]
        self.debug_validate();

        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.get_calls += 1;
        }

        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.get_misses += 1;
                }
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        {
            self.metrics.get_hits += 1;
        }

        if P::PROMOTE_ON_GET {
            // No-op when the entry is already at the back.
            self.order.move_to_back(id);
        }

        self.order.get(id).map(|entry| &entry.value)
    }

    fn delete(&mut self, key: &K) -> Result<V, KeyNotFound> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.delete_calls += 1;
        }

        let id = match self.index.remove(key) {
            Some(id) => id,
            None => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.delete_missing += 1;
                }
                return Err(KeyNotFound);
            },
        };

        #[cfg(feature = "metrics")]
        {
            self.metrics.delete_found += 1;
        }

        let removed = self.order.remove(id).map(|entry| entry.value);

        #[cfg(debug_assertions)]
        self.debug_validate();

        removed.ok_or(KeyNotFound)
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        {
            self.metrics.clear_calls += 1;
        }
        self.order.clear();
        self.index.clear();
    }
}

impl<K, V, P> VictimOrdered<K, V> for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    fn pop_victim(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.pop_victim_calls += 1;
        }

        let entry = self.order.pop_front()?;
        self.index.remove(&entry.key);

        #[cfg(debug_assertions)]
        self.debug_validate();

        Some((entry.key, entry.value))
    }

    fn peek_victim(&self) -> Option<(&K, &V)> {
        self.order.front().map(|entry| (&entry.key, &entry.value))
    }

    fn victim_rank(&self, key: &K) -> Option<usize> {
        if !self.index.contains_key(key) {
            return None;
        }
        self.order.iter().position(|entry| entry.key == *key)
    }
}

impl<K, V, P> fmt::Debug for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheCore")
            .field("current_size", &self.order.len())
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

impl<K, V, P> Default for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    /// Creates a cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

impl<K, V, P> Extend<(K, V)> for CacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Thread-safe cache facade.
///
/// Wraps a [`CacheCore`] storing `Arc<V>` values behind a single
/// `parking_lot::Mutex`, so every public operation (readers included) is
/// one bounded critical section. Readers must exclude writers here: the
/// key listings walk live links, and `get` may reorder them. Values come
/// back as `Arc<V>` handle clones because references cannot outlive the
/// lock guard.
///
/// Cloning the facade clones the handle, not the cache: all clones observe
/// one shared instance.
///
/// # Example
///
/// ```
/// use ordcache::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(100);
/// cache.set(1, "first".to_string());
///
/// let value = cache.get(&1).unwrap();
/// assert_eq!(*value, "first");
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentCacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    inner: Arc<Mutex<CacheCore<K, Arc<V>, P>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V, P> ConcurrentCacheCore<K, V, P>
where
    K: Eq + Hash + Clone + Send,
    V: Send + Sync,
    P: EvictionPolicy,
{
    /// Creates a thread-safe cache with the given capacity.
    ///
    /// Capacity 0 behaves as in [`CacheCore::new`]: the cache stores
    /// nothing.
    pub fn new(max_size: usize) -> Self {
        ConcurrentCacheCore {
            inner: Arc::new(Mutex::new(CacheCore::new(max_size))),
        }
    }

    /// Creates a thread-safe cache, rejecting `max_size == 0`.
    pub fn try_new(max_size: usize) -> Result<Self, ConfigError> {
        Ok(ConcurrentCacheCore {
            inner: Arc::new(Mutex::new(CacheCore::try_new(max_size)?)),
        })
    }

    /// Returns the fixed capacity.
    pub fn max_size(&self) -> usize {
        let cache = self.inner.lock();
        cache.max_size()
    }

    /// Returns the live entry count.
    pub fn current_size(&self) -> usize {
        let cache = self.inner.lock();
        cache.current_size()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        let cache = self.inner.lock();
        cache.is_empty()
    }

    /// Checks if a key is resident without touching eviction order.
    pub fn contains(&self, key: &K) -> bool {
        let cache = self.inner.lock();
        cache.contains(key)
    }

    /// Returns a front-to-back snapshot of the resident keys.
    ///
    /// The walk holds the lock, so the snapshot is consistent; mutation
    /// after the call cannot affect it.
    pub fn all_keys(&self) -> Vec<K> {
        let cache = self.inner.lock();
        cache.all_keys()
    }

    /// Returns a back-to-front snapshot of the resident keys.
    pub fn all_keys_reversed(&self) -> Vec<K> {
        let cache = self.inner.lock();
        cache.all_keys_reversed()
    }

    /// Stores `value` under `key`, wrapping it in `Arc` internally.
    ///
    /// Returns the previous value handle if the key was resident.
    pub fn set(&self, key: K, value: V) -> Option<Arc<V>> {
        let mut cache = self.inner.lock();
        cache.set(key, Arc::new(value))
    }

    /// Stores a pre-wrapped `Arc<V>` under `key`.
    pub fn set_arc(&self, key: K, value: Arc<V>) -> Option<Arc<V>> {
        let mut cache = self.inner.lock();
        cache.set(key, value)
    }

    /// Looks up `key`, applying the policy's promotion on a hit.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut cache = self.inner.lock();
        cache.get(key).map(Arc::clone)
    }

    /// Looks up `key` without promoting the entry.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let cache = self.inner.lock();
        cache.peek(key).map(Arc::clone)
    }

    /// Removes `key`, returning its value handle.
    pub fn delete(&self, key: &K) -> Result<Arc<V>, KeyNotFound> {
        let mut cache = self.inner.lock();
        cache.delete(key)
    }

    /// Removes and returns the front entry (next eviction victim).
    pub fn pop_victim(&self) -> Option<(K, Arc<V>)> {
        let mut cache = self.inner.lock();
        cache.pop_victim()
    }

    /// Returns the front entry as owned handles, without removing it.
    pub fn peek_victim(&self) -> Option<(K, Arc<V>)> {
        let cache = self.inner.lock();
        cache
            .peek_victim()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
    }

    /// Returns a key's distance from the eviction end (0 = next out).
    pub fn victim_rank(&self, key: &K) -> Option<usize> {
        let cache = self.inner.lock();
        cache.victim_rank(key)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut cache = self.inner.lock();
        cache.clear();
    }

    /// Revalidates the index↔order-list agreement under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cache = self.inner.lock();
        cache.check_invariants()
    }

    /// Returns a copy of the operation counters with current size gauges.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        let cache = self.inner.lock();
        cache.metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V, P> Clone for ConcurrentCacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    fn clone(&self) -> Self {
        ConcurrentCacheCore {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V, P> fmt::Debug for ConcurrentCacheCore<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentCacheCore")
            .field("current_size", &cache.current_size())
            .field("max_size", &cache.max_size())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V, P> Default for ConcurrentCacheCore<K, V, P>
where
    K: Eq + Hash + Clone + Send,
    V: Send + Sync,
    P: EvictionPolicy,
{
    /// Creates a thread-safe cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(feature = "concurrency")]
impl<K, V, P> ConcurrentCache for ConcurrentCacheCore<K, V, P>
where
    K: Eq + Hash + Clone + Send,
    V: Send + Sync,
    P: EvictionPolicy + Send + Sync,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Fifo, Lru};

    #[test]
    fn set_and_get_roundtrip() {
        let mut cache: CacheCore<&str, i32, Lru> = CacheCore::new(4);
        assert_eq!(cache.set("a", 1), None);
        assert_eq!(cache.set("b", 2), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"missing"), None);
        assert_eq!(cache.current_size(), 2);
        assert_eq!(cache.max_size(), 4);
    }

    #[test]
    fn set_existing_returns_previous_and_keeps_size() {
        let mut cache: CacheCore<&str, i32, Fifo> = CacheCore::new(2);
        cache.set("a", 1);
        assert_eq!(cache.set("a", 10), Some(1));
        assert_eq!(cache.current_size(), 1);
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn distinct_keys_within_capacity_all_resident() {
        let mut cache: CacheCore<u32, u32, Lru> = CacheCore::new(8);
        for i in 0..8 {
            cache.set(i, i * 10);
        }
        assert_eq!(cache.current_size(), 8);
        for i in 0..8 {
            assert!(cache.contains(&i));
        }
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn eviction_keeps_size_at_capacity() {
        let mut cache: CacheCore<u32, u32, Fifo> = CacheCore::new(3);
        for i in 0..10 {
            cache.set(i, i);
            assert!(cache.current_size() <= 3);
        }
        assert_eq!(cache.current_size(), 3);
        assert_eq!(cache.all_keys(), vec![7, 8, 9]);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut cache: CacheCore<&str, i32, Lru> = CacheCore::new(0);
        assert_eq!(cache.set("a", 1), None);
        assert_eq!(cache.set("a", 2), None);
        assert_eq!(cache.current_size(), 0);
        assert_eq!(cache.get(&"a"), None);
        assert!(cache.all_keys().is_empty());
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn try_new_rejects_zero_capacity() {
        assert!(CacheCore::<u32, u32, Lru>::try_new(0).is_err());
        assert!(CacheCore::<u32, u32, Fifo>::try_new(1).is_ok());
    }

    #[test]
    fn delete_returns_value_and_errors_on_missing() {
        let mut cache: CacheCore<&str, i32, Lru> = CacheCore::new(4);
        cache.set("a", 1);
        cache.set("b", 2);

        assert_eq!(cache.delete(&"a"), Ok(1));
        assert_eq!(cache.current_size(), 1);
        assert_eq!(cache.delete(&"a"), Err(KeyNotFound));
        assert_eq!(cache.current_size(), 1);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn all_keys_reversed_mirrors_all_keys() {
        let mut cache: CacheCore<u32, u32, Lru> = CacheCore::new(5);
        for i in 0..5 {
            cache.set(i, i);
        }
        cache.get(&2);
        cache.delete(&0).ok();
        cache.set(9, 9);

        let mut reversed = cache.all_keys_reversed();
        reversed.reverse();
        assert_eq!(cache.all_keys(), reversed);
    }

    #[test]
    fn peek_never_promotes() {
        let mut cache: CacheCore<&str, i32, Lru> = CacheCore::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.peek(&"a"), Some(&1));
        assert_eq!(cache.all_keys(), vec!["a", "b"]);
    }

    #[test]
    fn victim_ops_expose_front() {
        let mut cache: CacheCore<&str, i32, Fifo> = CacheCore::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        assert_eq!(cache.peek_victim(), Some((&"a", &1)));
        assert_eq!(cache.victim_rank(&"a"), Some(0));
        assert_eq!(cache.victim_rank(&"c"), Some(2));
        assert_eq!(cache.victim_rank(&"zz"), None);

        assert_eq!(cache.pop_victim(), Some(("a", 1)));
        assert_eq!(cache.current_size(), 2);
        assert_eq!(cache.victim_rank(&"b"), Some(0));
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn clear_then_reuse() {
        let mut cache: CacheCore<u32, u32, Lru> = CacheCore::new(2);
        cache.set(1, 1);
        cache.set(2, 2);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.all_keys().is_empty());

        cache.set(3, 3);
        assert_eq!(cache.all_keys(), vec![3]);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn extend_applies_set_semantics() {
        let mut cache: CacheCore<u32, u32, Fifo> = CacheCore::new(2);
        cache.extend(vec![(1, 10), (2, 20), (3, 30)]);
        assert_eq!(cache.current_size(), 2);
        assert_eq!(cache.all_keys(), vec![2, 3]);
    }

    #[test]
    fn default_capacity_is_sixteen() {
        let cache: CacheCore<u32, u32, Lru> = CacheCore::default();
        assert_eq!(cache.max_size(), 16);
    }

    #[test]
    fn debug_reports_sizes() {
        let mut cache: CacheCore<u32, u32, Lru> = CacheCore::new(4);
        cache.set(1, 1);
        let dbg = format!("{:?}", cache);
        assert!(dbg.contains("current_size"));
        assert!(dbg.contains("max_size"));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_count_operations() {
        let mut cache: CacheCore<u32, u32, Lru> = CacheCore::new(2);
        cache.set(1, 1);
        cache.set(2, 2);
        cache.set(1, 10);
        cache.set(3, 3); // evicts
        cache.get(&3);
        cache.get(&99);
        cache.delete(&3).ok();
        cache.delete(&3).ok();

        let snapshot = cache.metrics_snapshot();
        assert_eq!(snapshot.set_calls, 4);
        assert_eq!(snapshot.set_new, 3);
        assert_eq!(snapshot.set_updates, 1);
        assert_eq!(snapshot.evictions, 1);
        assert_eq!(snapshot.get_hits, 1);
        assert_eq!(snapshot.get_misses, 1);
        assert_eq!(snapshot.delete_found, 1);
        assert_eq!(snapshot.delete_missing, 1);
        assert_eq!(snapshot.current_size, 1);
        assert_eq!(snapshot.max_size, 2);
    }

    #[cfg(feature = "concurrency")]
    mod concurrent {
        use super::*;

        #[test]
        fn facade_roundtrip() {
            let cache: ConcurrentCacheCore<u32, String, Lru> = ConcurrentCacheCore::new(4);
            assert!(cache.set(1, "one".to_string()).is_none());
            let previous = cache.set(1, "uno".to_string()).unwrap();
            assert_eq!(*previous, "one");

            let value = cache.get(&1).unwrap();
            assert_eq!(*value, "uno");
            assert_eq!(cache.current_size(), 1);
            assert!(cache.contains(&1));
        }

        #[test]
        fn facade_set_arc_shares_value() {
            let cache: ConcurrentCacheCore<u32, String, Fifo> = ConcurrentCacheCore::new(4);
            let shared = Arc::new("shared".to_string());
            cache.set_arc(1, Arc::clone(&shared));

            let fetched = cache.get(&1).unwrap();
            assert!(Arc::ptr_eq(&shared, &fetched));
        }

        #[test]
        fn facade_delete_and_victims() {
            let cache: ConcurrentCacheCore<u32, u32, Fifo> = ConcurrentCacheCore::new(3);
            cache.set(1, 10);
            cache.set(2, 20);
            cache.set(3, 30);

            assert_eq!(cache.peek_victim().map(|(k, _)| k), Some(1));
            assert_eq!(cache.victim_rank(&3), Some(2));
            assert_eq!(*cache.delete(&2).unwrap(), 20);
            assert_eq!(cache.delete(&2), Err(KeyNotFound));

            let (key, value) = cache.pop_victim().unwrap();
            assert_eq!((key, *value), (1, 10));
            assert!(cache.check_invariants().is_ok());
        }

        #[test]
        fn facade_clones_share_one_cache() {
            let cache: ConcurrentCacheCore<u32, u32, Lru> = ConcurrentCacheCore::new(4);
            let handle = cache.clone();
            handle.set(1, 1);
            assert_eq!(cache.current_size(), 1);
            assert!(cache.get(&1).is_some());
        }
    }
}
