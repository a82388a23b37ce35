//! Trait contracts shared by every cache in the library.
//!
//! ## Trait Hierarchy
//!
//! ```text
//!   BoundedCache<K, V>          the seven-operation contract every policy
//!        │                      implements identically
//!        ▼
//!   VictimOrdered<K, V>         direct access to the eviction end
//!
//!   ConcurrentCache             marker for thread-safe cache handles
//! ```
//!
//! `BoundedCache` is the swap-point: code written against it runs unchanged
//! whether the policy behind it is LRU or FIFO. The two policies differ
//! only in whether a touch promotes the entry; every signature, error, and
//! size law is shared.
//!
//! ## Ordering Vocabulary
//!
//! The *front* of a cache is its least-significant end: the entry that the
//! next capacity-pressed `set` will evict. The *back* is the
//! most-significant end, where new entries always enter and where LRU
//! promotion moves touched entries. `all_keys` lists front to back.
//!
//! ## Concurrency
//!
//! The traits here take `&mut self`: individual cores are single-threaded.
//! For shared access use the `Concurrent*` facade types, which serialize
//! every operation behind one exclusive lock and are tagged with the
//! [`ConcurrentCache`] marker.

use crate::error::KeyNotFound;

/// The shared cache contract implemented identically by both policy
/// variants.
///
/// # Example
///
/// ```
/// use ordcache::policy::lru::LruCache;
/// use ordcache::traits::BoundedCache;
///
/// fn warm<C: BoundedCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.set(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.current_size(), 2);
/// ```
pub trait BoundedCache<K, V> {
    /// Returns the fixed capacity chosen at construction.
    fn max_size(&self) -> usize;

    /// Returns the live entry count.
    fn current_size(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.current_size() == 0
    }

    /// Checks if a key is resident without touching eviction order.
    fn contains(&self, key: &K) -> bool;

    /// Returns every resident key, front to back (next eviction victim
    /// first).
    ///
    /// The result is a fresh copy-out snapshot: mutation after the call
    /// cannot affect an already-returned sequence.
    fn all_keys(&self) -> Vec<K>;

    /// Returns every resident key, back to front.
    ///
    /// Element-for-element the reverse of [`all_keys`](Self::all_keys) in
    /// every reachable state.
    fn all_keys_reversed(&self) -> Vec<K>;

    /// Stores `value` under `key`, returning the previous value if the key
    /// was already resident.
    ///
    /// Never fails. A new key entering a full cache silently evicts the
    /// front entry first. An existing key is updated in place; whether the
    /// update also promotes the entry is the policy's call.
    ///
    /// # Example
    ///
    /// ```
    /// use ordcache::policy::fifo::FifoCache;
    /// use ordcache::traits::BoundedCache;
    ///
    /// let mut cache = FifoCache::new(10);
    /// assert_eq!(cache.set(1, "first"), None);
    /// assert_eq!(cache.set(1, "second"), Some("first"));
    /// ```
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up `key`, returning `None` on a miss.
    ///
    /// A hit may promote the entry to the most-significant position,
    /// depending on the policy. Use [`contains`](Self::contains) to test
    /// existence without that side effect.
    ///
    /// # Example
    ///
    /// ```
    /// use ordcache::policy::lru::LruCache;
    /// use ordcache::traits::BoundedCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// cache.set(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes `key`, returning its value.
    ///
    /// Unlike a `get` miss, deleting an absent key is a genuine error.
    ///
    /// # Example
    ///
    /// ```
    /// use ordcache::error::KeyNotFound;
    /// use ordcache::policy::lru::LruCache;
    /// use ordcache::traits::BoundedCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// cache.set(1, "value");
    ///
    /// assert_eq!(cache.delete(&1), Ok("value"));
    /// assert_eq!(cache.delete(&1), Err(KeyNotFound));
    /// ```
    fn delete(&mut self, key: &K) -> Result<V, KeyNotFound>;

    /// Removes every entry.
    fn clear(&mut self);
}

/// Direct access to the eviction end, shared by both policies.
///
/// Both LRU and FIFO evict from the front of one order list; they differ
/// only in which history put an entry there. These operations expose that
/// end without going through `set`-driven eviction.
///
/// # Example
///
/// ```
/// use ordcache::policy::fifo::FifoCache;
/// use ordcache::traits::{BoundedCache, VictimOrdered};
///
/// let mut cache = FifoCache::new(3);
/// cache.set(1, "first");
/// cache.set(2, "second");
///
/// assert_eq!(cache.peek_victim(), Some((&1, &"first")));
/// assert_eq!(cache.pop_victim(), Some((1, "first")));
/// assert_eq!(cache.victim_rank(&2), Some(0));
/// ```
pub trait VictimOrdered<K, V>: BoundedCache<K, V> {
    /// Removes and returns the front entry (next eviction victim).
    ///
    /// Returns `None` if the cache is empty.
    fn pop_victim(&mut self) -> Option<(K, V)>;

    /// Returns the front entry without removing or promoting it.
    fn peek_victim(&self) -> Option<(&K, &V)>;

    /// Returns a key's distance from the eviction end (0 = next out), or
    /// `None` if the key is not resident. O(n) scan.
    fn victim_rank(&self, key: &K) -> Option<usize>;
}

/// Marker trait identifying thread-safe cache handles.
///
/// Implemented by the `Concurrent*` facade types, whose every operation is
/// serialized behind a single exclusive lock.
pub trait ConcurrentCache: Send + Sync {}
