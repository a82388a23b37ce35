//! Least-recently-used eviction.
//!
//! Every touch counts: a `get` hit and a `set` of an existing key both
//! promote the entry to the most-significant position, so the front of the
//! list is always the key untouched for longest. Keys never touched after
//! insertion tie-break by insertion order.
//!
//! ```text
//!   cap 3:  set a, set b, set c        front ─► a ◄──► b ◄──► c ◄─ back
//!           get a                      front ─► b ◄──► c ◄──► a ◄─ back
//!           set d (full: evict b)      front ─► c ◄──► a ◄──► d ◄─ back
//! ```
//!
//! ## Example
//!
//! ```
//! use ordcache::policy::lru::LruCache;
//! use ordcache::traits::BoundedCache;
//!
//! let mut cache: LruCache<&str, i32> = LruCache::new(2);
//! cache.set("a", 1);
//! cache.set("b", 2);
//! cache.get(&"a");
//! cache.set("c", 3); // evicts "b": "a" was touched more recently
//!
//! assert!(cache.contains(&"a"));
//! assert!(!cache.contains(&"b"));
//! ```

use crate::policy::engine::CacheCore;
#[cfg(feature = "concurrency")]
use crate::policy::engine::ConcurrentCacheCore;
use crate::policy::EvictionPolicy;

/// Marker policy: promote on every touch.
#[derive(Debug)]
pub enum Lru {}

impl EvictionPolicy for Lru {
    const PROMOTE_ON_GET: bool = true;
    const PROMOTE_ON_UPDATE: bool = true;
}

/// Cache evicting the least recently touched key first.
pub type LruCache<K, V> = CacheCore<K, V, Lru>;

/// Thread-safe LRU cache sharing one instance across clones.
#[cfg(feature = "concurrency")]
pub type ConcurrentLruCache<K, V> = ConcurrentCacheCore<K, V, Lru>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyNotFound;
    use crate::traits::{BoundedCache, VictimOrdered};

    #[test]
    fn get_promotes_to_most_significant() {
        let mut cache: LruCache<&str, i32> = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        cache.get(&"a");
        assert_eq!(cache.all_keys(), vec!["b", "c", "a"]);
        assert_eq!(cache.all_keys_reversed(), vec!["a", "c", "b"]);
    }

    #[test]
    fn update_promotes_to_most_significant() {
        let mut cache: LruCache<&str, i32> = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        assert_eq!(cache.set("a", 10), Some(1));
        assert_eq!(cache.current_size(), 3);
        assert_eq!(cache.all_keys(), vec!["b", "c", "a"]);
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn eviction_removes_least_recently_touched() {
        // cap 3: set a,b,c; get a; get b; set d => c leaves, despite being
        // the newest insertion, because a and b were touched afterward.
        let mut cache: LruCache<&str, i32> = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), Some(&2));

        cache.set("d", 4);
        assert_eq!(cache.current_size(), 3);
        assert_eq!(cache.get(&"c"), None);
        assert_eq!(cache.peek(&"a"), Some(&1));
        assert_eq!(cache.peek(&"b"), Some(&2));
        assert_eq!(cache.peek(&"d"), Some(&4));
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn untouched_keys_tie_break_by_insertion_order() {
        let mut cache: LruCache<u32, u32> = LruCache::new(3);
        cache.set(1, 1);
        cache.set(2, 2);
        cache.set(3, 3);

        // No touches: earliest inserted is the victim.
        assert_eq!(cache.peek_victim(), Some((&1, &1)));
        cache.set(4, 4);
        assert!(!cache.contains(&1));
        cache.set(5, 5);
        assert!(!cache.contains(&2));
    }

    #[test]
    fn repeated_get_is_idempotent_on_order() {
        let mut cache: LruCache<&str, i32> = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);

        assert_eq!(cache.get(&"b"), Some(&2));
        let after_first = cache.all_keys();
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.all_keys(), after_first);
    }

    #[test]
    fn victim_rank_follows_recency() {
        let mut cache: LruCache<&str, i32> = LruCache::new(3);
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);
        cache.get(&"a");

        assert_eq!(cache.victim_rank(&"b"), Some(0));
        assert_eq!(cache.victim_rank(&"c"), Some(1));
        assert_eq!(cache.victim_rank(&"a"), Some(2));
    }

    #[test]
    fn delete_missing_key_is_an_error() {
        let mut cache: LruCache<&str, i32> = LruCache::new(2);
        cache.set("a", 1);
        assert_eq!(cache.delete(&"zz"), Err(KeyNotFound));
        assert_eq!(cache.current_size(), 1);
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn concurrent_lru_promotes_on_get() {
        let cache: ConcurrentLruCache<&str, i32> = ConcurrentLruCache::new(2);
        cache.set("a", 1);
        cache.set("b", 2);

        cache.get(&"a");
        cache.set("c", 3); // evicts "b"

        assert!(cache.contains(&"a"));
        assert!(!cache.contains(&"b"));
        assert!(cache.contains(&"c"));
        assert_eq!(cache.all_keys(), vec!["a", "c"]);
    }
}
