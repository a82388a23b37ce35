use ordcache::policy::lru::LruCache;
use ordcache::traits::BoundedCache;

fn main() {
    let mut cache: LruCache<u32, String> = LruCache::new(2);

    cache.set(1, "alpha".to_string());
    cache.set(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value);
    }

    cache.set(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));
    println!("keys: {:?}", cache.all_keys());
}

// Expected output:
// hit 1: alpha
// contains 2? false
// keys: [1, 3]
//
// Explanation: capacity=2; after get(&1), key 1 is most recent and key 2
// is the victim. Setting key 3 evicts key 2.
