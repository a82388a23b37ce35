use ordcache::policy::fifo::FifoCache;
use ordcache::traits::BoundedCache;

fn main() {
    let mut cache: FifoCache<u32, String> = FifoCache::new(2);

    cache.set(1, "alpha".to_string());
    cache.set(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value);
    }

    cache.set(3, "gamma".to_string());

    println!("contains 1? {}", cache.contains(&1));
    println!("keys: {:?}", cache.all_keys());
}

// Expected output:
// hit 1: alpha
// contains 1? false
// keys: [2, 3]
//
// Explanation: capacity=2; the read does not reorder anything, so key 1 is
// still the oldest insertion and setting key 3 evicts it.
