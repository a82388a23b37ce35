use ordcache::builder::{CacheBuilder, CachePolicy};
use ordcache::traits::BoundedCache;

fn exercise(policy: CachePolicy) -> Vec<&'static str> {
    let mut cache = CacheBuilder::new(2).build::<&str, i32>(policy);
    cache.set("old", 1);
    cache.set("new", 2);
    cache.get(&"old");
    cache.set("extra", 3);
    cache.all_keys()
}

fn main() {
    // Same call sequence, same interface; only the construction argument
    // changes which key survives.
    println!("fifo keeps: {:?}", exercise(CachePolicy::Fifo));
    println!("lru keeps:  {:?}", exercise(CachePolicy::Lru));
}

// Expected output:
// fifo keeps: ["new", "extra"]
// lru keeps:  ["old", "extra"]
