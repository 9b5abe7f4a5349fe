//! Replays a small eviction scenario, then times a bulk insert.
//!
//! Run with: cargo run --example basic_lru

use lrukit::policy::lru::{LinkedLruCache, SlotLruCache};
use std::time::Instant;

fn main() {
    let mut cache: LinkedLruCache<u32, String> = LinkedLruCache::new(2);

    println!("get 1 on empty: {:?}", cache.get(&1));
    cache.set(1, "one".to_string());
    cache.set(2, "two".to_string());
    cache.set(42, "forty-two".to_string());

    println!("get 1: {:?}", cache.get(&1));
    println!("get 42: {:?}", cache.get(&42));

    let cap = 100usize;

    let start = Instant::now();
    let mut big: SlotLruCache<usize, String> = SlotLruCache::new(cap);
    println!("allocated slot cache in {:?}", start.elapsed());

    let start = Instant::now();
    for index in 0..cap * 2 {
        big.set(index, format!("{index:05}"));
    }
    println!("inserted {} values in {:?}", cap * 2, start.elapsed());
    println!("len after bulk insert: {}", big.len());
    println!("least recent: {:?}", big.peek_lru());
}

// Expected output (timings vary):
// get 1 on empty: None
// get 1: None
// get 42: Some("forty-two")
// allocated slot cache in ...
// inserted 200 values in ...
// len after bulk insert: 100
// least recent: Some((100, "00100"))
//
// Explanation: capacity=2, so inserting 42 evicts key 1. The bulk insert
// writes twice the capacity; only the last 100 keys remain.
