//! Example demonstrating the CacheBuilder API.
//!
//! Run with: cargo run --example basic_builder

use lrukit::builder::{Backend, CacheBuilder};

fn main() {
    println!("=== CacheBuilder Examples ===\n");

    for (n, backend) in [Backend::Linked, Backend::Slot].into_iter().enumerate() {
        println!("{}. {:?} backend", n + 1, backend);
        let mut cache = CacheBuilder::new(3).backend(backend).build::<u64, String>();

        cache.set(1, "one".to_string());
        cache.set(2, "two".to_string());
        cache.set(3, "three".to_string());

        // Access key 1 to make it MRU
        cache.get(&1);

        // Insert key 4, evicts LRU (key 2)
        cache.set(4, "four".to_string());

        println!("   contains 1? {} (was accessed)", cache.contains(&1));
        println!("   contains 2? {} (evicted as LRU)", cache.contains(&2));
        println!("   contains 4? {} (just inserted)", cache.contains(&4));
        println!();
    }

    println!("3. Common Operations");
    let mut cache = CacheBuilder::from_signed(10).build::<u64, String>();

    cache.set(1, "original".to_string());
    let old = cache.set(1, "updated".to_string());
    println!("   set returned previous: {:?}", old);

    if let Some(value) = cache.peek(&1) {
        println!("   peek(&1): {}", value);
    }

    println!(
        "   len: {}, capacity: {}, is_empty: {}",
        cache.len(),
        cache.capacity(),
        cache.is_empty()
    );

    cache.clear();
    println!("   after clear - is_empty: {}", cache.is_empty());
    println!();

    println!("4. Validation");
    match CacheBuilder::new(usize::MAX)
        .backend(Backend::Slot)
        .try_build::<u64, u64>()
    {
        Ok(_) => println!("   built"),
        Err(err) => println!("   rejected: {}", err),
    }
}

// Expected output:
// === CacheBuilder Examples ===
//
// 1. Linked backend
//    contains 1? true (was accessed)
//    contains 2? false (evicted as LRU)
//    contains 4? true (just inserted)
//
// 2. Slot backend
//    contains 1? true (was accessed)
//    contains 2? false (evicted as LRU)
//    contains 4? true (just inserted)
//
// 3. Common Operations
//    set returned previous: Some("original")
//    peek(&1): updated
//    len: 1, capacity: 10, is_empty: false
//    after clear - is_empty: true
//
// 4. Validation
//    rejected: slot backend capacity ... exceeds preallocation limit 1048576
