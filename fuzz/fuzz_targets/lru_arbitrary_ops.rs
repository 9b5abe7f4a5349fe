#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::policy::lru::{LinkedLruCache, SlotLruCache};

// Fuzz arbitrary operation sequences on both LRU backends in lockstep
//
// First byte picks the capacity; the rest is (op, key) pairs over
// set, get, peek, touch, pop_lru, contains, clear.
fuzz_target!(|data: &[u8]| {
    let Some((&cap, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(cap % 32);

    let mut linked: LinkedLruCache<u8, u32> = LinkedLruCache::new(capacity);
    let mut slot: SlotLruCache<u8, u32> = SlotLruCache::new(capacity);

    for (step, pair) in ops.chunks_exact(2).enumerate() {
        let op = pair[0] % 7;
        let key = pair[1] % 64;
        let value = step as u32;

        match op {
            0 => {
                assert_eq!(linked.set(key, value), slot.set(key, value));
                if capacity > 0 {
                    assert_eq!(linked.peek(&key), Some(&value));
                } else {
                    assert!(linked.is_empty());
                }
            },
            1 => {
                assert_eq!(linked.get(&key), slot.get(&key));
            },
            2 => {
                assert_eq!(linked.peek(&key), slot.peek(&key));
            },
            3 => {
                assert_eq!(linked.touch(&key), slot.touch(&key));
            },
            4 => {
                let popped = linked.pop_lru();
                assert_eq!(popped, slot.pop_lru());
                if let Some((k, _)) = popped {
                    assert!(!linked.contains(&k));
                }
            },
            5 => {
                assert_eq!(linked.contains(&key), slot.contains(&key));
            },
            6 => {
                linked.clear();
                slot.clear();
                assert!(linked.is_empty() && slot.is_empty());
            },
            _ => unreachable!(),
        }

        assert!(linked.len() <= capacity);
        assert_eq!(linked.len(), slot.len());
        assert!(linked.iter().eq(slot.iter()));
        assert!(linked.check_invariants().is_ok());
        assert!(slot.check_invariants().is_ok());
    }
});
