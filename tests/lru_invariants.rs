// ==============================================
// LRU BEHAVIOR TESTS (integration)
// ==============================================
//
// Eviction and recency scenarios that must hold for every recency-list
// backend, driven through the public facade and the builder.

use lrukit::builder::{Backend, Cache, CacheBuilder};
use lrukit::policy::lru::{LinkedLruCache, SlotLruCache};
use lrukit::traits::CoreCache;

const BACKENDS: [Backend; 2] = [Backend::Linked, Backend::Slot];

fn build(capacity: usize, backend: Backend) -> Cache<i32, &'static str> {
    CacheBuilder::new(capacity).backend(backend).build()
}

// ==============================================
// Scenarios
// ==============================================

mod scenarios {
    use super::*;

    #[test]
    fn third_insert_evicts_oldest() {
        for backend in BACKENDS {
            let mut cache = build(2, backend);
            cache.set(1, "one");
            cache.set(2, "two");
            cache.set(42, "forty-two");

            assert_eq!(cache.len(), 2, "{:?}", backend);
            assert_eq!(cache.get(&1), None, "{:?}", backend);
            assert_eq!(cache.get(&2), Some(&"two"), "{:?}", backend);
            assert_eq!(cache.get(&42), Some(&"forty-two"), "{:?}", backend);
        }
    }

    #[test]
    fn zero_capacity_evicts_immediately() {
        for backend in BACKENDS {
            let mut cache = build(0, backend);
            cache.set(5, "x");

            assert_eq!(cache.get(&5), None, "{:?}", backend);
            assert!(cache.is_empty(), "{:?}", backend);
            assert_eq!(cache.capacity(), 0);
        }
    }

    #[test]
    fn get_changes_eviction_order() {
        for backend in BACKENDS {
            let mut cache = build(2, backend);
            cache.set(1, "a");
            cache.set(2, "b");
            assert_eq!(cache.get(&1), Some(&"a"));
            cache.set(3, "c");

            assert_eq!(cache.get(&1), Some(&"a"), "{:?}", backend);
            assert_eq!(cache.get(&2), None, "{:?}", backend);
            assert_eq!(cache.get(&3), Some(&"c"), "{:?}", backend);
        }
    }

    #[test]
    fn negative_capacity_behaves_as_zero() {
        for backend in BACKENDS {
            let mut cache = CacheBuilder::from_signed(-3)
                .backend(backend)
                .build::<i32, &str>();
            cache.set(1, "one");
            assert_eq!(cache.get(&1), None, "{:?}", backend);
            assert_eq!(cache.capacity(), 0);
        }
    }
}

// ==============================================
// Properties
// ==============================================

mod properties {
    use super::*;

    #[test]
    fn len_never_exceeds_capacity() {
        for backend in BACKENDS {
            for capacity in 0..8 {
                let mut cache = CacheBuilder::new(capacity)
                    .backend(backend)
                    .build::<u32, u32>();
                for i in 0..64u32 {
                    cache.set(i % 13, i);
                    assert!(
                        cache.len() <= capacity,
                        "{:?} capacity {} len {}",
                        backend,
                        capacity,
                        cache.len()
                    );
                }
            }
        }
    }

    #[test]
    fn older_key_is_evicted_first() {
        for backend in BACKENDS {
            let mut cache = CacheBuilder::new(3).backend(backend).build::<u32, u32>();
            cache.set(1, 1);
            cache.set(2, 2);
            cache.set(3, 3);

            cache.set(4, 4);
            assert!(!cache.contains(&1), "{:?}", backend);
            assert!(cache.contains(&2), "{:?}", backend);

            cache.set(5, 5);
            assert!(!cache.contains(&2), "{:?}", backend);
            assert!(cache.contains(&3), "{:?}", backend);
        }
    }

    #[test]
    fn repeated_get_is_idempotent() {
        let mut once: LinkedLruCache<i32, &str> = LinkedLruCache::new(3);
        let mut thrice: LinkedLruCache<i32, &str> = LinkedLruCache::new(3);
        for cache in [&mut once, &mut thrice] {
            cache.set(1, "a");
            cache.set(2, "b");
            cache.set(3, "c");
        }

        once.get(&1);
        for _ in 0..3 {
            thrice.get(&1);
        }

        let a: Vec<_> = once.iter().map(|(k, v)| (*k, *v)).collect();
        let b: Vec<_> = thrice.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![(1, "a"), (3, "c"), (2, "b")]);
    }

    #[test]
    fn overwrite_keeps_single_entry() {
        for backend in BACKENDS {
            let mut cache = build(2, backend);
            assert_eq!(cache.set(7, "v1"), None);
            assert_eq!(cache.set(7, "v2"), Some("v1"));

            assert_eq!(cache.len(), 1, "{:?}", backend);
            assert_eq!(cache.get(&7), Some(&"v2"));

            // Only one recency slot is used, so a second key still fits.
            cache.set(8, "w");
            assert!(cache.contains(&7));
            assert!(cache.contains(&8));
        }
    }

    #[test]
    fn overwrite_promotes_key() {
        for backend in BACKENDS {
            let mut cache = build(2, backend);
            cache.set(1, "a");
            cache.set(2, "b");
            cache.set(1, "A");
            cache.set(3, "c");

            assert_eq!(cache.peek(&1), Some(&"A"), "{:?}", backend);
            assert!(!cache.contains(&2), "{:?}", backend);
        }
    }
}

// ==============================================
// Facade extras
// ==============================================

mod facade {
    use super::*;

    #[test]
    fn peek_does_not_promote() {
        let mut cache: SlotLruCache<i32, &str> = SlotLruCache::new(2);
        cache.set(1, "a");
        cache.set(2, "b");
        assert_eq!(cache.peek(&1), Some(&"a"));
        cache.set(3, "c");

        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
    }

    #[test]
    fn pop_lru_drains_in_recency_order() {
        let mut cache: LinkedLruCache<i32, i32> = LinkedLruCache::new(4);
        for i in 0..4 {
            cache.set(i, i * 10);
        }
        cache.touch(&0);

        let drained: Vec<_> = std::iter::from_fn(|| cache.pop_lru()).collect();
        assert_eq!(drained, vec![(1, 10), (2, 20), (3, 30), (0, 0)]);
        assert!(cache.is_empty());
    }

    #[test]
    fn long_churn_keeps_invariants() {
        let mut linked: LinkedLruCache<u64, u64> = LinkedLruCache::new(64);
        let mut slot: SlotLruCache<u64, u64> = SlotLruCache::new(64);

        for i in 0..10_000u64 {
            let key = (i * 7919) % 257;
            if i % 3 == 0 {
                linked.get(&key);
                slot.get(&key);
            } else {
                linked.set(key, i);
                slot.set(key, i);
            }
        }

        assert!(linked.check_invariants().is_ok());
        assert!(slot.check_invariants().is_ok());

        let a: Vec<_> = linked.iter().map(|(k, v)| (*k, *v)).collect();
        let b: Vec<_> = slot.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn core_cache_generic_dispatch() {
        fn fill<C: CoreCache<u32, u32>>(cache: &mut C, n: u32) {
            for i in 0..n {
                cache.set(i, i);
            }
        }

        let mut built = CacheBuilder::new(8).backend(Backend::Slot).build::<u32, u32>();
        let mut direct: LinkedLruCache<u32, u32> = LinkedLruCache::new(8);
        fill(&mut built, 20);
        fill(&mut direct, 20);

        assert_eq!(CoreCache::len(&built), 8);
        assert_eq!(CoreCache::len(&direct), 8);
        assert!(CoreCache::contains(&built, &19));
        assert!(!CoreCache::contains(&direct, &11));
    }

    #[test]
    fn clear_then_reuse() {
        for backend in BACKENDS {
            let mut cache = build(2, backend);
            cache.set(1, "a");
            cache.set(2, "b");
            cache.clear();

            assert!(cache.is_empty());
            assert_eq!(cache.get(&1), None);

            cache.set(3, "c");
            cache.set(4, "d");
            cache.set(5, "e");
            assert_eq!(cache.len(), 2);
            assert!(!cache.contains(&3), "{:?}", backend);
        }
    }
}
