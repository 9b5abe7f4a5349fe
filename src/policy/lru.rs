//! # Least Recently Used (LRU) Cache
//!
//! A fixed-capacity key → value cache that evicts the least recently used
//! entry on overflow. The facade composes a [`KeyIndex`] with a
//! [`RecencyList`] and is generic over the list, so the same contract runs on
//! either storage strategy.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                        LruCache<K, V, L>                             │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  KeyIndex<K, L::Handle>   (FxHashMap)                        │   │
//!   │   │                                                              │   │
//!   │   │   key_1 ──────────────────┐                                  │   │
//!   │   │   key_2 ────────────┐     │                                  │   │
//!   │   │   key_3 ──────┐     │     │                                  │   │
//!   │   └───────────────┼─────┼─────┼──────────────────────────────────┘   │
//!   │                   ▼     ▼     ▼                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  L: RecencyList<Entry<K, V>>                                 │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [key_3] ◄──► [key_2] ◄──► [key_1] ◄── tail         │   │
//!   │   │   (MRU)                                       (LRU)          │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Backends
//!
//! | Alias               | List          | Storage                                  |
//! |---------------------|---------------|------------------------------------------|
//! | [`LinkedLruCache`]  | `NodeList`    | arena nodes, grows on demand             |
//! | [`SlotLruCache`]    | `SlotList`    | preallocated slots, tail slot recycled   |
//!
//! ## Operations Flow
//!
//! ```text
//!   set(D) on a full cache (capacity = 3)
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   Before:  head ──► [A] ◄──► [B] ◄──► [C] ◄── tail
//!
//!   NodeList:  push D at head, len 4 > 3, pop C from tail, unregister C
//!   SlotList:  push D into C's recycled slot, C handed back, unregister C
//!
//!   After:   head ──► [D] ◄──► [A] ◄──► [B] ◄── tail
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   get(B)
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   1. Look up B's handle in the key index: O(1)
//!   2. Move B to head: O(1)
//!
//!   After:   head ──► [B] ◄──► [D] ◄──► [A] ◄── tail
//! ```
//!
//! ## Eviction
//!
//! The trigger is `len > capacity`, checked once after each insert. A
//! `SlotList` never holds more than its slot count, so for that backend the
//! eviction already happened inside `push_front` and the displaced entry is
//! unregistered instead; the post-insert check then never fires. Either way a
//! `set` evicts at most one entry.
//!
//! A capacity of zero accepts `set` and evicts the entry again before
//! returning, so `get` always misses.
//!
//! ## Example
//!
//! ```
//! use lrukit::policy::lru::LinkedLruCache;
//!
//! let mut cache = LinkedLruCache::new(2);
//! cache.set(1, "one");
//! cache.set(2, "two");
//! cache.set(42, "forty-two");
//!
//! assert_eq!(cache.get(&1), None);
//! assert_eq!(cache.get(&42), Some(&"forty-two"));
//! ```

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;
use std::mem;

use crate::ds::{KeyIndex, NodeList, SlotList, GROWABLE_RESERVE_LIMIT};
use crate::error::InvariantError;
use crate::traits::{CoreCache, RecencyList};

#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, LruMetricsRecorder, MetricsSnapshotProvider};

/// One cached association, stored in the recency list.
///
/// The key is kept alongside the value so that evicting the tail can
/// unregister it from the key index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// LRU cache over node-linked arena storage.
pub type LinkedLruCache<K, V> = LruCache<K, V, NodeList<Entry<K, V>>>;

/// LRU cache over preallocated, index-linked slot storage.
pub type SlotLruCache<K, V> = LruCache<K, V, SlotList<Entry<K, V>>>;

/// Fixed-capacity LRU cache, generic over its recency list.
pub struct LruCache<K, V, L = NodeList<Entry<K, V>>>
where
    L: RecencyList<Entry<K, V>>,
{
    index: KeyIndex<K, L::Handle>,
    list: L,
    capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V, L> LruCache<K, V, L>
where
    K: Eq + Hash + Clone,
    L: RecencyList<Entry<K, V>>,
{
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Accepts any capacity; up-front reservation is bounded and storage grows
    /// on demand past that bound.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::SlotLruCache;
    ///
    /// let cache: SlotLruCache<u64, String> = SlotLruCache::new(100);
    /// assert_eq!(cache.capacity(), 100);
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            index: KeyIndex::with_capacity(capacity.min(GROWABLE_RESERVE_LIMIT)),
            list: L::with_capacity(capacity),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Creates a cache from a signed capacity, treating negatives as zero.
    ///
    /// ```
    /// use lrukit::policy::lru::LinkedLruCache;
    ///
    /// let cache: LinkedLruCache<u8, u8> = LinkedLruCache::with_capacity_clamped(-5);
    /// assert_eq!(cache.capacity(), 0);
    /// ```
    pub fn with_capacity_clamped(capacity: i64) -> Self {
        Self::new(clamp_capacity(capacity))
    }

    /// Returns the number of cached entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the key is cached. Does not update recency.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains(key)
    }

    /// Returns the value for `key`, promoting it to most recently used.
    ///
    /// A miss changes nothing.
    #[inline]
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let handle = match self.index.lookup(key) {
            Some(handle) => handle,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(handle);
        self.list.get(handle).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get), but returns a mutable reference.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let handle = match self.index.lookup(key) {
            Some(handle) => handle,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(handle);
        self.list.get_mut(handle).map(|entry| &mut entry.value)
    }

    /// Returns the value for `key` without touching recency order.
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        let handle = self.index.lookup(key)?;
        self.list.get(handle).map(|entry| &entry.value)
    }

    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// Overwriting an existing key replaces its value in place and returns the
    /// old one; it still occupies a single recency slot. Inserting a new key
    /// into a full cache evicts the least recently used entry.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::LinkedLruCache;
    ///
    /// let mut cache = LinkedLruCache::new(2);
    ///
    /// assert_eq!(cache.set(1, "a"), None);
    /// assert_eq!(cache.set(2, "b"), None);
    /// assert_eq!(cache.set(1, "A"), Some("a"));
    ///
    /// cache.set(3, "c"); // evicts key 2 (LRU)
    /// assert!(!cache.contains(&2));
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(handle) = self.index.lookup(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            self.list.move_to_front(handle);
            return self
                .list
                .get_mut(handle)
                .map(|entry| mem::replace(&mut entry.value, value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let (handle, displaced) = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        if let Some(evicted) = displaced {
            self.index.unregister(&evicted.key);
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }
        self.index.register(key, handle);

        if self.list.len() > self.capacity {
            self.evict_lru();
        }

        None
    }

    /// Moves an existing entry to MRU position without reading it.
    ///
    /// Returns `true` if the key was cached.
    pub fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        match self.index.lookup(key) {
            Some(handle) => {
                self.list.move_to_front(handle);
                #[cfg(feature = "metrics")]
                self.metrics.record_touch_found();
                true
            },
            None => false,
        }
    }

    /// Returns the least recently used entry without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Removes and returns the least recently used entry.
    ///
    /// # Example
    ///
    /// ```
    /// use lrukit::policy::lru::SlotLruCache;
    ///
    /// let mut cache = SlotLruCache::new(10);
    /// cache.set(1, "one");
    /// cache.set(2, "two");
    /// cache.get(&1);
    ///
    /// assert_eq!(cache.pop_lru(), Some((2, "two")));
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.take_lru()?;

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        Some(entry.into_parts())
    }

    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V, L> {
        Iter {
            list: &self.list,
            current: self.list.front_handle(),
            remaining: self.list.len(),
            _marker: PhantomData,
        }
    }

    /// Drops every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
    }

    /// Verifies that the key index and the recency list describe the same
    /// entries and that the capacity bound holds.
    pub fn check_invariants(&self) -> Result<(), InvariantError>
    where
        K: fmt::Debug,
    {
        let listed = self.list.len();
        if self.index.len() != listed {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {} entries",
                self.index.len(),
                listed
            )));
        }
        if listed > self.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                listed, self.capacity
            )));
        }

        let mut walked = 0usize;
        let mut current = self.list.front_handle();
        while let Some(handle) = current {
            walked += 1;
            if walked > listed {
                return Err(InvariantError::new(format!(
                    "list walk exceeded len {} (cycle at {:?})",
                    listed, handle
                )));
            }
            let entry = self
                .list
                .get(handle)
                .ok_or_else(|| InvariantError::new(format!("stale handle {:?} in list", handle)))?;
            match self.index.lookup(&entry.key) {
                Some(indexed) if indexed == handle => {},
                other => {
                    return Err(InvariantError::new(format!(
                        "key {:?} lives at {:?} but index points to {:?}",
                        entry.key, handle, other
                    )));
                },
            }
            current = self.list.next_handle(handle);
        }

        if walked != listed {
            return Err(InvariantError::new(format!(
                "walked {} entries but list len is {}",
                walked, listed
            )));
        }
        Ok(())
    }

    fn take_lru(&mut self) -> Option<Entry<K, V>> {
        let entry = self.list.pop_back()?;
        self.index.unregister(&entry.key);
        Some(entry)
    }

    fn evict_lru(&mut self) {
        if self.take_lru().is_some() {
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, L> LruCache<K, V, L>
where
    K: Eq + Hash + Clone,
    L: RecencyList<Entry<K, V>>,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evicted_entries: self.metrics.evicted_entries,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            clears: self.metrics.clears,
            cache_len: self.index.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, L> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V, L>
where
    K: Eq + Hash + Clone,
    L: RecencyList<Entry<K, V>>,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V, L> CoreCache<K, V> for LruCache<K, V, L>
where
    K: Eq + Hash + Clone,
    L: RecencyList<Entry<K, V>>,
{
    #[inline]
    fn set(&mut self, key: K, value: V) -> Option<V> {
        LruCache::set(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        LruCache::clear(self)
    }
}

impl<K, V, L> fmt::Debug for LruCache<K, V, L>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
    L: RecencyList<Entry<K, V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, K, V, L>(&'a LruCache<K, V, L>)
where
    L: RecencyList<Entry<K, V>>;

impl<K, V, L> fmt::Debug for DebugEntries<'_, K, V, L>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
    L: RecencyList<Entry<K, V>>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Iterator over `(&K, &V)` from most to least recently used.
pub struct Iter<'a, K, V, L>
where
    L: RecencyList<Entry<K, V>>,
{
    list: &'a L,
    current: Option<L::Handle>,
    remaining: usize,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<'a, K, V, L> Iterator for Iter<'a, K, V, L>
where
    K: 'a,
    V: 'a,
    L: RecencyList<Entry<K, V>>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.current?;
        let entry = self.list.get(handle)?;
        self.current = self.list.next_handle(handle);
        self.remaining = self.remaining.saturating_sub(1);
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Normalizes a signed capacity: negatives become zero, values beyond
/// `usize` saturate.
pub(crate) fn clamp_capacity(capacity: i64) -> usize {
    if capacity <= 0 {
        0
    } else {
        usize::try_from(capacity).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys<L>(cache: &LruCache<i32, &'static str, L>) -> Vec<i32>
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        cache.iter().map(|(k, _)| *k).collect()
    }

    // ==============================================
    // Scenarios shared by both backends
    // ==============================================

    fn evicts_oldest_on_overflow<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(2);
        cache.set(1, "one");
        cache.set(2, "two");
        cache.set(42, "forty-two");

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.get(&42), Some(&"forty-two"));
        assert_eq!(cache.peek(&2), Some(&"two"));
        cache.check_invariants().unwrap();
    }

    fn zero_capacity_always_misses<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(0);
        assert_eq!(cache.set(5, "x"), None);
        assert_eq!(cache.get(&5), None);
        assert!(cache.is_empty());
        cache.set(6, "y");
        assert!(cache.is_empty());
        cache.check_invariants().unwrap();
    }

    fn get_promotes_before_eviction<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(2);
        cache.set(1, "a");
        cache.set(2, "b");
        assert_eq!(cache.get(&1), Some(&"a"));
        cache.set(3, "c");

        assert_eq!(cache.get(&1), Some(&"a"));
        assert_eq!(cache.get(&2), None);
        assert_eq!(cache.get(&3), Some(&"c"));
        cache.check_invariants().unwrap();
    }

    fn overwrite_keeps_single_slot<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(2);
        cache.set(1, "v1");
        cache.set(2, "b");
        assert_eq!(cache.set(1, "v2"), Some("v1"));
        assert_eq!(cache.len(), 2);
        assert_eq!(keys(&cache), vec![1, 2]);

        // 1 was promoted by the overwrite, so 2 goes first.
        cache.set(3, "c");
        assert_eq!(cache.peek(&1), Some(&"v2"));
        assert!(!cache.contains(&2));
        cache.check_invariants().unwrap();
    }

    fn repeated_get_is_stable<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(3);
        cache.set(1, "a");
        cache.set(2, "b");
        cache.set(3, "c");

        cache.get(&1);
        let after_first = keys(&cache);
        cache.get(&1);
        cache.get(&1);
        assert_eq!(keys(&cache), after_first);
        assert_eq!(after_first, vec![1, 3, 2]);
    }

    fn miss_leaves_order_alone<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(3);
        cache.set(1, "a");
        cache.set(2, "b");
        let before = keys(&cache);
        assert_eq!(cache.get(&99), None);
        assert_eq!(keys(&cache), before);
    }

    fn pop_peek_touch_and_rank<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(4);
        cache.set(1, "a");
        cache.set(2, "b");
        cache.set(3, "c");

        assert_eq!(cache.peek_lru(), Some((&1, &"a")));
        assert!(cache.touch(&1));
        assert!(!cache.touch(&9));
        assert_eq!(cache.peek_lru(), Some((&2, &"b")));
        assert_eq!(cache.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 3, 2]);

        assert_eq!(cache.pop_lru(), Some((2, "b")));
        assert_eq!(cache.pop_lru(), Some((3, "c")));
        assert_eq!(cache.pop_lru(), Some((1, "a")));
        assert_eq!(cache.pop_lru(), None);
        assert!(cache.is_empty());
        cache.check_invariants().unwrap();
    }

    fn refill_after_pop_and_clear<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(2);
        cache.set(1, "a");
        cache.set(2, "b");
        cache.pop_lru();
        cache.set(3, "c");
        cache.set(4, "d");
        assert_eq!(keys(&cache), vec![4, 3]);
        cache.check_invariants().unwrap();

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&3), None);
        cache.set(5, "e");
        cache.set(6, "f");
        cache.set(7, "g");
        assert_eq!(keys(&cache), vec![7, 6]);
        cache.check_invariants().unwrap();
    }

    fn get_mut_updates_and_promotes<L>()
    where
        L: RecencyList<Entry<i32, &'static str>>,
    {
        let mut cache: LruCache<i32, &str, L> = LruCache::new(2);
        cache.set(1, "a");
        cache.set(2, "b");
        if let Some(value) = cache.get_mut(&1) {
            *value = "A";
        }
        assert_eq!(keys(&cache), vec![1, 2]);
        assert_eq!(cache.peek(&1), Some(&"A"));
        assert_eq!(cache.get_mut(&9), None);
    }

    macro_rules! backend_tests {
        ($name:ident, $list:ty) => {
            mod $name {
                use super::*;

                type List = $list;

                #[test]
                fn evicts_oldest_on_overflow() {
                    super::evicts_oldest_on_overflow::<List>();
                }

                #[test]
                fn zero_capacity_always_misses() {
                    super::zero_capacity_always_misses::<List>();
                }

                #[test]
                fn get_promotes_before_eviction() {
                    super::get_promotes_before_eviction::<List>();
                }

                #[test]
                fn overwrite_keeps_single_slot() {
                    super::overwrite_keeps_single_slot::<List>();
                }

                #[test]
                fn repeated_get_is_stable() {
                    super::repeated_get_is_stable::<List>();
                }

                #[test]
                fn miss_leaves_order_alone() {
                    super::miss_leaves_order_alone::<List>();
                }

                #[test]
                fn pop_peek_touch_and_rank() {
                    super::pop_peek_touch_and_rank::<List>();
                }

                #[test]
                fn refill_after_pop_and_clear() {
                    super::refill_after_pop_and_clear::<List>();
                }

                #[test]
                fn get_mut_updates_and_promotes() {
                    super::get_mut_updates_and_promotes::<List>();
                }
            }
        };
    }

    backend_tests!(linked, NodeList<Entry<i32, &'static str>>);
    backend_tests!(slot, SlotList<Entry<i32, &'static str>>);

    // ==============================================
    // Facade details
    // ==============================================

    #[test]
    fn clamp_capacity_normalizes_negatives() {
        assert_eq!(clamp_capacity(-1), 0);
        assert_eq!(clamp_capacity(i64::MIN), 0);
        assert_eq!(clamp_capacity(0), 0);
        assert_eq!(clamp_capacity(7), 7);
    }

    #[test]
    fn negative_capacity_cache_behaves_as_zero() {
        let mut cache: SlotLruCache<i32, i32> = SlotLruCache::with_capacity_clamped(-3);
        cache.set(1, 1);
        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.capacity(), 0);
    }

    #[test]
    fn slot_backend_unregisters_displaced_key() {
        let mut cache: SlotLruCache<i32, &str> = SlotLruCache::new(1);
        cache.set(1, "a");
        cache.set(2, "b");
        assert!(!cache.contains(&1));
        assert_eq!(cache.get(&2), Some(&"b"));
        assert_eq!(cache.len(), 1);
        cache.check_invariants().unwrap();
    }

    #[test]
    fn large_capacity_does_not_preallocate_linked_nodes() {
        let mut cache: LinkedLruCache<u64, u64> = LinkedLruCache::new(usize::MAX);
        cache.set(1, 1);
        assert_eq!(cache.get(&1), Some(&1));
    }

    #[test]
    fn slot_cache_with_max_capacity_constructs_and_works() {
        let mut cache: SlotLruCache<u8, u8> = SlotLruCache::new(usize::MAX);
        assert_eq!(cache.capacity(), usize::MAX);
        for i in 0..=255u8 {
            cache.set(i, i);
        }
        assert_eq!(cache.len(), 256);
        assert_eq!(cache.get(&0), Some(&0));
        cache.check_invariants().unwrap();
    }

    #[test]
    fn debug_lists_entries_in_recency_order() {
        let mut cache: LinkedLruCache<i32, &str> = LinkedLruCache::new(3);
        cache.set(1, "a");
        cache.set(2, "b");
        let rendered = format!("{:?}", cache);
        assert!(rendered.contains("capacity: 3"));
        assert!(rendered.contains("[(2, \"b\"), (1, \"a\")]"));
    }

    #[test]
    fn core_cache_trait_dispatch() {
        fn fill<C: CoreCache<u32, u32>>(cache: &mut C) {
            for i in 0..10 {
                cache.set(i, i * 10);
            }
        }

        let mut linked: LinkedLruCache<u32, u32> = LinkedLruCache::new(4);
        let mut slot: SlotLruCache<u32, u32> = SlotLruCache::new(4);
        fill(&mut linked);
        fill(&mut slot);

        assert_eq!(CoreCache::len(&linked), 4);
        assert_eq!(CoreCache::len(&slot), 4);
        assert_eq!(CoreCache::get(&mut linked, &9), Some(&90));
        assert_eq!(CoreCache::get(&mut slot, &5), None);
        assert_eq!(CoreCache::capacity(&slot), 4);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_track_hits_misses_and_evictions() {
        let mut cache: SlotLruCache<i32, i32> = SlotLruCache::new(2);
        cache.set(1, 1);
        cache.set(2, 2);
        cache.set(1, 10);
        cache.set(3, 3);
        cache.get(&1);
        cache.get(&2);

        let snapshot = cache.metrics_snapshot();
        assert_eq!(snapshot.insert_calls, 4);
        assert_eq!(snapshot.insert_updates, 1);
        assert_eq!(snapshot.insert_new, 3);
        assert_eq!(snapshot.evicted_entries, 1);
        assert_eq!(snapshot.get_hits, 1);
        assert_eq!(snapshot.get_misses, 1);
        assert_eq!(snapshot.cache_len, 2);
        assert_eq!(cache.snapshot(), snapshot);
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_count_zero_capacity_evictions() {
        let mut cache: LinkedLruCache<i32, i32> = LinkedLruCache::new(0);
        cache.set(1, 1);
        cache.set(2, 2);
        assert_eq!(cache.metrics_snapshot().evicted_entries, 2);
    }
}
