//! # Cache Trait Hierarchy
//!
//! Two seams separate the LRU facade from its storage:
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │   public contract
//!   │                                         │
//!   │  set(&mut, K, V) → Option<V>            │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len / is_empty / capacity / clear      │
//!   └────────────────────┬────────────────────┘
//!                        │ implemented by
//!                        ▼
//!   ┌─────────────────────────────────────────┐
//!   │        LruCache<K, V, L>                │   facade
//!   │   KeyIndex<K, L::Handle>  +  L          │
//!   └────────────────────┬────────────────────┘
//!                        │ L: RecencyList<Entry<K, V>>
//!          ┌─────────────┴──────────────┐
//!          ▼                            ▼
//!   ┌──────────────┐            ┌──────────────┐
//!   │  NodeList<T> │            │  SlotList<T> │
//!   │  arena nodes │            │ fixed slots  │
//!   │  grows       │            │ recycles tail│
//!   └──────────────┘            └──────────────┘
//! ```
//!
//! ## Push semantics
//!
//! [`RecencyList::push_front`] returns the new node's handle together with
//! any entry the list displaced to make room. A growable list never displaces;
//! a fixed-slot list displaces its tail once full. The facade unregisters a
//! displaced key in the same call, so the key index never holds a handle to a
//! recycled slot.
//!
//! ## Thread Safety
//!
//! Nothing here is synchronized. Even `get` reorders the recency list, so a
//! shared cache needs a single lock around the whole call (a `Mutex`, not a
//! `RwLock`).

use std::fmt::Debug;

/// Ordered storage keeping entries in most-recently-used → least-recently-used
/// order with O(1) insert-at-front, move-to-front and remove-from-back.
///
/// Handles are only guaranteed to refer to the same node while that node is
/// live. Implementations may reuse storage after a node leaves the list.
pub trait RecencyList<T> {
    /// Opaque reference to a node, valid until the node is removed.
    type Handle: Copy + Eq + Debug;

    /// Creates an empty list sized for `capacity` entries.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of live nodes.
    fn len(&self) -> usize;

    /// Returns `true` if the list holds no nodes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `value` at the front (MRU).
    ///
    /// Returns the new node's handle and the value displaced to make room,
    /// if the list had to recycle storage.
    fn push_front(&mut self, value: T) -> (Self::Handle, Option<T>);

    /// Moves the node to the front. No-op if it already is the front.
    ///
    /// Returns `false` if `handle` does not refer to a live node.
    fn move_to_front(&mut self, handle: Self::Handle) -> bool;

    /// Removes and returns the back (LRU) value.
    fn pop_back(&mut self) -> Option<T>;

    /// Returns the value behind `handle`, if live.
    fn get(&self, handle: Self::Handle) -> Option<&T>;

    /// Returns a mutable reference to the value behind `handle`, if live.
    fn get_mut(&mut self, handle: Self::Handle) -> Option<&mut T>;

    /// Returns the front (MRU) value.
    fn front(&self) -> Option<&T>;

    /// Returns the back (LRU) value.
    fn back(&self) -> Option<&T>;

    /// Returns the handle of the front (MRU) node.
    fn front_handle(&self) -> Option<Self::Handle>;

    /// Returns the handle of the node after `handle`, toward the back.
    fn next_handle(&self, handle: Self::Handle) -> Option<Self::Handle>;

    /// Removes every node.
    fn clear(&mut self);
}

/// Core cache operations.
///
/// # Example
///
/// ```
/// use lrukit::traits::CoreCache;
/// use lrukit::policy::lru::LinkedLruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.set(*key, value.clone());
///     }
/// }
///
/// let mut cache = LinkedLruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Stores `value` under `key` and makes it the most recently used entry.
    ///
    /// Returns the previous value if `key` was already cached. If the cache
    /// overflows, the least recently used entry is evicted.
    fn set(&mut self, key: K, value: V) -> Option<V>;

    /// Returns the value for `key` and promotes it to most recently used.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Returns `true` if `key` is cached. Does not change recency.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of cached entries.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is cached.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries.
    fn capacity(&self) -> usize;

    /// Removes every entry.
    fn clear(&mut self);
}
