//! Unified cache builder for both storage backends.
//!
//! Picks the recency-list backend at runtime and hides the list type behind a
//! single [`Cache`] wrapper.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::{Backend, CacheBuilder};
//!
//! let mut cache = CacheBuilder::new(100)
//!     .backend(Backend::Slot)
//!     .build::<u64, String>();
//! cache.set(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::fmt;
use std::hash::Hash;

use crate::ds::SLOT_PREALLOC_LIMIT;
use crate::error::ConfigError;
use crate::policy::lru::{clamp_capacity, LinkedLruCache, SlotLruCache};
use crate::traits::CoreCache;

/// Storage strategy for the recency list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Arena-allocated nodes linked by id; grows on demand.
    #[default]
    Linked,
    /// Slots preallocated up front, linked by index; tail slot recycled.
    Slot,
}

/// LRU cache wrapper that provides one API regardless of backend.
pub struct Cache<K, V> {
    inner: CacheInner<K, V>,
}

enum CacheInner<K, V> {
    Linked(LinkedLruCache<K, V>),
    Slot(SlotLruCache<K, V>),
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Insert or overwrite. Returns the previous value if the key existed.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        match &mut self.inner {
            CacheInner::Linked(lru) => lru.set(key, value),
            CacheInner::Slot(lru) => lru.set(key, value),
        }
    }

    /// Get a value by key, promoting it to most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match &mut self.inner {
            CacheInner::Linked(lru) => lru.get(key),
            CacheInner::Slot(lru) => lru.get(key),
        }
    }

    /// Get a value by key without promoting it.
    pub fn peek(&self, key: &K) -> Option<&V> {
        match &self.inner {
            CacheInner::Linked(lru) => lru.peek(key),
            CacheInner::Slot(lru) => lru.peek(key),
        }
    }

    /// Promote a key without reading it.
    pub fn touch(&mut self, key: &K) -> bool {
        match &mut self.inner {
            CacheInner::Linked(lru) => lru.touch(key),
            CacheInner::Slot(lru) => lru.touch(key),
        }
    }

    /// Remove and return the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        match &mut self.inner {
            CacheInner::Linked(lru) => lru.pop_lru(),
            CacheInner::Slot(lru) => lru.pop_lru(),
        }
    }

    /// Check if a key exists.
    pub fn contains(&self, key: &K) -> bool {
        match &self.inner {
            CacheInner::Linked(lru) => lru.contains(key),
            CacheInner::Slot(lru) => lru.contains(key),
        }
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        match &self.inner {
            CacheInner::Linked(lru) => lru.len(),
            CacheInner::Slot(lru) => lru.len(),
        }
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the maximum capacity.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            CacheInner::Linked(lru) => lru.capacity(),
            CacheInner::Slot(lru) => lru.capacity(),
        }
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        match &mut self.inner {
            CacheInner::Linked(lru) => lru.clear(),
            CacheInner::Slot(lru) => lru.clear(),
        }
    }

    /// Return the backend this cache was built with.
    pub fn backend(&self) -> Backend {
        match &self.inner {
            CacheInner::Linked(_) => Backend::Linked,
            CacheInner::Slot(_) => Backend::Slot,
        }
    }
}

impl<K, V> fmt::Debug for Cache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            CacheInner::Linked(lru) => f.debug_tuple("Linked").field(lru).finish(),
            CacheInner::Slot(lru) => f.debug_tuple("Slot").field(lru).finish(),
        }
    }
}

impl<K, V> CoreCache<K, V> for Cache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn set(&mut self, key: K, value: V) -> Option<V> {
        Cache::set(self, key, value)
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        Cache::get(self, key)
    }

    fn contains(&self, key: &K) -> bool {
        Cache::contains(self, key)
    }

    fn len(&self) -> usize {
        Cache::len(self)
    }

    fn capacity(&self) -> usize {
        Cache::capacity(self)
    }

    fn clear(&mut self) {
        Cache::clear(self)
    }
}

/// Builder for creating cache instances.
#[derive(Debug, Clone, Copy)]
pub struct CacheBuilder {
    capacity: usize,
    backend: Backend,
}

impl CacheBuilder {
    /// Largest capacity `try_build` accepts for [`Backend::Slot`]: the most
    /// slots the slot list reserves at construction. `build` accepts larger
    /// capacities, but such a cache allocates while it warms up.
    pub const MAX_PREALLOC: usize = SLOT_PREALLOC_LIMIT;

    /// Create a new cache builder with the specified capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            backend: Backend::default(),
        }
    }

    /// Create a builder from a signed capacity; negatives become zero.
    pub fn from_signed(capacity: i64) -> Self {
        Self::new(clamp_capacity(capacity))
    }

    /// Select the recency-list backend.
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Return the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Build a cache with the configured backend. Never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lrukit::builder::{Backend, CacheBuilder};
    ///
    /// let linked = CacheBuilder::new(100).build::<u64, String>();
    /// assert_eq!(linked.backend(), Backend::Linked);
    ///
    /// let slot = CacheBuilder::new(100).backend(Backend::Slot).build::<u64, String>();
    /// assert_eq!(slot.capacity(), 100);
    /// ```
    pub fn build<K, V>(self) -> Cache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        let inner = match self.backend {
            Backend::Linked => CacheInner::Linked(LinkedLruCache::new(self.capacity)),
            Backend::Slot => CacheInner::Slot(SlotLruCache::new(self.capacity)),
        };

        Cache { inner }
    }

    /// Build a cache, rejecting a slot capacity above [`Self::MAX_PREALLOC`]
    /// so that the slot backend is fully reserved once built.
    pub fn try_build<K, V>(self) -> Result<Cache<K, V>, ConfigError>
    where
        K: Eq + Hash + Clone,
    {
        if self.backend == Backend::Slot && self.capacity > Self::MAX_PREALLOC {
            return Err(ConfigError::new(format!(
                "slot backend capacity {} exceeds preallocation limit {}",
                self.capacity,
                Self::MAX_PREALLOC
            )));
        }
        Ok(self.build())
    }
}
