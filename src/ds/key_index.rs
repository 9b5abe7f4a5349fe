//! Key → handle index.
//!
//! ## Architecture
//! - Keys map to recency-list handles in an `FxHashMap<K, H>`.
//! - Handles are `Copy`; the index never owns list nodes.
//!
//! ## Core Operations
//! - `lookup`: fetch the handle for a key.
//! - `register`: bind a key to a handle, returning the replaced handle.
//! - `unregister`: drop a key's binding.
//!
//! ## Implementation Notes
//! - The index has no view of the list. Keeping the two in step is the
//!   caller's job: every node leaving the list must be unregistered in the
//!   same operation.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Hash index from key to node handle.
#[derive(Debug)]
pub struct KeyIndex<K, H> {
    map: FxHashMap<K, H>,
}

impl<K, H> KeyIndex<K, H>
where
    K: Eq + Hash,
    H: Copy,
{
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Creates an empty index with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the handle registered for `key`.
    #[inline]
    pub fn lookup(&self, key: &K) -> Option<H> {
        self.map.get(key).copied()
    }

    /// Binds `key` to `handle`, returning the previous handle if any.
    #[inline]
    pub fn register(&mut self, key: K, handle: H) -> Option<H> {
        self.map.insert(key, handle)
    }

    /// Removes the binding for `key`, returning its handle.
    #[inline]
    pub fn unregister(&mut self, key: &K) -> Option<H> {
        self.map.remove(key)
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K, H> Default for KeyIndex<K, H>
where
    K: Eq + Hash,
    H: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_index_register_lookup_unregister() {
        let mut index: KeyIndex<&str, usize> = KeyIndex::with_capacity(4);
        assert_eq!(index.register("a", 0), None);
        assert_eq!(index.register("b", 1), None);
        assert_eq!(index.lookup(&"a"), Some(0));
        assert_eq!(index.len(), 2);

        assert_eq!(index.unregister(&"a"), Some(0));
        assert_eq!(index.lookup(&"a"), None);
        assert!(!index.contains(&"a"));
        assert_eq!(index.unregister(&"a"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn key_index_register_replaces_handle() {
        let mut index = KeyIndex::new();
        index.register(7u32, 3usize);
        assert_eq!(index.register(7, 9), Some(3));
        assert_eq!(index.lookup(&7), Some(9));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn key_index_clear() {
        let mut index = KeyIndex::new();
        index.register(1u8, 'x');
        index.register(2u8, 'y');
        assert_eq!(index.len(), 2);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.lookup(&1), None);
        assert!(!index.contains(&2));
    }
}
