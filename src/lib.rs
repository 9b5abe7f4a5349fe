//! lrukit: fixed-capacity LRU caches with interchangeable recency storage.
//!
//! A cache is a [`KeyIndex`](ds::KeyIndex) (key → handle) over a
//! [`RecencyList`](traits::RecencyList) (MRU → LRU order). Two lists ship
//! with the crate:
//!
//! - [`NodeList`](ds::NodeList): nodes in a growable arena, linked by id.
//! - [`SlotList`](ds::SlotList): slots preallocated to capacity, linked by
//!   index, with the tail slot recycled on overflow.
//!
//! [`LruCache`](policy::lru::LruCache) is generic over the list; the
//! [`builder`] picks one at runtime.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut cache: SlotLruCache<u32, &str> = SlotLruCache::new(2);
//! cache.set(1, "a");
//! cache.set(2, "b");
//! cache.get(&1);
//! cache.set(3, "c");
//!
//! assert_eq!(cache.get(&2), None);
//! assert_eq!(cache.get(&1), Some(&"a"));
//! ```

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;
