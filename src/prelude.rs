pub use crate::builder::{Backend, Cache, CacheBuilder};
pub use crate::ds::{KeyIndex, NodeList, SlotArena, SlotHandle, SlotId, SlotList};
pub use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
pub use crate::policy::lru::{Entry, LinkedLruCache, LruCache, SlotLruCache};
pub use crate::traits::{CoreCache, RecencyList};
