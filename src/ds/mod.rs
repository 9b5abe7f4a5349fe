pub mod key_index;
pub mod node_list;
pub mod slot_arena;
pub mod slot_list;

pub use key_index::KeyIndex;
pub use node_list::NodeList;
pub use slot_arena::{SlotArena, SlotId};
pub use slot_list::{SlotHandle, SlotList};

/// Upper bound on up-front reservation for growable structures.
///
/// The node list and the key index grow on demand, so a huge configured
/// capacity only reserves this many entries at construction.
pub(crate) const GROWABLE_RESERVE_LIMIT: usize = 1 << 16;

/// Upper bound on the slots a `SlotList` reserves at construction.
///
/// Capacities above this reserve the limit up front and grow in doubling
/// steps, never past the configured capacity.
pub(crate) const SLOT_PREALLOC_LIMIT: usize = 1 << 20;
