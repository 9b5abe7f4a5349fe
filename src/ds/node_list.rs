//! Growable recency list whose nodes live in a [`SlotArena`].
//!
//! The arena is the only owner of the nodes. A node names its neighbours by
//! [`SlotId`], never by reference, so there is no ownership cycle to manage.
//! Because `SlotId`s are generation-checked, an id held past `pop_back` or
//! `clear` is rejected by `get`/`move_to_front` even after its cell has been
//! reused.
//!
//! ```text
//!   head (MRU)                                   tail (LRU)
//!      │                                            │
//!      ▼                                            ▼
//!   ┌──────┐  next   ┌──────┐  next   ┌──────┐
//!   │  C   │ ──────► │  B   │ ──────► │  A   │
//!   │      │ ◄────── │      │ ◄────── │      │
//!   └──────┘  prev   └──────┘  prev   └──────┘
//! ```
//!
//! `push_front` never evicts; whoever owns the list decides when to
//! `pop_back`. All operations except iteration are O(1).

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::ds::GROWABLE_RESERVE_LIMIT;
use crate::traits::RecencyList;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked list over arena-owned nodes.
#[derive(Debug)]
pub struct NodeList<T> {
    nodes: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> NodeList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` nodes before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `id` names a node currently in the list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.nodes.contains(id)
    }

    /// Most recently used value.
    pub fn front(&self) -> Option<&T> {
        self.get(self.head?)
    }

    /// Least recently used value.
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail?)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.nodes.get(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Iterates values from front (MRU) to back (LRU).
    pub fn iter(&self) -> NodeListIter<'_, T> {
        NodeListIter {
            list: self,
            next: self.head,
        }
    }

    /// Adds `value` as the new front and returns its id.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.nodes.insert(Node {
            value,
            prev: None,
            next: None,
        });
        self.link_front(id);
        id
    }

    /// Removes the back node and returns its value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.unlink(id);
        self.nodes.remove(id).map(|node| node.value)
    }

    /// Makes `id` the front node. Returns `false` for ids not in the list.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.nodes.contains(id) {
            return false;
        }
        if self.head != Some(id) {
            self.unlink(id);
            self.link_front(id);
        }
        true
    }

    /// Drops all nodes; ids issued before the clear stay invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    fn next_of(&self, id: SlotId) -> Option<SlotId> {
        self.nodes.get(id)?.next
    }

    fn set_prev(&mut self, id: Option<SlotId>, prev: Option<SlotId>) {
        match id.and_then(|id| self.nodes.get_mut(id)) {
            Some(node) => node.prev = prev,
            None => self.tail = prev,
        }
    }

    fn set_next(&mut self, id: Option<SlotId>, next: Option<SlotId>) {
        match id.and_then(|id| self.nodes.get_mut(id)) {
            Some(node) => node.next = next,
            None => self.head = next,
        }
    }

    // Splices `id` out, leaving the node itself with no neighbours.
    fn unlink(&mut self, id: SlotId) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let (prev, next) = (node.prev.take(), node.next.take());
        self.set_next(prev, next);
        self.set_prev(next, prev);
    }

    // `id` must be detached.
    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.nodes.get_mut(id) {
            node.prev = None;
            node.next = old_head;
        }
        self.set_prev(old_head, Some(id));
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.head.is_none(), self.tail.is_none());

        let mut walked = 0usize;
        let mut expected_prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let node = self.nodes.get(id).expect("linked id must be live");
            assert_eq!(node.prev, expected_prev, "back-link broken at {:?}", id);
            walked += 1;
            assert!(walked <= self.len(), "cycle through {:?}", id);
            expected_prev = Some(id);
            cursor = node.next;
        }
        assert_eq!(self.tail, expected_prev);
        assert_eq!(walked, self.len());
    }
}

/// Iterator over a [`NodeList`] from front (MRU) to back (LRU).
pub struct NodeListIter<'a, T> {
    list: &'a NodeList<T>,
    next: Option<SlotId>,
}

impl<'a, T> Iterator for NodeListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.list.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}

impl<T> Default for NodeList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecencyList<T> for NodeList<T> {
    type Handle = SlotId;

    fn with_capacity(capacity: usize) -> Self {
        NodeList::with_capacity(capacity.min(GROWABLE_RESERVE_LIMIT))
    }

    #[inline]
    fn len(&self) -> usize {
        NodeList::len(self)
    }

    #[inline]
    fn push_front(&mut self, value: T) -> (SlotId, Option<T>) {
        (NodeList::push_front(self, value), None)
    }

    #[inline]
    fn move_to_front(&mut self, handle: SlotId) -> bool {
        NodeList::move_to_front(self, handle)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        NodeList::pop_back(self)
    }

    #[inline]
    fn get(&self, handle: SlotId) -> Option<&T> {
        NodeList::get(self, handle)
    }

    #[inline]
    fn get_mut(&mut self, handle: SlotId) -> Option<&mut T> {
        NodeList::get_mut(self, handle)
    }

    fn front(&self) -> Option<&T> {
        NodeList::front(self)
    }

    fn back(&self) -> Option<&T> {
        NodeList::back(self)
    }

    fn front_handle(&self) -> Option<SlotId> {
        self.head
    }

    fn next_handle(&self, handle: SlotId) -> Option<SlotId> {
        self.next_of(handle)
    }

    fn clear(&mut self) {
        NodeList::clear(self)
    }
}
