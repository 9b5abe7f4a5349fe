//! Index-linked recency list over a preallocated slot vector.
//!
//! Storage is reserved up front for a fixed number of slots (huge capacities
//! reserve `SLOT_PREALLOC_LIMIT` and grow toward the rest while filling). Links
//! are plain slot indices rather than references. Once every slot is filled, a
//! new `push_front` recycles the tail slot in place: the tail's entry is
//! displaced and handed back to the caller, and the slot becomes the new head.
//! After warm-up the list never allocates.
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Slot<T>>, capacity = 4)
//!   ┌──────┬────────────────────────────────────────────────┐
//!   │ idx  │ Slot { value, prev, next, generation }         │
//!   ├──────┼────────────────────────────────────────────────┤
//!   │  0   │ { Some(A), prev: Some(2), next: None,    g0 }  │ ◄── tail
//!   │  1   │ { Some(B), prev: None,    next: Some(2), g3 }  │ ◄── head
//!   │  2   │ { Some(C), prev: Some(1), next: Some(0), g1 }  │
//!   │  3   │ { None,    prev: None,    next: None,    g2 }  │ ◄── free
//!   └──────┴────────────────────────────────────────────────┘
//! ```
//!
//! ## Handle generations
//!
//! A slot index outlives the entry stored in it. Every time a slot is vacated
//! or recycled its generation is bumped, and [`SlotHandle`] carries the
//! generation it was issued with, so a handle to an evicted entry never
//! resolves to the slot's new occupant.
//!
//! ## Performance
//! - `push_front`: O(1), allocation-free after warm-up
//! - `move_to_front` / `pop_back`: O(1)

use crate::ds::SLOT_PREALLOC_LIMIT;
use crate::traits::RecencyList;

/// Handle to a live slot: index plus the generation it was issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotHandle {
    index: usize,
    generation: u32,
}

impl SlotHandle {
    /// Returns the slot index.
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the generation this handle was issued with.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
    generation: u32,
}

/// Fixed-capacity doubly linked list whose links are slot indices.
#[derive(Debug)]
pub struct SlotList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    capacity: usize,
}

impl<T> SlotList<T> {
    /// Creates an empty list that will hold at most `capacity` entries.
    ///
    /// Up to `SLOT_PREALLOC_LIMIT` slots are reserved immediately; larger
    /// lists grow toward `capacity` as they fill. A zero capacity keeps a
    /// single slot so that `push_front` always has somewhere to go.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity.min(SLOT_PREALLOC_LIMIT)),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            capacity,
        }
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots this list will ever use.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if every slot holds an entry.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Returns `true` if `handle` refers to a live entry.
    pub fn contains(&self, handle: SlotHandle) -> bool {
        self.slot(handle).is_some()
    }

    /// Returns the value behind `handle`, if it is still live.
    pub fn get(&self, handle: SlotHandle) -> Option<&T> {
        self.slot(handle).and_then(|slot| slot.value.as_ref())
    }

    /// Returns a mutable reference to the value behind `handle`.
    pub fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.value.as_mut()
    }

    /// Returns the front (MRU) value.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|idx| self.slots[idx].value.as_ref())
    }

    /// Returns the back (LRU) value.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|idx| self.slots[idx].value.as_ref())
    }

    /// Returns the handle of the front (MRU) slot.
    pub fn front_handle(&self) -> Option<SlotHandle> {
        self.head.map(|idx| self.handle_at(idx))
    }

    /// Returns the handle of the back (LRU) slot.
    pub fn back_handle(&self) -> Option<SlotHandle> {
        self.tail.map(|idx| self.handle_at(idx))
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> SlotListIter<'_, T> {
        SlotListIter {
            list: self,
            current: self.head,
        }
    }

    /// Inserts `value` at the front.
    ///
    /// While slots remain, the value takes a fresh (or previously vacated)
    /// slot. Once full, the tail slot is recycled: its value is returned as
    /// the second element and the slot is relinked as the new head.
    pub fn push_front(&mut self, value: T) -> (SlotHandle, Option<T>) {
        let (idx, displaced) = if let Some(idx) = self.free.pop() {
            self.slots[idx].value = Some(value);
            (idx, None)
        } else if self.slots.len() < self.capacity {
            self.grow_for_append();
            self.slots.push(Slot {
                value: Some(value),
                prev: None,
                next: None,
                generation: 0,
            });
            (self.slots.len() - 1, None)
        } else {
            // Full: the tail slot becomes the new head.
            let Some(idx) = self.tail else {
                unreachable!("full slot list has a tail");
            };
            self.unlink(idx);
            let slot = &mut self.slots[idx];
            slot.generation = slot.generation.wrapping_add(1);
            let displaced = slot.value.replace(value);
            self.len -= 1;
            (idx, displaced)
        };

        self.link_front(idx);
        self.len += 1;
        (self.handle_at(idx), displaced)
    }

    /// Moves the entry behind `handle` to the front.
    ///
    /// Returns `false` if the handle is stale.
    pub fn move_to_front(&mut self, handle: SlotHandle) -> bool {
        if !self.contains(handle) {
            return false;
        }
        if self.head == Some(handle.index) {
            return true;
        }
        self.unlink(handle.index);
        self.link_front(handle.index);
        true
    }

    /// Removes and returns the back value, vacating its slot for reuse.
    pub fn pop_back(&mut self) -> Option<T> {
        let idx = self.tail?;
        self.unlink(idx);
        let slot = &mut self.slots[idx];
        slot.generation = slot.generation.wrapping_add(1);
        let value = slot.value.take();
        self.free.push(idx);
        self.len -= 1;
        value
    }

    /// Drops every entry while keeping the reserved storage.
    ///
    /// Slot generations survive the clear, so handles issued before it stay
    /// stale.
    pub fn clear(&mut self) {
        self.free.clear();
        for (idx, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            slot.prev = None;
            slot.next = None;
            self.free.push(idx);
        }
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // Doubles the reservation without passing `capacity`.
    fn grow_for_append(&mut self) {
        let used = self.slots.len();
        if used < self.slots.capacity() {
            return;
        }
        let additional = used.clamp(1, self.capacity - used);
        self.slots.reserve_exact(additional);
    }

    fn slot(&self, handle: SlotHandle) -> Option<&Slot<T>> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation && slot.value.is_some())
    }

    fn handle_at(&self, idx: usize) -> SlotHandle {
        SlotHandle {
            index: idx,
            generation: self.slots[idx].generation,
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let slot = &self.slots[idx];
            (slot.prev, slot.next)
        };

        match prev {
            Some(prev_idx) => self.slots[prev_idx].next = next,
            None => self.head = next,
        }
        match next {
            Some(next_idx) => self.slots[next_idx].prev = prev,
            None => self.tail = prev,
        }

        let slot = &mut self.slots[idx];
        slot.prev = None;
        slot.next = None;
    }

    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let slot = &mut self.slots[idx];
            slot.prev = None;
            slot.next = old_head;
        }
        match old_head {
            Some(head_idx) => self.slots[head_idx].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.len <= self.capacity);
        assert!(self.slots.len() <= self.capacity);
        assert_eq!(self.len + self.free.len(), self.slots.len());

        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut seen = vec![false; self.slots.len()];
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(idx) = current {
            assert!(!seen[idx], "slot {} visited twice", idx);
            seen[idx] = true;
            let slot = &self.slots[idx];
            assert!(slot.value.is_some(), "linked slot {} is vacant", idx);
            assert_eq!(slot.prev, prev);
            if slot.next.is_none() {
                assert_eq!(self.tail, Some(idx));
            }
            prev = Some(idx);
            current = slot.next;
            count += 1;
            assert!(count <= self.len);
        }
        assert_eq!(count, self.len);

        for &idx in &self.free {
            assert!(!seen[idx], "free slot {} is linked", idx);
            assert!(self.slots[idx].value.is_none());
        }
    }
}

/// Iterator over a [`SlotList`] from front (MRU) to back (LRU).
pub struct SlotListIter<'a, T> {
    list: &'a SlotList<T>,
    current: Option<usize>,
}

impl<'a, T> Iterator for SlotListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        let slot = &self.list.slots[idx];
        self.current = slot.next;
        slot.value.as_ref()
    }
}

impl<T> RecencyList<T> for SlotList<T> {
    type Handle = SlotHandle;

    fn with_capacity(capacity: usize) -> Self {
        SlotList::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn push_front(&mut self, value: T) -> (SlotHandle, Option<T>) {
        SlotList::push_front(self, value)
    }

    #[inline]
    fn move_to_front(&mut self, handle: SlotHandle) -> bool {
        SlotList::move_to_front(self, handle)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        SlotList::pop_back(self)
    }

    #[inline]
    fn get(&self, handle: SlotHandle) -> Option<&T> {
        SlotList::get(self, handle)
    }

    #[inline]
    fn get_mut(&mut self, handle: SlotHandle) -> Option<&mut T> {
        SlotList::get_mut(self, handle)
    }

    fn front(&self) -> Option<&T> {
        SlotList::front(self)
    }

    fn back(&self) -> Option<&T> {
        SlotList::back(self)
    }

    fn front_handle(&self) -> Option<SlotHandle> {
        SlotList::front_handle(self)
    }

    fn next_handle(&self, handle: SlotHandle) -> Option<SlotHandle> {
        let next = self.slot(handle)?.next?;
        Some(self.handle_at(next))
    }

    fn clear(&mut self) {
        SlotList::clear(self)
    }
}
