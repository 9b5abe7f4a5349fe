//! Generational arena backing [`NodeList`](crate::ds::NodeList).
//!
//! The arena owns every node. Callers hold [`SlotId`]s, which pair a cell
//! index with the generation the cell had when the id was issued. A cell's
//! generation is bumped each time its value leaves, so an id kept past a
//! removal never resolves to whatever later moves into the same cell.
//!
//! ```text
//!   cells  [ g0: Some(A) | g2: None | g1: Some(C) ]
//!   vacant [ 1 ]
//!
//!   SlotId { index: 1, generation: 1 }  ── stale (cell is at g2)
//!   SlotId { index: 2, generation: 1 }  ── resolves to C
//! ```

/// Handle to a value in a [`SlotArena`]: cell index plus issuing generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId {
    index: usize,
    generation: u32,
}

impl SlotId {
    /// Returns the cell index.
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the generation this id was issued under.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Cell<T> {
    generation: u32,
    value: Option<T>,
}

/// Growable arena with cell reuse and generation-checked ids.
#[derive(Debug)]
pub struct SlotArena<T> {
    cells: Vec<Cell<T>>,
    vacant: Vec<usize>,
    live: usize,
}

impl<T> SlotArena<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty arena with room for `capacity` cells.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            vacant: Vec::new(),
            live: 0,
        }
    }

    /// Stores `value` and returns its id. Vacated cells are reused first.
    pub fn insert(&mut self, value: T) -> SlotId {
        self.live += 1;
        match self.vacant.pop() {
            Some(index) => {
                let cell = &mut self.cells[index];
                cell.value = Some(value);
                SlotId {
                    index,
                    generation: cell.generation,
                }
            },
            None => {
                self.cells.push(Cell {
                    generation: 0,
                    value: Some(value),
                });
                SlotId {
                    index: self.cells.len() - 1,
                    generation: 0,
                }
            },
        }
    }

    /// Takes the value behind `id` out of the arena. Stale ids yield `None`.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let cell = self.cells.get_mut(id.index)?;
        if cell.generation != id.generation {
            return None;
        }
        let value = cell.value.take()?;
        cell.generation = cell.generation.wrapping_add(1);
        self.vacant.push(id.index);
        self.live -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.cells
            .get(id.index)
            .filter(|cell| cell.generation == id.generation)
            .and_then(|cell| cell.value.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.cells
            .get_mut(id.index)
            .filter(|cell| cell.generation == id.generation)
            .and_then(|cell| cell.value.as_mut())
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Drops every value. Cells are kept, and every id issued so far goes
    /// stale.
    pub fn clear(&mut self) {
        self.vacant.clear();
        for (index, cell) in self.cells.iter_mut().enumerate().rev() {
            if cell.value.take().is_some() {
                cell.generation = cell.generation.wrapping_add(1);
            }
            self.vacant.push(index);
        }
        self.live = 0;
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
