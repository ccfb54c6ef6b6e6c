//! Indexed binary min-heap with decrease-key.
//!
//! The heap stores vertex indices only. Keys and the back-pointer from a
//! vertex to its heap slot live in the [`VertexStore`], so a caller can lower
//! a key in place and ask the heap to restore order from the recorded slot in
//! `O(log n)`. Only the heap's own mutating operations write back-pointers.

use crate::{MstError, Result};

use super::store::VertexStore;

/// State that can be ordered by an [`IndexedHeap`].
pub trait HeapEntry {
    /// Priority type; smaller keys leave the heap first.
    type Key: Ord + Copy;

    /// Returns the current priority.
    fn key(&self) -> Self::Key;

    /// Returns the slot currently occupied in the heap, if enqueued.
    fn heap_index(&self) -> Option<usize>;

    /// Records the slot occupied in the heap.
    fn set_heap_index(&mut self, index: Option<usize>);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Slot {
    element: usize,
    sequence: u64,
}

/// Binary min-heap over a fixed universe of element indices.
///
/// Order is `(key, insertion sequence)`, so equal keys leave in insertion
/// order.
///
/// # Examples
/// ```
/// use arbor_core::{IndexedHeap, Key, MstVertex, VertexStore};
///
/// let mut store = VertexStore::from_fn(3, |v| MstVertex::with_key(Key::Finite(10 - v as i64)));
/// let mut heap = IndexedHeap::with_capacity(3);
/// for vertex in 0..3 {
///     heap.insert(&mut store, vertex)?;
/// }
/// assert_eq!(heap.extract_min(&mut store)?, 2);
/// assert_eq!(heap.len(), 2);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedHeap {
    slots: Vec<Slot>,
    capacity: usize,
    next_sequence: u64,
}

impl IndexedHeap {
    /// Creates an empty heap able to hold `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    /// Returns the number of enqueued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when nothing is enqueued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the size of the element universe.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the element at the root without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<usize> {
        self.slots.first().map(|slot| slot.element)
    }

    /// Enqueues `element` with its current key.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] if the store does not know
    /// `element`, [`MstError::HeapFull`] once `capacity` elements are
    /// enqueued and [`MstError::InvariantViolation`] if `element` is already
    /// enqueued.
    pub fn insert<S: HeapEntry>(
        &mut self,
        store: &mut VertexStore<S>,
        element: usize,
    ) -> Result<()> {
        if store.get(element)?.heap_index().is_some() {
            return Err(MstError::InvariantViolation {
                invariant: "an element may only be enqueued once",
            });
        }
        if self.slots.len() >= self.capacity {
            return Err(MstError::HeapFull {
                capacity: self.capacity,
            });
        }

        let slot = Slot {
            element,
            sequence: self.next_sequence,
        };
        self.next_sequence = self.next_sequence.wrapping_add(1);
        self.slots.push(slot);
        self.sift_up(store, self.slots.len() - 1)
    }

    /// Removes and returns the element with the smallest key.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyQueue`] when the heap is empty.
    pub fn extract_min<S: HeapEntry>(&mut self, store: &mut VertexStore<S>) -> Result<usize> {
        let last = self.slots.pop().ok_or(MstError::EmptyQueue)?;
        let root = match self.slots.first_mut() {
            Some(first) => std::mem::replace(first, last),
            None => last,
        };
        if !self.slots.is_empty() {
            self.sift_down(store, 0)?;
        }
        store.get_mut(root.element)?.set_heap_index(None);
        Ok(root.element)
    }

    /// Restores heap order after the key of `element` was lowered.
    ///
    /// Must only be called after a true decrease; a raised key is not moved
    /// down.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] when `element` is not
    /// enqueued or its recorded slot is stale.
    pub fn decrease_key<S: HeapEntry>(
        &mut self,
        store: &mut VertexStore<S>,
        element: usize,
    ) -> Result<()> {
        let position = store
            .get(element)?
            .heap_index()
            .ok_or(MstError::InvariantViolation {
                invariant: "decrease_key requires an enqueued element",
            })?;
        if self.slots.get(position).map(|slot| slot.element) != Some(element) {
            return Err(MstError::InvariantViolation {
                invariant: "heap index must point at the element's slot",
            });
        }
        self.sift_up(store, position)
    }

    /// Verifies heap order and back-pointer consistency.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] naming the first broken
    /// invariant.
    pub fn check_invariants<S: HeapEntry>(&self, store: &VertexStore<S>) -> Result<()> {
        for (position, slot) in self.slots.iter().enumerate() {
            if store.get(slot.element)?.heap_index() != Some(position) {
                return Err(MstError::InvariantViolation {
                    invariant: "heap index must equal the element's position",
                });
            }
            if position == 0 {
                continue;
            }
            let parent = self.slot((position - 1) / 2)?;
            if rank(store, parent)? > rank(store, *slot)? {
                return Err(MstError::InvariantViolation {
                    invariant: "parent key must not exceed child keys",
                });
            }
        }
        Ok(())
    }

    fn slot(&self, position: usize) -> Result<Slot> {
        self.slots
            .get(position)
            .copied()
            .ok_or(MstError::InvariantViolation {
                invariant: "heap position must lie within the backing array",
            })
    }

    fn place<S: HeapEntry>(
        &mut self,
        store: &mut VertexStore<S>,
        position: usize,
        slot: Slot,
    ) -> Result<()> {
        let target = self
            .slots
            .get_mut(position)
            .ok_or(MstError::InvariantViolation {
                invariant: "heap position must lie within the backing array",
            })?;
        *target = slot;
        store.get_mut(slot.element)?.set_heap_index(Some(position));
        Ok(())
    }

    fn sift_up<S: HeapEntry>(&mut self, store: &mut VertexStore<S>, start: usize) -> Result<()> {
        let moving = self.slot(start)?;
        let moving_rank = rank(store, moving)?;
        let mut position = start;
        while position > 0 {
            let parent_position = (position - 1) / 2;
            let parent = self.slot(parent_position)?;
            if rank(store, parent)? <= moving_rank {
                break;
            }
            self.place(store, position, parent)?;
            position = parent_position;
        }
        self.place(store, position, moving)
    }

    fn sift_down<S: HeapEntry>(&mut self, store: &mut VertexStore<S>, start: usize) -> Result<()> {
        let moving = self.slot(start)?;
        let moving_rank = rank(store, moving)?;
        let len = self.slots.len();
        let mut position = start;
        loop {
            let left = 2 * position + 1;
            if left >= len {
                break;
            }
            let mut child_position = left;
            let mut child = self.slot(left)?;
            let mut child_rank = rank(store, child)?;
            let right = left + 1;
            if right < len {
                let right_slot = self.slot(right)?;
                let right_rank = rank(store, right_slot)?;
                if right_rank < child_rank {
                    child_position = right;
                    child = right_slot;
                    child_rank = right_rank;
                }
            }
            if moving_rank <= child_rank {
                break;
            }
            self.place(store, position, child)?;
            position = child_position;
        }
        self.place(store, position, moving)
    }
}

fn rank<S: HeapEntry>(store: &VertexStore<S>, slot: Slot) -> Result<(S::Key, u64)> {
    Ok((store.get(slot.element)?.key(), slot.sequence))
}
