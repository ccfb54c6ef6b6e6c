//! Per-run vertex annotations shared by the Borůvka and Prim drivers.

use crate::graph::{EdgeId, Weight};

use super::heap::HeapEntry;

/// Connection cost of a vertex in Prim's algorithm.
///
/// `Infinite` is the +∞ sentinel and orders after every finite key.
///
/// # Examples
/// ```
/// use arbor_core::Key;
///
/// assert!(Key::Finite(i64::MAX) < Key::Infinite);
/// assert_eq!(Key::default(), Key::Infinite);
/// assert_eq!(Key::Finite(3).finite(), Some(3));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Key {
    /// A known connection cost.
    Finite(Weight),
    /// No connecting edge has been seen yet.
    #[default]
    Infinite,
}

impl Key {
    /// Returns the finite weight, if any.
    #[must_use]
    pub const fn finite(self) -> Option<Weight> {
        match self {
            Self::Finite(weight) => Some(weight),
            Self::Infinite => None,
        }
    }

    /// Returns `true` for the +∞ sentinel.
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }
}

/// Algorithm state attached to one vertex for the duration of a run.
///
/// A fresh value has `seen == false`, no parent, an infinite key, component
/// `0` (unassigned), no heap slot and no selected edge.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MstVertex {
    pub(crate) seen: bool,
    pub(crate) parent: Option<usize>,
    pub(crate) key: Key,
    pub(crate) component: usize,
    pub(crate) heap_index: Option<usize>,
    pub(crate) selected_edge: Option<EdgeId>,
}

impl MstVertex {
    /// Creates a state whose key is already set, e.g. for a Prim source.
    #[must_use]
    pub fn with_key(key: Key) -> Self {
        Self {
            key,
            ..Self::default()
        }
    }

    /// Returns whether the current pass has visited the vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seen(&self) -> bool { self.seen }

    /// Returns the vertex this one was reached from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> Option<usize> { self.parent }

    /// Returns the current best connection cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn key(&self) -> Key { self.key }

    /// Returns the component label, `0` when unassigned.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component(&self) -> usize { self.component }

    /// Returns the edge that produced the current key and parent.
    #[must_use]
    #[rustfmt::skip]
    pub const fn selected_edge(&self) -> Option<EdgeId> { self.selected_edge }

    /// Lowers the key and records how the vertex was reached.
    pub(crate) fn relax(&mut self, key: Key, parent: usize, edge: EdgeId) {
        self.key = key;
        self.parent = Some(parent);
        self.selected_edge = Some(edge);
    }
}

impl HeapEntry for MstVertex {
    type Key = Key;

    fn key(&self) -> Key {
        self.key
    }

    fn heap_index(&self) -> Option<usize> {
        self.heap_index
    }

    fn set_heap_index(&mut self, index: Option<usize>) {
        self.heap_index = index;
    }
}
