//! Vertex-annotation store.
//!
//! Holds one state value per vertex, addressed by vertex index. Each driver
//! builds its own store at the start of a run, so no annotation outlives the
//! run or leaks between algorithms executed on the same graph.

use crate::{MstError, Result};

/// Dense per-vertex state keyed by vertex index.
///
/// # Examples
/// ```
/// use arbor_core::{MstVertex, VertexStore};
///
/// let mut store = VertexStore::<MstVertex>::new(3);
/// assert_eq!(store.len(), 3);
/// assert!(!store.get(2)?.seen());
/// assert!(store.get(3).is_err());
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct VertexStore<S> {
    states: Vec<S>,
}

impl<S> VertexStore<S> {
    /// Creates a store with one state per vertex produced by `make`.
    pub fn from_fn(vertex_count: usize, make: impl FnMut(usize) -> S) -> Self {
        Self {
            states: (0..vertex_count).map(make).collect(),
        }
    }

    /// Returns the number of registered vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` when no vertex is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state of `vertex`.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when `vertex` was never registered.
    pub fn get(&self, vertex: usize) -> Result<&S> {
        self.states.get(vertex).ok_or(MstError::UnknownVertex {
            vertex,
            vertex_count: self.states.len(),
        })
    }

    /// Returns the mutable state of `vertex`.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when `vertex` was never registered.
    pub fn get_mut(&mut self, vertex: usize) -> Result<&mut S> {
        let vertex_count = self.states.len();
        self.states.get_mut(vertex).ok_or(MstError::UnknownVertex {
            vertex,
            vertex_count,
        })
    }

    /// Applies `reset` to every state, e.g. to clear visitation flags.
    pub fn reset_with(&mut self, reset: impl FnMut(&mut S)) {
        self.states.iter_mut().for_each(reset);
    }

    /// Iterates `(vertex, state)` pairs in ascending vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &S)> {
        self.states.iter().enumerate()
    }
}

impl<S: Default> VertexStore<S> {
    /// Creates a store of default states.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::from_fn(vertex_count, |_| S::default())
    }
}
