//! Weighted undirected graph model consumed by the spanning-tree drivers.
//!
//! The drivers only need a narrow read interface ([`WeightedGraph`]); the
//! concrete [`AdjacencyGraph`] doubles as the input graph and as the growing
//! forest that Borůvka contracts.

use std::cmp::Ordering;
use std::ops::Range;

use crate::{MstError, Result};

/// Stable identifier of an edge within its graph.
pub type EdgeId = usize;

/// Integer edge weight.
pub type Weight = i64;

/// An undirected, weighted edge.
///
/// Edges are ordered by weight and then by identifier, which yields the
/// deterministic total order used for every tie-break in the crate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    id: EdgeId,
    from: usize,
    to: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge with an explicit identifier.
    ///
    /// Graph implementations assign identifiers; callers building graphs
    /// should prefer [`AdjacencyGraph::add_edge`].
    #[must_use]
    pub const fn new(id: EdgeId, from: usize, to: usize, weight: Weight) -> Self {
        Self {
            id,
            from,
            to,
            weight,
        }
    }

    /// Returns the edge identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the endpoint the edge was created from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the endpoint the edge was created towards.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }

    /// Returns both endpoints in creation order.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.from, self.to)
    }

    /// Returns the endpoint opposite `vertex`, or `None` when the edge does
    /// not touch `vertex`. A self-loop returns `vertex` itself.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Edge;
    ///
    /// let edge = Edge::new(0, 1, 4, 7);
    /// assert_eq!(edge.other_end(1), Some(4));
    /// assert_eq!(edge.other_end(4), Some(1));
    /// assert_eq!(edge.other_end(2), None);
    /// ```
    #[must_use]
    pub const fn other_end(&self, vertex: usize) -> Option<usize> {
        if vertex == self.from {
            Some(self.to)
        } else if vertex == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// Returns `true` when both endpoints coincide.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.id.cmp(&other.id))
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Read interface the spanning-tree drivers need from a graph.
///
/// Vertices are the indices `0..vertex_count()`. Implementations must list
/// every undirected edge exactly once in [`edges`](Self::edges), and the edge
/// stored at position `i` must carry identifier `i`.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyGraph, WeightedGraph};
///
/// let mut graph = AdjacencyGraph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 5)?;
/// assert_eq!(graph.vertices().collect::<Vec<_>>(), [0, 1, 2]);
/// assert_eq!(graph.incident(1)?.count(), 2);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
pub trait WeightedGraph {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns every edge exactly once, indexed by identifier.
    fn edges(&self) -> &[Edge];

    /// Returns the edges touching `vertex`, in either endpoint order.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when `vertex` is out of range.
    fn incident(&self, vertex: usize) -> Result<impl Iterator<Item = &Edge>>;

    /// Returns the vertices in ascending index order.
    fn vertices(&self) -> Range<usize> {
        0..self.vertex_count()
    }

    /// Returns the number of edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Resolves an edge identifier.
    fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges().get(id).filter(|edge| edge.id() == id)
    }
}

/// Adjacency-list graph with stable, insertion-ordered edge identifiers.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyGraph, WeightedGraph};
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.edge(2).map(|edge| edge.weight()), Some(3));
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AdjacencyGraph {
    edges: Vec<Edge>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl AdjacencyGraph {
    /// Creates an edgeless graph on `vertex_count` vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates an edgeless graph on `vertex_count` vertices, reporting an
    /// allocation failure instead of aborting.
    ///
    /// Use this when `vertex_count` comes from untrusted input.
    ///
    /// # Errors
    /// Returns [`MstError::CapacityExceeded`] when the adjacency lists cannot
    /// be allocated.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{AdjacencyGraph, MstError, WeightedGraph};
    ///
    /// assert_eq!(AdjacencyGraph::try_new(4)?.vertex_count(), 4);
    /// assert_eq!(
    ///     AdjacencyGraph::try_new(usize::MAX),
    ///     Err(MstError::CapacityExceeded { vertex_count: usize::MAX })
    /// );
    /// # Ok::<(), MstError>(())
    /// ```
    pub fn try_new(vertex_count: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(vertex_count)
            .map_err(|_| MstError::CapacityExceeded { vertex_count })?;
        adjacency.resize_with(vertex_count, Vec::new);
        Ok(Self {
            edges: Vec::new(),
            adjacency,
        })
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when a triple references a vertex
    /// outside `0..vertex_count`.
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, Weight)>,
    ) -> Result<Self> {
        let mut graph = Self::new(vertex_count);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Appends an undirected edge and returns its identifier.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownVertex`] when either endpoint is out of
    /// range; the graph is left unchanged in that case.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) -> Result<EdgeId> {
        let vertex_count = self.vertex_count();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(MstError::UnknownVertex {
                    vertex,
                    vertex_count,
                });
            }
        }

        let id = self.edges.len();
        self.edges.push(Edge::new(id, from, to, weight));
        self.adjacency_mut(from)?.push(id);
        if from != to {
            self.adjacency_mut(to)?.push(id);
        }
        Ok(id)
    }

    /// Sums the weights of every edge in the graph.
    ///
    /// # Errors
    /// Returns [`MstError::WeightOverflow`] if the sum does not fit in
    /// [`Weight`].
    pub fn total_weight(&self) -> Result<Weight> {
        sum_weights(&self.edges)
    }

    fn adjacency_mut(&mut self, vertex: usize) -> Result<&mut Vec<EdgeId>> {
        let vertex_count = self.adjacency.len();
        self.adjacency
            .get_mut(vertex)
            .ok_or(MstError::UnknownVertex {
                vertex,
                vertex_count,
            })
    }
}

impl WeightedGraph for AdjacencyGraph {
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn incident(&self, vertex: usize) -> Result<impl Iterator<Item = &Edge>> {
        let ids = self
            .adjacency
            .get(vertex)
            .ok_or(MstError::UnknownVertex {
                vertex,
                vertex_count: self.adjacency.len(),
            })?;
        Ok(ids.iter().filter_map(|&id| self.edges.get(id)))
    }
}

/// Sums edge weights, failing instead of wrapping on overflow.
pub(crate) fn sum_weights<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Result<Weight> {
    edges.into_iter().try_fold(0, |total: Weight, edge| {
        total
            .checked_add(edge.weight())
            .ok_or(MstError::WeightOverflow)
    })
}
