//! Prim's algorithm driven by the indexed heap.

use tracing::{info, instrument, warn};

use crate::{Edge, MstError, Result, Weight, WeightedGraph};

use super::{
    heap::IndexedHeap,
    store::VertexStore,
    vertex::{Key, MstVertex},
};

/// The tree (or forest) produced by [`prim`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PrimTree {
    source: usize,
    edges: Vec<Edge>,
    total_weight: Weight,
    detached_roots: usize,
}

impl PrimTree {
    /// Returns the vertex the run started from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the selected edges in the order their far endpoints were
    /// extracted from the heap.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the summed weight of the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns how many vertices were extracted with an infinite key.
    ///
    /// Each such vertex is unreachable from every vertex extracted before it
    /// and roots a further tree, so a non-zero count means the graph is
    /// disconnected.
    #[must_use]
    #[rustfmt::skip]
    pub const fn detached_roots(&self) -> usize { self.detached_roots }

    /// Returns the number of trees in the result.
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.detached_roots + 1
    }

    /// Returns `true` when every vertex is reachable from the source.
    #[must_use]
    pub const fn is_spanning(&self) -> bool {
        self.detached_roots == 0
    }
}

/// Computes a minimum spanning tree rooted at `source` with Prim's
/// algorithm over an indexed heap.
///
/// Every vertex starts at an infinite key except `source`, which starts at
/// zero. The minimum-key vertex is extracted repeatedly; its recorded edge
/// joins the tree and each unseen neighbour reachable through a strictly
/// lighter edge has its key lowered in place. Vertices unreachable from
/// `source` leave the heap at an infinite key; they add nothing to the total
/// weight, are counted in [`PrimTree::detached_roots`] and root further trees
/// of a spanning forest.
///
/// The infinite key is never added to the total as a sentinel: on a
/// disconnected graph [`PrimTree::total_weight`] is the weight of the
/// minimum spanning forest, matching [`boruvka`](crate::boruvka). Detect the
/// disconnected case with [`PrimTree::is_spanning`] or
/// [`PrimTree::component_count`] rather than by inspecting the total.
///
/// # Errors
/// Returns [`MstError::UnknownVertex`] when `source` is not a vertex of
/// `graph` or an edge references an unknown vertex,
/// [`MstError::UnknownEdge`] when a recorded edge does not resolve and
/// [`MstError::WeightOverflow`] when the total does not fit in [`Weight`].
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyGraph, prim};
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// let tree = prim(&graph, 0)?;
/// assert_eq!(tree.total_weight(), 3);
/// assert_eq!(tree.edges().len(), 2);
/// assert!(tree.is_spanning());
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim<G: WeightedGraph>(graph: &G, source: usize) -> Result<PrimTree> {
    let vertex_count = graph.vertex_count();
    if source >= vertex_count {
        return Err(MstError::UnknownVertex {
            vertex: source,
            vertex_count,
        });
    }

    let mut store = VertexStore::<MstVertex>::new(vertex_count);
    store.get_mut(source)?.key = Key::Finite(0);

    let mut queue = IndexedHeap::with_capacity(vertex_count);
    for vertex in graph.vertices() {
        queue.insert(&mut store, vertex)?;
    }

    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight: Weight = 0;
    let mut detached_roots = 0;

    while !queue.is_empty() {
        let vertex = queue.extract_min(&mut store)?;
        let state = store.get_mut(vertex)?;
        state.seen = true;

        match state.key {
            Key::Finite(weight) => {
                total_weight = total_weight
                    .checked_add(weight)
                    .ok_or(MstError::WeightOverflow)?;
            }
            Key::Infinite => detached_roots += 1,
        }

        if state.parent.is_some() {
            let id = state.selected_edge.ok_or(MstError::InvariantViolation {
                invariant: "a reached vertex must record the edge that reached it",
            })?;
            let edge = graph.edge(id).ok_or(MstError::UnknownEdge { edge: id })?;
            edges.push(*edge);
        }

        relax_neighbours(graph, &mut store, &mut queue, vertex)?;
    }

    if detached_roots > 0 {
        warn!(
            detached_roots,
            "graph is disconnected; prim produced a spanning forest"
        );
    }
    info!(total_weight, edges = edges.len(), "prim completed");
    Ok(PrimTree {
        source,
        edges,
        total_weight,
        detached_roots,
    })
}

fn relax_neighbours<G: WeightedGraph>(
    graph: &G,
    store: &mut VertexStore<MstVertex>,
    queue: &mut IndexedHeap,
    vertex: usize,
) -> Result<()> {
    for edge in graph.incident(vertex)? {
        let Some(neighbour) = edge.other_end(vertex) else {
            return Err(MstError::InvariantViolation {
                invariant: "incident edges must touch their vertex",
            });
        };
        let candidate = Key::Finite(edge.weight());
        let state = store.get_mut(neighbour)?;
        if state.seen || candidate >= state.key {
            continue;
        }
        state.relax(candidate, vertex, edge.id());
        queue.decrease_key(store, neighbour)?;
    }
    Ok(())
}
