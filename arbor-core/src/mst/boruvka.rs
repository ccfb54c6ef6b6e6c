//! Borůvka's algorithm: repeated component labelling and safe-edge
//! contraction.

use tracing::{debug, info, instrument};

use crate::graph::sum_weights;
use crate::{AdjacencyGraph, Edge, Result, Weight, WeightedGraph};

use super::{
    components::count_and_label, safe_edges::add_safe_edges, store::VertexStore,
    vertex::MstVertex,
};

/// Summary of one Borůvka round.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoruvkaRound {
    components: usize,
    edges_added: usize,
}

impl BoruvkaRound {
    /// Returns the number of components when the round started.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the number of safe edges the round added.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_added(&self) -> usize { self.edges_added }
}

/// The minimum spanning forest produced by [`boruvka`].
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoruvkaForest {
    edges: Vec<Edge>,
    total_weight: Weight,
    component_count: usize,
    rounds: Vec<BoruvkaRound>,
}

impl BoruvkaForest {
    /// Returns the forest edges, as edges of the input graph, ordered by
    /// weight and identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the summed weight of the forest edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of components left when the driver stopped.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the per-round history in execution order.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> &[BoruvkaRound] { &self.rounds }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Computes a minimum spanning forest with Borůvka's algorithm.
///
/// Starting from an edgeless forest over the graph's vertices, each round
/// labels the forest's components and adds every component's safe edge,
/// until a single component remains. A round that finds no crossing edge
/// stops the driver: the graph is disconnected and the result reports more
/// than one component instead of a spanning tree. A graph without vertices
/// yields an empty forest with zero components.
///
/// # Errors
/// Returns [`MstError::UnknownVertex`](crate::MstError::UnknownVertex) when
/// an edge references a vertex outside the graph and
/// [`MstError::WeightOverflow`](crate::MstError::WeightOverflow) when the
/// total weight does not fit in [`Weight`].
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyGraph, boruvka};
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// let forest = boruvka(&graph)?;
/// assert_eq!(forest.total_weight(), 3);
/// assert!(forest.is_tree());
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[instrument(
    name = "mst.boruvka",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn boruvka<G: WeightedGraph>(graph: &G) -> Result<BoruvkaForest> {
    let vertex_count = graph.vertex_count();
    let mut store = VertexStore::<MstVertex>::new(vertex_count);
    let mut forest = AdjacencyGraph::new(vertex_count);
    let mut chosen = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut rounds = Vec::new();

    let mut count = count_and_label(&forest, &mut store)?;
    while count > 1 {
        let added = add_safe_edges(graph, &store, count, &mut forest)?;
        rounds.push(BoruvkaRound {
            components: count,
            edges_added: added.len(),
        });
        debug!(
            round = rounds.len(),
            components = count,
            edges_added = added.len(),
            "boruvka round completed"
        );
        if added.is_empty() {
            break;
        }
        chosen.extend(added);
        count = count_and_label(&forest, &mut store)?;
    }

    let total_weight = sum_weights(forest.edges())?;
    chosen.sort_unstable();
    info!(
        total_weight,
        components = count,
        rounds = rounds.len(),
        "boruvka completed"
    );
    Ok(BoruvkaForest {
        edges: chosen,
        total_weight,
        component_count: count,
        rounds,
    })
}
