//! Spanning-tree orchestration for the Arbor library.
//!
//! Provides the [`Arbor`] runtime entry point, which dispatches to the
//! configured driver and normalises its output into a [`SpanningResult`].

use tracing::{Span, field, info, instrument, warn};

use crate::{
    Result,
    builder::Algorithm,
    error::MstError,
    graph::{Edge, Weight, WeightedGraph},
    mst::{BoruvkaForest, PrimTree, boruvka, prim},
};

/// Outcome of a spanning-tree run, independent of the algorithm used.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningResult {
    algorithm: Algorithm,
    total_weight: Weight,
    edges: Vec<Edge>,
    component_count: usize,
}

impl SpanningResult {
    /// Returns the algorithm that produced the result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the summed weight of the selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the selected edges in the order reported by the driver.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of trees in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the result is a single spanning tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

impl From<BoruvkaForest> for SpanningResult {
    fn from(forest: BoruvkaForest) -> Self {
        Self {
            algorithm: Algorithm::Boruvka,
            total_weight: forest.total_weight(),
            component_count: forest.component_count(),
            edges: forest.edges().to_vec(),
        }
    }
}

impl From<PrimTree> for SpanningResult {
    fn from(tree: PrimTree) -> Self {
        Self {
            algorithm: Algorithm::Prim,
            total_weight: tree.total_weight(),
            component_count: tree.component_count(),
            edges: tree.edges().to_vec(),
        }
    }
}

/// Entry point for computing minimum spanning trees.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyGraph, Algorithm, ArborBuilder};
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// for algorithm in [Algorithm::Boruvka, Algorithm::Prim] {
///     let result = ArborBuilder::new().with_algorithm(algorithm).build().run(&graph)?;
///     assert_eq!(result.total_weight(), 3);
///     assert!(result.is_tree());
/// }
/// # Ok::<(), arbor_core::MstError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Arbor {
    algorithm: Algorithm,
    source: usize,
    require_spanning_tree: bool,
}

impl Arbor {
    pub(crate) fn new(algorithm: Algorithm, source: usize, require_spanning_tree: bool) -> Self {
        Self {
            algorithm,
            source,
            require_spanning_tree,
        }
    }

    /// Returns the configured algorithm.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Returns the source vertex used by Prim's algorithm.
    #[must_use]
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns whether disconnected graphs are rejected.
    #[must_use]
    pub fn requires_spanning_tree(&self) -> bool {
        self.require_spanning_tree
    }

    /// Computes a minimum spanning tree (or forest) of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when the graph has no vertices,
    /// [`MstError::Disconnected`] when a spanning tree is required but the
    /// graph is disconnected, and any error raised by the selected driver.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{AdjacencyGraph, Algorithm, ArborBuilder, MstError};
    ///
    /// let graph = AdjacencyGraph::from_edges(4, [(0, 1, 5), (2, 3, 7)])?;
    /// let arbor = ArborBuilder::new()
    ///     .with_algorithm(Algorithm::Boruvka)
    ///     .require_spanning_tree(true)
    ///     .build();
    /// assert_eq!(arbor.run(&graph), Err(MstError::Disconnected { components: 2 }));
    /// # Ok::<(), arbor_core::MstError>(())
    /// ```
    #[instrument(
        name = "arbor.run",
        err,
        skip(self, graph),
        fields(
            algorithm = %self.algorithm,
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            components = field::Empty,
        ),
    )]
    pub fn run<G: WeightedGraph>(&self, graph: &G) -> Result<SpanningResult> {
        if graph.vertex_count() == 0 {
            return Err(MstError::EmptyGraph);
        }

        let result: SpanningResult = match self.algorithm {
            Algorithm::Boruvka => boruvka(graph)?.into(),
            Algorithm::Prim => prim(graph, self.source)?.into(),
        };
        Span::current().record("components", result.component_count());

        if !result.is_tree() {
            warn!(
                components = result.component_count(),
                "graph is disconnected; result is a spanning forest"
            );
            if self.require_spanning_tree {
                return Err(MstError::Disconnected {
                    components: result.component_count(),
                });
            }
        }

        info!(
            total_weight = result.total_weight(),
            edges = result.edges().len(),
            "spanning run completed"
        );
        Ok(result)
    }
}
