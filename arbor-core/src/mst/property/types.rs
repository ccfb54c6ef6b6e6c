//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use crate::{AdjacencyGraph, Weight};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights and topology are chosen during generation,
/// producing inputs that stress different parts of the two drivers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the minimum tree is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph built from a random spanning path plus a few extra edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
    /// Parallel edges, self-loops and negative weights on a small vertex set.
    Multigraph,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges, and the weight distribution
/// used during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(from, to, weight)` triples; the position is the edge id.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as an adjacency graph.
    pub(super) fn graph(&self) -> AdjacencyGraph {
        crate::test_utils::graph_from(self.vertex_count, &self.edges)
    }

    /// Formats the fixture context appended to failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the determinism property.
///
/// Controls how many times each driver is re-executed on the same input.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat each computation per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from the environment.
    ///
    /// `ARBOR_MST_PBT_REPEATS` controls the repetition count (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("ARBOR_MST_PBT_REPEATS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .filter(|&count: &usize| count > 0)
            .unwrap_or(3);
        Self { repetitions }
    }
}
