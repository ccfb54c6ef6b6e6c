//! Seeded random graph generation for benchmarks.
//!
//! Every generated graph is connected: a path over a shuffled vertex order
//! is laid down first and the remaining edges join uniformly random pairs.

use arbor_core::{AdjacencyGraph, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Configuration for [`random_graph`].
#[derive(Clone, Copy, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges per vertex beyond the spanning path.
    pub edge_factor: usize,
    /// Weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// Seed for the generator.
    pub seed: u64,
}

impl RandomGraphConfig {
    /// Creates a configuration with weights up to 1 000 and seed 42.
    #[must_use]
    pub const fn new(vertex_count: usize, edge_factor: usize) -> Self {
        Self {
            vertex_count,
            edge_factor,
            max_weight: 1_000,
            seed: 42,
        }
    }
}

/// Generates a connected graph described by `config`.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroVertices`] for an empty vertex set and
/// [`BenchSetupError::NonPositiveWeight`] when `max_weight < 1`.
///
/// # Examples
/// ```
/// use arbor_benches::source::{RandomGraphConfig, random_graph};
/// use arbor_core::WeightedGraph;
///
/// let graph = random_graph(&RandomGraphConfig::new(10, 2))?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 9 + 20);
/// # Ok::<(), arbor_benches::error::BenchSetupError>(())
/// ```
pub fn random_graph(config: &RandomGraphConfig) -> Result<AdjacencyGraph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroVertices);
    }
    if config.max_weight < 1 {
        return Err(BenchSetupError::NonPositiveWeight {
            max_weight: config.max_weight,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..config.vertex_count).collect();
    order.shuffle(&mut rng);

    let mut graph = AdjacencyGraph::new(config.vertex_count);
    for pair in order.windows(2) {
        if let [from, to] = *pair {
            graph.add_edge(from, to, rng.gen_range(1..=config.max_weight))?;
        }
    }

    let extra = config.vertex_count.saturating_mul(config.edge_factor);
    for _ in 0..extra {
        let from = rng.gen_range(0..config.vertex_count);
        let to = rng.gen_range(0..config.vertex_count);
        graph.add_edge(from, to, rng.gen_range(1..=config.max_weight))?;
    }
    Ok(graph)
}
