//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning tree benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Extra edges per vertex on top of the spanning path.
    pub edge_factor: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.vertex_count, self.edge_factor)
    }
}
