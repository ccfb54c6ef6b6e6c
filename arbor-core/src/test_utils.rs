//! Shared test utilities for `arbor-core`.

use arbor_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::{AdjacencyGraph, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `ARBOR_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds an [`AdjacencyGraph`] from `(from, to, weight)` triples.
///
/// # Panics
/// Panics when a triple references a vertex outside `vertex_count`.
#[must_use]
pub(crate) fn graph_from(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> AdjacencyGraph {
    AdjacencyGraph::from_edges(vertex_count, edges.iter().copied())
        .expect("test edges must reference known vertices")
}
