//! Property 1: Equivalence with the sequential oracle.
//!
//! Borůvka must select exactly the oracle's edges, since both scan edges
//! under the same total order. Prim may break weight ties differently, so it
//! must match the oracle's total weight, edge count and component count,
//! and its exact edge set only when all weights are distinct.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{WeightedGraph, boruvka, prim};

use super::helpers::sorted_ids;
use super::oracle::sequential_kruskal;
use super::types::{MstFixture, WeightDistribution};

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let oracle = sequential_kruskal(fixture.vertex_count, graph.edges());
    let context = fixture.context();

    let forest = boruvka(&graph)
        .map_err(|err| TestCaseError::fail(format!("boruvka failed: {err} ({context})")))?;
    check_equal("boruvka total weight", forest.total_weight(), oracle.total_weight, &context)?;
    check_equal("boruvka components", forest.component_count(), oracle.component_count, &context)?;
    check_equal("boruvka edge ids", sorted_ids(forest.edges()), oracle.edge_ids.clone(), &context)?;

    let tree = prim(&graph, 0)
        .map_err(|err| TestCaseError::fail(format!("prim failed: {err} ({context})")))?;
    check_equal("prim total weight", tree.total_weight(), oracle.total_weight, &context)?;
    check_equal("prim components", tree.component_count(), oracle.component_count, &context)?;
    check_equal("prim edge count", tree.edges().len(), oracle.edge_ids.len(), &context)?;
    if fixture.distribution == WeightDistribution::Unique {
        check_equal("prim edge ids", sorted_ids(tree.edges()), oracle.edge_ids, &context)?;
    }

    Ok(())
}

fn check_equal<T>(what: &str, actual: T, expected: T, context: &str) -> TestCaseResult
where
    T: PartialEq + std::fmt::Debug,
{
    if actual == expected {
        return Ok(());
    }
    Err(TestCaseError::fail(format!(
        "{what} mismatch: actual={actual:?}, oracle={expected:?} ({context})",
    )))
}
