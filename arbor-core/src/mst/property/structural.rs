//! Property 2: Structural invariant verification.
//!
//! For the forests produced by both drivers, verifies:
//!
//! - **Provenance**: every selected edge is an edge of the input graph.
//! - **No self-loops**: no selected edge joins a vertex to itself.
//! - **Acyclicity**: no selected edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Connectivity**: the forest has as many components as the input.
//! - **Round contraction**: every Borůvka round at least halves the
//!   component count until the graph runs out of crossing edges.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{AdjacencyGraph, BoruvkaRound, Edge, WeightedGraph, boruvka, prim};

use super::helpers::{count_components, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let context = fixture.context();
    let input_components = count_components(
        fixture.vertex_count,
        graph.edges().iter().map(Edge::endpoints),
    );

    let forest = boruvka(&graph)
        .map_err(|err| TestCaseError::fail(format!("boruvka failed: {err} ({context})")))?;
    validate_forest("boruvka", &graph, forest.edges(), input_components)
        .map_err(|msg| TestCaseError::fail(format!("{msg} ({context})")))?;
    validate_rounds(forest.rounds(), forest.component_count())
        .map_err(|msg| TestCaseError::fail(format!("{msg} ({context})")))?;

    let tree = prim(&graph, 0)
        .map_err(|err| TestCaseError::fail(format!("prim failed: {err} ({context})")))?;
    validate_forest("prim", &graph, tree.edges(), input_components)
        .map_err(|msg| TestCaseError::fail(format!("{msg} ({context})")))?;
    if tree.component_count() != input_components {
        return Err(TestCaseError::fail(format!(
            "prim reports {} components, input has {input_components} ({context})",
            tree.component_count(),
        )));
    }

    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

fn validate_forest(
    driver: &str,
    graph: &AdjacencyGraph,
    edges: &[Edge],
    input_components: usize,
) -> Result<(), String> {
    let vertex_count = graph.vertex_count();
    let mut parent: Vec<usize> = (0..vertex_count).collect();

    for (index, edge) in edges.iter().enumerate() {
        if graph.edge(edge.id()) != Some(edge) {
            return Err(format!("{driver} edge {index}: {edge:?} is not an input edge"));
        }
        if edge.is_self_loop() {
            return Err(format!("{driver} edge {index}: self-loop on {}", edge.from()));
        }
        let left = find_root(&mut parent, edge.from());
        let right = find_root(&mut parent, edge.to());
        if left == right {
            return Err(format!("{driver} edge {index}: {edge:?} closes a cycle"));
        }
        parent[right] = left;
    }

    let expected = vertex_count - input_components;
    if edges.len() != expected {
        return Err(format!(
            "{driver} selected {} edges, expected n - c = {expected} (c={input_components})",
            edges.len(),
        ));
    }
    Ok(())
}

fn validate_rounds(rounds: &[BoruvkaRound], final_components: usize) -> Result<(), String> {
    for (index, pair) in rounds.windows(2).enumerate() {
        let (before, after) = (pair[0], pair[1]);
        if after.components() * 2 > before.components() {
            return Err(format!(
                "round {}: {} components did not halve to {}",
                index + 1,
                before.components(),
                after.components(),
            ));
        }
    }
    if let Some(last) = rounds.last()
        && last.edges_added() > 0
        && final_components != 1
    {
        return Err(format!(
            "driver stopped with {final_components} components after adding edges",
        ));
    }
    Ok(())
}
