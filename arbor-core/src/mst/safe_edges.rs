//! Safe-edge selection for one Borůvka round.
//!
//! Every component picks the lightest edge of the original graph that
//! leaves it. Ties are broken by the lowest edge identifier, so the choice
//! does not depend on the order in which edges are scanned. Decisions are made
//! against the labels computed before the round, and each chosen edge joins two
//! distinct components, so the round cannot close a cycle.

use std::collections::BTreeMap;

use crate::{AdjacencyGraph, Edge, EdgeId, MstError, Result, WeightedGraph};

use super::{store::VertexStore, vertex::MstVertex};

/// Adds the safe edge of every component to `forest` and returns the added
/// edges (as edges of `graph`) in identifier order.
///
/// `store` must hold the labels produced by
/// [`count_and_label`](super::count_and_label) for `component_count`
/// components. An edge chosen by both of its endpoint components is added
/// once. Returns an empty list when no edge crosses a component boundary.
///
/// # Errors
/// Returns [`MstError::UnknownVertex`] when an edge endpoint is missing from
/// the store or the forest, and [`MstError::InvariantViolation`] when a
/// label lies outside `1..=component_count`.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyGraph, MstVertex, VertexStore, WeightedGraph, add_safe_edges, count_and_label};
///
/// let graph = AdjacencyGraph::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 3)])?;
/// let mut forest = AdjacencyGraph::new(3);
/// let mut store = VertexStore::<MstVertex>::new(3);
/// let count = count_and_label(&forest, &mut store)?;
/// let added = add_safe_edges(&graph, &store, count, &mut forest)?;
/// assert_eq!(added.iter().map(|edge| edge.id()).collect::<Vec<_>>(), [0, 1]);
/// assert_eq!(forest.edge_count(), 2);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
pub fn add_safe_edges<G: WeightedGraph>(
    graph: &G,
    store: &VertexStore<MstVertex>,
    component_count: usize,
    forest: &mut AdjacencyGraph,
) -> Result<Vec<Edge>> {
    let mut safe: Vec<Option<&Edge>> = vec![None; component_count];

    for edge in graph.edges() {
        let from = store.get(edge.from())?.component();
        let to = store.get(edge.to())?.component();
        if from == to {
            continue;
        }
        for component in [from, to] {
            let best = component
                .checked_sub(1)
                .and_then(|slot| safe.get_mut(slot))
                .ok_or(MstError::InvariantViolation {
                    invariant: "component labels must lie in 1..=component_count",
                })?;
            if best.is_none_or(|current| edge < current) {
                *best = Some(edge);
            }
        }
    }

    let chosen: BTreeMap<EdgeId, Edge> = safe
        .into_iter()
        .flatten()
        .map(|edge| (edge.id(), *edge))
        .collect();

    let mut added = Vec::with_capacity(chosen.len());
    for edge in chosen.into_values() {
        forest.add_edge(edge.from(), edge.to(), edge.weight())?;
        added.push(edge);
    }
    Ok(added)
}
