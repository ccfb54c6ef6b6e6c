//! Component labelling over the current Borůvka forest.

use std::collections::VecDeque;

use crate::{MstError, Result, WeightedGraph};

use super::{store::VertexStore, vertex::MstVertex};

/// Labels every vertex with its connected component in `forest` and returns
/// the number of components.
///
/// Vertices are scanned in ascending index order and each unseen vertex
/// starts a breadth-first traversal restricted to the forest's edges, so
/// labels are `1..=count` in order of each component's smallest vertex.
///
/// # Errors
/// Returns [`MstError::InvariantViolation`] when `forest` and `store` do not
/// cover the same vertex set, and [`MstError::UnknownVertex`] when a forest
/// edge references a vertex the store does not know.
///
/// # Examples
/// ```
/// use arbor_core::{AdjacencyGraph, MstVertex, VertexStore, count_and_label};
///
/// let forest = AdjacencyGraph::from_edges(4, [(0, 2, 1)])?;
/// let mut store = VertexStore::<MstVertex>::new(4);
/// assert_eq!(count_and_label(&forest, &mut store)?, 3);
/// assert_eq!(store.get(2)?.component(), 1);
/// assert_eq!(store.get(3)?.component(), 3);
/// # Ok::<(), arbor_core::MstError>(())
/// ```
pub fn count_and_label<G: WeightedGraph>(
    forest: &G,
    store: &mut VertexStore<MstVertex>,
) -> Result<usize> {
    if forest.vertex_count() != store.len() {
        return Err(MstError::InvariantViolation {
            invariant: "forest and annotation store must cover the same vertices",
        });
    }

    store.reset_with(|state| {
        state.seen = false;
        state.component = 0;
    });

    let mut count = 0;
    let mut frontier = VecDeque::new();
    for root in forest.vertices() {
        if store.get(root)?.seen {
            continue;
        }
        count += 1;
        label(forest, store, root, count, &mut frontier)?;
    }
    Ok(count)
}

fn label<G: WeightedGraph>(
    forest: &G,
    store: &mut VertexStore<MstVertex>,
    root: usize,
    component: usize,
    frontier: &mut VecDeque<usize>,
) -> Result<()> {
    visit(store, root, component, frontier)?;
    while let Some(vertex) = frontier.pop_front() {
        for edge in forest.incident(vertex)? {
            let Some(next) = edge.other_end(vertex) else {
                return Err(MstError::InvariantViolation {
                    invariant: "incident edges must touch their vertex",
                });
            };
            if !store.get(next)?.seen {
                visit(store, next, component, frontier)?;
            }
        }
    }
    Ok(())
}

fn visit(
    store: &mut VertexStore<MstVertex>,
    vertex: usize,
    component: usize,
    frontier: &mut VecDeque<usize>,
) -> Result<()> {
    let state = store.get_mut(vertex)?;
    state.seen = true;
    state.component = component;
    frontier.push_back(vertex);
    Ok(())
}
