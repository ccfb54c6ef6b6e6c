//! Shared helper functions for MST property-based tests.

use crate::Edge;

/// Path-halving find over a parent array.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Counts connected components of `vertex_count` vertices joined by
/// `pairs`. Self-loops never merge anything.
pub(super) fn count_components(
    vertex_count: usize,
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for (from, to) in pairs {
        let left = find_root(&mut parent, from);
        let right = find_root(&mut parent, to);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}

/// Returns the sorted identifiers of `edges`.
pub(super) fn sorted_ids(edges: &[Edge]) -> Vec<usize> {
    let mut ids: Vec<usize> = edges.iter().map(Edge::id).collect();
    ids.sort_unstable();
    ids
}
