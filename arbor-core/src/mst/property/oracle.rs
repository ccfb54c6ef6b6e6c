//! Sequential Kruskal oracle for MST property verification.
//!
//! Edges are scanned in the crate's edge order (weight, then identifier),
//! which makes the minimum forest unique. Borůvka must select exactly the
//! same edges; Prim must match the total weight.

use crate::{Edge, Weight};

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: Weight,
    /// Sorted identifiers of the selected edges.
    pub edge_ids: Vec<usize>,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with sequential Kruskal.
pub(super) fn sequential_kruskal(vertex_count: usize, edges: &[Edge]) -> OracleForest {
    let mut sorted: Vec<&Edge> = edges.iter().filter(|edge| !edge.is_self_loop()).collect();
    sorted.sort_unstable();

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank = vec![0_u8; vertex_count];
    let mut forest = OracleForest {
        total_weight: 0,
        edge_ids: Vec::new(),
        component_count: vertex_count,
    };

    for edge in sorted {
        let left = find_root(&mut parent, edge.from());
        let right = find_root(&mut parent, edge.to());
        if left == right {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, left, right);
        forest.total_weight += edge.weight();
        forest.edge_ids.push(edge.id());
        forest.component_count -= 1;
    }

    forest.edge_ids.sort_unstable();
    forest
}

/// Union by rank; equal ranks attach the larger root under the smaller.
fn union_by_rank(parent: &mut [usize], rank: &mut [u8], left: usize, right: usize) {
    let (root, child) = match rank[left].cmp(&rank[right]) {
        std::cmp::Ordering::Greater => (left, right),
        std::cmp::Ordering::Less => (right, left),
        std::cmp::Ordering::Equal => (left.min(right), left.max(right)),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
