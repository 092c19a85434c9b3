//! Shared helper functions for MST property-based tests.

use crate::Edge;

/// Path-halving find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums edge weights in `i128`.
pub(super) fn total_weight(edges: &[Edge<i64>]) -> i128 {
    edges.iter().map(|e| i128::from(e.weight())).sum()
}
