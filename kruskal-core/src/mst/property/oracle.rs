//! Prim oracle for MST property verification.
//!
//! Grows a tree from every not-yet-visited vertex with a binary heap of
//! frontier edges. Prim never consults a disjoint set or sorts the global
//! edge list, so agreement with the selector is independent evidence of
//! minimality.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::Edge;

/// Result of the Prim oracle.
#[derive(Clone, Debug)]
pub(super) struct PrimResult {
    /// Total weight of the spanning forest.
    pub total_weight: i128,
    /// Number of edges in the spanning forest.
    pub edge_count: usize,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over zero-based vertex ids.
///
/// Self-loops and out-of-range edges are ignored.
pub(super) fn prim(vertex_count: usize, edges: &[Edge<i64>]) -> PrimResult {
    let adjacency = build_adjacency(vertex_count, edges);
    let mut visited = vec![false; vertex_count];
    let mut result = PrimResult {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    for start in 0..vertex_count {
        if visited[start] {
            continue;
        }
        result.component_count += 1;
        grow_tree(start, &adjacency, &mut visited, &mut result);
    }

    result
}

fn grow_tree(
    start: usize,
    adjacency: &[Vec<(usize, i64)>],
    visited: &mut [bool],
    result: &mut PrimResult,
) {
    let mut frontier = BinaryHeap::new();
    visited[start] = true;
    push_neighbours(start, adjacency, visited, &mut frontier);

    while let Some(Reverse((weight, vertex))) = frontier.pop() {
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;
        result.total_weight += i128::from(weight);
        result.edge_count += 1;
        push_neighbours(vertex, adjacency, visited, &mut frontier);
    }
}

fn push_neighbours(
    vertex: usize,
    adjacency: &[Vec<(usize, i64)>],
    visited: &[bool],
    frontier: &mut BinaryHeap<Reverse<(i64, usize)>>,
) {
    for &(neighbour, weight) in &adjacency[vertex] {
        if !visited[neighbour] {
            frontier.push(Reverse((weight, neighbour)));
        }
    }
}

fn build_adjacency(vertex_count: usize, edges: &[Edge<i64>]) -> Vec<Vec<(usize, i64)>> {
    let mut adjacency = vec![Vec::new(); vertex_count];
    for edge in edges {
        let (a, b) = edge.endpoints();
        if a == b || a >= vertex_count || b >= vertex_count {
            continue;
        }
        adjacency[a].push((b, edge.weight()));
        adjacency[b].push((a, edge.weight()));
    }
    adjacency
}
