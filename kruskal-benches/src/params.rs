//! Benchmark parameter types.
//!
//! Grouped into structs so Criterion reports stable, readable ids.

use std::fmt;

/// Parameters for a spanning forest benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges generated per vertex.
    pub edges_per_vertex: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.edges_per_vertex)
    }
}

/// Parameters for a disjoint set benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct DisjointSetBenchParams {
    /// Number of sites tracked by the structure.
    pub site_count: usize,
}

impl fmt::Display for DisjointSetBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.site_count)
    }
}
