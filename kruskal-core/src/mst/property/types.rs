//! Type definitions for MST property-based tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use crate::Edge;

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the selector.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Weights drawn from a wide range, so ties are rare.
    Unique,
    /// Large groups of edges share identical weights, stressing tie order.
    ManyIdentical,
    /// Sparse graph with a random spanning tree plus a few extra edges,
    /// including self-loops and parallel edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, generated edges, and the weight distribution
/// used during generation, providing full context for failure diagnosis.
/// Vertex ids are zero-based.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges.
    pub edges: Vec<Edge<i64>>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Short description used in failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the tie-order invariance property.
///
/// Controls how many shuffled copies of each input are fed to the selector.
pub(super) struct TieOrderConfig {
    /// Number of shuffled permutations to evaluate per input.
    pub permutations: usize,
}

impl TieOrderConfig {
    /// Loads the configuration from environment variables, falling back to
    /// sensible defaults.
    ///
    /// The environment variable `KRUSKAL_MST_PBT_PERMUTATIONS` controls the
    /// permutation count (default: 5).
    pub(super) fn load() -> Self {
        let permutations = std::env::var("KRUSKAL_MST_PBT_PERMUTATIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { permutations }
    }
}
