//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` so Criterion entry points can
//! report them in one place.

use kruskal_core::KruskalError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// The requested edge count does not fit in memory-addressable sizes.
    #[error("{vertex_count} vertices with {edges_per_vertex} edges each overflows usize")]
    EdgeCountOverflow {
        /// Requested vertex count.
        vertex_count: usize,
        /// Requested average degree.
        edges_per_vertex: usize,
    },
    /// The selector rejected a generated graph.
    #[error("minimum spanning forest computation failed: {0}")]
    Kruskal(#[from] KruskalError),
}
