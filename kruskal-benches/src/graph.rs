//! Seeded synthetic graphs for spanning forest benchmarks.
//!
//! Every graph contains a random spanning path, so it is connected, plus
//! uniformly sampled extra edges up to the requested density. Ids are
//! zero-based.

use kruskal_core::Edge;
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};

use crate::error::BenchSetupError;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Target number of edges per vertex, including the spanning path.
    pub edges_per_vertex: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// A generated graph ready to feed into the selector.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<Edge<i64>>,
}

impl SyntheticGraph {
    /// Generates a connected graph from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when the vertex count or the
    /// maximum weight is zero, and [`BenchSetupError::EdgeCountOverflow`]
    /// when the requested density cannot be represented.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        let SyntheticGraphConfig {
            vertex_count,
            edges_per_vertex,
            max_weight,
            seed,
        } = *config;
        if vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if max_weight == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "max_weight",
            });
        }
        let requested = vertex_count.checked_mul(edges_per_vertex).ok_or(
            BenchSetupError::EdgeCountOverflow {
                vertex_count,
                edges_per_vertex,
            },
        )?;
        let edge_count = requested.max(vertex_count - 1);

        let mut rng = SmallRng::seed_from_u64(seed);
        let weight_range = 1..=i64::from(max_weight);
        let mut edges = Vec::with_capacity(edge_count);

        let mut order: Vec<usize> = (0..vertex_count).collect();
        order.shuffle(&mut rng);
        for window in order.windows(2) {
            if let [source, target] = *window {
                edges.push(Edge::new(source, target, rng.gen_range(weight_range.clone())));
            }
        }

        if vertex_count > 1 {
            while edges.len() < edge_count {
                let source = rng.gen_range(0..vertex_count);
                let target = rng.gen_range(0..vertex_count);
                if source != target {
                    edges.push(Edge::new(source, target, rng.gen_range(weight_range.clone())));
                }
            }
        }

        edges.shuffle(&mut rng);
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the generated edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge<i64>] {
        &self.edges
    }
}
