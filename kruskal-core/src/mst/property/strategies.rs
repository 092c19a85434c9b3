//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator builds a list of zero-based
//! [`Edge`] values with `i64` weights.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 8;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 64;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 32;
/// Upper bound (exclusive) for continuous weights.
const MAX_WEIGHT: i64 = 1_000_000;

/// Generates MST fixtures covering all five weight distributions.
///
/// Uses `prop_oneof!` with weighting that biases towards the
/// `ManyIdentical` distribution (the main stress case for tie handling).
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Configuration for probabilistic graph generation, grouping the
/// parameters that vary between weight-distribution strategies.
struct ProbabilisticGraphConfig {
    /// Upper bound for the random vertex count (inclusive).
    max_vertices: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    /// Weight distribution label for the resulting fixture.
    distribution: WeightDistribution,
}

/// Generates a graph by probabilistically adding edges between all unique
/// vertex pairs, using a caller-supplied weight generator.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=config.max_vertices);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut edges = Vec::new();

    for (i, j) in all_pairs(0, vertex_count) {
        if rng.gen_bool(edge_probability) {
            let weight = weight_generator(rng);
            edges.push(oriented(i, j, weight, rng));
        }
    }

    if edges.is_empty() {
        let weight = weight_generator(rng);
        edges.push(Edge::new(0, 1, weight));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: config.distribution,
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Generates a graph whose weights are drawn from a wide range, so the MST
/// is almost always unique.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        |r| r.gen_range(-MAX_WEIGHT..MAX_WEIGHT),
    )
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight.
///
/// Many different edge sets are minimal for such graphs, which exercises
/// the guarantee that only the total weight is fixed.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<i64> = (0..weight_pool_size)
        .map(|_| rng.gen_range(1..=10))
        .collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse graph by first building a random spanning tree
/// (guaranteeing connectivity) and then adding a small number of extra
/// edges. Extra edges may be self-loops or parallel to existing edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    for pair in perm.windows(2) {
        let weight = rng.gen_range(0..MAX_WEIGHT);
        edges.push(oriented(pair[0], pair[1], weight, rng));
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(0..MAX_WEIGHT);
        edges.push(Edge::new(i, j, weight));
    }

    shuffle(&mut edges, rng);
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a dense graph approaching a complete graph, with vertex count
/// capped at [`DENSE_MAX_VERTICES`].
fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: DENSE_MAX_VERTICES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        |r| r.gen_range(0..MAX_WEIGHT),
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 disconnected components, each having random
/// internal structure. No cross-component edges are created. Single-vertex
/// components are allowed.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for &size in &component_sizes {
        generate_component(&mut edges, offset, size, rng);
        offset += size;
    }

    shuffle(&mut edges, rng);
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Generates a connected component on `offset..offset + size`: a path
/// through every vertex plus random chords.
fn generate_component(edges: &mut Vec<Edge<i64>>, offset: usize, size: usize, rng: &mut SmallRng) {
    for vertex in offset + 1..offset + size {
        let weight = rng.gen_range(0..100);
        edges.push(oriented(vertex - 1, vertex, weight, rng));
    }

    let chord_probability: f64 = rng.gen_range(0.1..=0.5);
    for (i, j) in all_pairs(offset, size) {
        if j > i + 1 && rng.gen_bool(chord_probability) {
            let weight = rng.gen_range(0..100);
            edges.push(oriented(i, j, weight, rng));
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Builds an edge with a randomly chosen endpoint order.
fn oriented(a: usize, b: usize, weight: i64, rng: &mut SmallRng) -> Edge<i64> {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

/// Returns all unique undirected pairs `(offset + i, offset + j)` where
/// `i < j < size`.
fn all_pairs(offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((offset + i, offset + j));
        }
    }
    pairs
}

/// Fisher-Yates shuffle using the provided RNG.
pub(super) fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Proptest `Arbitrary` implementation for `WeightDistribution` is provided
// manually because we want biased weighting (ManyIdentical is the most
// important stress case).
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
