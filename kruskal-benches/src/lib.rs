//! Benchmark support crate for kruskal.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks for the disjoint set and the Kruskal selector.

pub mod error;
pub mod graph;
pub mod params;
