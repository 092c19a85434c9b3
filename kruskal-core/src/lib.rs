//! Kruskal core library.
//!
//! Computes minimum spanning trees, or minimum spanning forests when the
//! graph is disconnected, with Kruskal's algorithm over a union-find
//! structure using path compression and union by rank.
//!
//! # Examples
//! ```
//! use kruskal_core::{Edge, Kruskal, VertexIndexing};
//!
//! let forest = Kruskal::new(VertexIndexing::OneBased).run(
//!     4,
//!     vec![Edge::new(1, 2, 1_i64), Edge::new(3, 4, 1)],
//! )?;
//! assert_eq!(forest.component_count(), 2);
//! assert_eq!(forest.total_weight(), 2);
//! # Ok::<(), kruskal_core::KruskalError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod edge;
mod error;
mod mst;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    edge::{Edge, VertexIndexing, Weight},
    error::{DisjointSetError, DisjointSetErrorCode, KruskalError, KruskalErrorCode, Result},
    mst::{Kruskal, MinimumSpanningForest, minimum_spanning_forest},
};
