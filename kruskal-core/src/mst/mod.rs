//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are validated, stably sorted by ascending weight and scanned once.
//! An edge is selected when its endpoints lie in different components of a
//! [`DisjointSet`], which is then merged. The scan stops as soon as a single
//! component remains. Disconnected inputs yield a minimum spanning forest and
//! the final component count is reported rather than treated as an error.

use tracing::{debug, info, instrument};

use crate::disjoint_set::DisjointSet;
use crate::edge::{Edge, VertexIndexing, Weight};
use crate::error::{KruskalError, Result};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(bound(serialize = "W: serde::Serialize, W::Total: serde::Serialize"))
)]
pub struct MinimumSpanningForest<W: Weight> {
    edges: Vec<Edge<W>>,
    total_weight: W::Total,
    component_count: usize,
}

impl<W: Weight> MinimumSpanningForest<W> {
    /// Returns the selected edges in selection order (ascending weight).
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> W::Total { self.total_weight }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest and returns the selected edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }
}

/// Kruskal selector configured with a vertex id convention.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, Kruskal, VertexIndexing};
///
/// let edges = vec![
///     Edge::new(1, 2, 1_i64),
///     Edge::new(2, 3, 2),
///     Edge::new(3, 4, 3),
///     Edge::new(1, 4, 4),
/// ];
/// let forest = Kruskal::new(VertexIndexing::OneBased).run(4, edges)?;
/// assert_eq!(forest.total_weight(), 6);
/// assert!(forest.is_tree());
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Kruskal {
    indexing: VertexIndexing,
}

impl Kruskal {
    /// Creates a selector interpreting vertex ids with `indexing`.
    #[must_use]
    pub const fn new(indexing: VertexIndexing) -> Self {
        Self { indexing }
    }

    /// Returns the vertex id convention used by this selector.
    #[must_use]
    #[rustfmt::skip]
    pub const fn indexing(&self) -> VertexIndexing { self.indexing }

    /// Computes a minimum spanning forest over `vertex_count` vertices.
    ///
    /// Self-loops are ignored. Equal-weight edges are considered in input
    /// order; any order yields the same total weight.
    ///
    /// # Errors
    /// Returns an error when:
    /// - `vertex_count == 0`
    /// - an edge references a vertex outside the configured id range
    #[instrument(
        name = "core.kruskal",
        err,
        skip(self, edges),
        fields(
            vertex_count = vertex_count,
            edge_count = edges.len(),
            indexing = %self.indexing,
        ),
    )]
    pub fn run<W: Weight>(
        &self,
        vertex_count: usize,
        edges: Vec<Edge<W>>,
    ) -> Result<MinimumSpanningForest<W>> {
        if vertex_count == 0 {
            return Err(KruskalError::EmptyGraph);
        }

        let mut candidates = self.prepare_candidates(vertex_count, edges)?;
        candidates.sort_by_key(|candidate| candidate.edge.weight());

        let mut sets = DisjointSet::new(vertex_count);
        let mut selected = Vec::with_capacity(vertex_count - 1);
        let mut total_weight = W::Total::default();
        let mut evaluated = 0_usize;

        for candidate in &candidates {
            if sets.count() == 1 {
                break;
            }
            evaluated += 1;
            if sets.union(candidate.source_site, candidate.target_site)? {
                selected.push(candidate.edge);
                total_weight = total_weight + candidate.edge.weight().widen();
            }
        }

        debug!(
            evaluated,
            skipped = candidates.len() - evaluated,
            "edge scan finished"
        );
        info!(
            selected = selected.len(),
            components = sets.count(),
            total_weight = %total_weight,
            "spanning forest computed"
        );

        Ok(MinimumSpanningForest {
            edges: selected,
            total_weight,
            component_count: sets.count(),
        })
    }

    fn prepare_candidates<W: Weight>(
        &self,
        vertex_count: usize,
        edges: Vec<Edge<W>>,
    ) -> Result<Vec<Candidate<W>>> {
        let mut candidates = Vec::with_capacity(edges.len());
        let mut self_loops = 0_usize;

        for (edge_index, edge) in edges.into_iter().enumerate() {
            let source_site = self.site(edge_index, edge.source(), vertex_count)?;
            let target_site = self.site(edge_index, edge.target(), vertex_count)?;
            if edge.is_self_loop() {
                self_loops += 1;
                continue;
            }
            candidates.push(Candidate {
                edge,
                source_site,
                target_site,
            });
        }

        if self_loops > 0 {
            debug!(self_loops, "ignored self-loop edges");
        }
        Ok(candidates)
    }

    fn site(&self, edge_index: usize, vertex: usize, vertex_count: usize) -> Result<usize> {
        self.indexing
            .to_site(vertex, vertex_count)
            .ok_or(KruskalError::VertexOutOfRange {
                edge_index,
                vertex,
                vertex_count,
                indexing: self.indexing,
            })
    }
}

/// A validated edge together with its dense disjoint-set sites.
struct Candidate<W> {
    edge: Edge<W>,
    source_site: usize,
    target_site: usize,
}

/// Computes a minimum spanning forest over zero-based vertex ids.
///
/// # Examples
/// ```
/// use kruskal_core::{Edge, minimum_spanning_forest};
///
/// let forest = minimum_spanning_forest(4, vec![Edge::new(0, 1, 1_u32), Edge::new(2, 3, 1)])?;
/// assert_eq!(forest.component_count(), 2);
/// assert_eq!(forest.total_weight(), 2);
/// # Ok::<(), kruskal_core::KruskalError>(())
/// ```
///
/// # Errors
/// See [`Kruskal::run`].
pub fn minimum_spanning_forest<W: Weight>(
    vertex_count: usize,
    edges: Vec<Edge<W>>,
) -> Result<MinimumSpanningForest<W>> {
    Kruskal::default().run(vertex_count, edges)
}
