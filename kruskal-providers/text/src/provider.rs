use std::io::BufRead;

use kruskal_core::Edge;
use tracing::debug;

use crate::errors::{Field, TextProviderError};
use crate::tokens::TokenReader;

/// Upper bound on edges reserved up front from the declared edge count.
const MAX_PREALLOCATED_EDGES: usize = 1 << 16;

/// Weighted graph parsed from the `N M` + `M × (v1 v2 cost)` text format.
///
/// Vertex ids are kept exactly as written. Range checking belongs to the
/// selector, which knows the indexing convention.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextGraphProvider {
    vertex_count: usize,
    edges: Vec<Edge<i64>>,
}

impl TextGraphProvider {
    /// Parses a graph from a buffered reader.
    ///
    /// # Errors
    /// Returns [`TextProviderError`] when the input is empty, truncated,
    /// holds a non-numeric token, or cannot be read.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use kruskal_providers_text::TextGraphProvider;
    ///
    /// let graph = TextGraphProvider::try_from_reader(Cursor::new("3 2\n1 2 4\n2 3 -1\n"))?;
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.edges().len(), 2);
    /// # Ok::<(), kruskal_providers_text::TextProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, TextProviderError> {
        Self::try_from_tokens(&mut TokenReader::new(reader))
    }

    /// Parses a graph from a caller-owned token stream.
    ///
    /// Tokens after the last declared edge are left unread.
    ///
    /// # Errors
    /// See [`TextGraphProvider::try_from_reader`].
    pub fn try_from_tokens<R: BufRead>(
        tokens: &mut TokenReader<R>,
    ) -> Result<Self, TextProviderError> {
        let vertex_count = tokens
            .next_token()?
            .ok_or(TextProviderError::EmptyInput)?
            .parse::<usize>(Field::VertexCount)?;
        let edge_count: usize = tokens.next_value(Field::EdgeCount)?;

        let mut edges = Vec::with_capacity(edge_count.min(MAX_PREALLOCATED_EDGES));
        for edge in 0..edge_count {
            let source = tokens.next_value(Field::Source { edge })?;
            let target = tokens.next_value(Field::Target { edge })?;
            let weight = tokens.next_value(Field::Cost { edge })?;
            edges.push(Edge::new(source, target, weight));
        }

        debug!(
            vertex_count,
            edge_count,
            lines = tokens.lines_read(),
            "parsed graph input"
        );
        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Returns the declared vertex count `N`.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the parsed edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge<i64>] {
        &self.edges
    }

    /// Splits the provider into the vertex count and owned edges, ready to
    /// hand to [`kruskal_core::Kruskal::run`].
    #[must_use]
    pub fn into_parts(self) -> (usize, Vec<Edge<i64>>) {
        (self.vertex_count, self.edges)
    }
}
