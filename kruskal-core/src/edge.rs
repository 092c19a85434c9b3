//! Passive graph value types consumed by the Kruskal selector.
//!
//! An [`Edge`] pairs two vertex ids with a totally ordered [`Weight`]. Vertex
//! ids are plain `usize` values interpreted through a [`VertexIndexing`]
//! convention, so inputs numbered from one can be used without rewriting.

use std::fmt;
use std::ops::Add;

/// A totally ordered edge weight with a wider accumulator for totals.
///
/// Summing many weights of the edge type could overflow, so every weight type
/// names a wider [`Weight::Total`] used for aggregate costs.
///
/// # Examples
/// ```
/// use kruskal_core::Weight;
///
/// let total = i32::MAX.widen() + i32::MAX.widen();
/// assert_eq!(total, 2 * i64::from(i32::MAX));
/// ```
pub trait Weight: Copy + Ord + fmt::Debug {
    /// Accumulator type for sums of weights.
    type Total: Copy + Default + Add<Output = Self::Total> + fmt::Debug + fmt::Display + PartialEq;

    /// Converts the weight into the accumulator type.
    fn widen(self) -> Self::Total;
}

macro_rules! impl_weight {
    ($($weight:ty => $total:ty),+ $(,)?) => {
        $(
            impl Weight for $weight {
                type Total = $total;

                #[inline]
                fn widen(self) -> Self::Total {
                    <$total>::from(self)
                }
            }
        )+
    };
}

impl_weight! {
    i8 => i64,
    i16 => i64,
    i32 => i64,
    i64 => i128,
    u8 => u64,
    u16 => u64,
    u32 => u64,
    u64 => u128,
}

impl Weight for usize {
    type Total = u128;

    #[inline]
    fn widen(self) -> Self::Total {
        // usize is at most 64 bits on every supported target.
        self as u128
    }
}

/// Convention used to interpret vertex ids.
///
/// # Examples
/// ```
/// use kruskal_core::VertexIndexing;
///
/// assert_eq!(VertexIndexing::OneBased.to_site(1, 4), Some(0));
/// assert_eq!(VertexIndexing::OneBased.to_site(0, 4), None);
/// assert_eq!(VertexIndexing::ZeroBased.to_site(3, 4), Some(3));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum VertexIndexing {
    /// Vertices are numbered `0..vertex_count`.
    #[default]
    ZeroBased,
    /// Vertices are numbered `1..=vertex_count`.
    OneBased,
}

impl VertexIndexing {
    /// Returns the smallest valid vertex id.
    #[must_use]
    pub const fn first(self) -> usize {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }

    /// Maps `vertex` to a dense site index in `0..vertex_count`.
    ///
    /// Returns `None` when the id lies outside the valid range.
    #[must_use]
    pub const fn to_site(self, vertex: usize, vertex_count: usize) -> Option<usize> {
        match vertex.checked_sub(self.first()) {
            Some(site) if site < vertex_count => Some(site),
            _ => None,
        }
    }

    /// Returns the stable kebab-case name of the convention.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroBased => "zero-based",
            Self::OneBased => "one-based",
        }
    }
}

impl fmt::Display for VertexIndexing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An undirected weighted edge.
///
/// Endpoints are stored exactly as supplied; the selector never rewrites
/// them, so selected edges can be matched back to the input.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge<W> {
    source: usize,
    target: usize,
    weight: W,
}

impl<W: Weight> Edge<W> {
    /// Creates an edge between `source` and `target`.
    ///
    /// # Examples
    /// ```
    /// use kruskal_core::Edge;
    ///
    /// let edge = Edge::new(1, 2, 7_i64);
    /// assert_eq!(edge.endpoints(), (1, 2));
    /// assert_eq!(edge.weight(), 7);
    /// ```
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: W) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> W { self.weight }

    /// Returns both endpoints as `(source, target)`.
    #[must_use]
    pub const fn endpoints(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<W: Weight> From<(usize, usize, W)> for Edge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Self::new(source, target, weight)
    }
}
