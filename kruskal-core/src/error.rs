//! Error types for the Kruskal core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::edge::VertexIndexing;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// A site index fell outside the structure's bounds.
    #[error("site {site} is out of bounds for a disjoint set of size {size}")]
    SiteOutOfBounds {
        /// The offending site index.
        site: usize,
        /// Number of sites tracked by the structure.
        size: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// A site index fell outside the structure's bounds.
        SiteOutOfBounds => SiteOutOfBounds { .. } => "DISJOINT_SET_SITE_OUT_OF_BOUNDS",
    }
}

/// Error type produced while computing a minimum spanning forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KruskalError {
    /// The caller requested a spanning forest over zero vertices.
    #[error("cannot compute a spanning forest for an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex id outside the graph.
    #[error(
        "edge {edge_index} references vertex {vertex}, outside the {indexing} range of {vertex_count} vertices"
    )]
    VertexOutOfRange {
        /// Position of the offending edge in the input list.
        edge_index: usize,
        /// The invalid vertex id, as supplied.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Id convention the edge was validated against.
        indexing: VertexIndexing,
    },
    /// The disjoint-set backing the selector rejected an operation.
    #[error("disjoint set operation failed: {error}")]
    DisjointSet {
        /// Underlying disjoint-set error.
        #[from]
        error: DisjointSetError,
    },
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// The caller requested a spanning forest over zero vertices.
        EmptyGraph => EmptyGraph => "KRUSKAL_EMPTY_GRAPH",
        /// An edge referenced a vertex id outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "KRUSKAL_VERTEX_OUT_OF_RANGE",
        /// The disjoint-set backing the selector rejected an operation.
        DisjointSetFailure => DisjointSet { .. } => "KRUSKAL_DISJOINT_SET_FAILURE",
    }
}

impl KruskalError {
    /// Retrieve the inner [`DisjointSetErrorCode`] when the error originated in a
    /// [`crate::DisjointSet`].
    #[must_use]
    pub const fn disjoint_set_code(&self) -> Option<DisjointSetErrorCode> {
        match self {
            Self::DisjointSet { error } => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;
