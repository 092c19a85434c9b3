use std::fmt;

use thiserror::Error;

/// Identifies which value of the input a token was expected to hold.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Field {
    /// Leading vertex count `N`.
    VertexCount,
    /// Declared edge count `M`.
    EdgeCount,
    /// First endpoint of the edge at the given zero-based position.
    Source { edge: usize },
    /// Second endpoint of the edge at the given zero-based position.
    Target { edge: usize },
    /// Cost of the edge at the given zero-based position.
    Cost { edge: usize },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexCount => f.write_str("vertex count"),
            Self::EdgeCount => f.write_str("edge count"),
            Self::Source { edge } => write!(f, "source of edge {edge}"),
            Self::Target { edge } => write!(f, "target of edge {edge}"),
            Self::Cost { edge } => write!(f, "cost of edge {edge}"),
        }
    }
}

/// Errors raised while reading a graph from text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextProviderError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended while reading the {expected}")]
    UnexpectedEof { expected: Field },
    #[error("line {line}: `{token}` is not a valid {field}")]
    InvalidNumber {
        field: Field,
        token: String,
        line: usize,
    },
    #[error("input contains no tokens")]
    EmptyInput,
}

/// Stable codes describing [`TextProviderError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TextProviderErrorCode {
    Io,
    UnexpectedEof,
    InvalidNumber,
    EmptyInput,
}

impl TextProviderErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "TEXT_PROVIDER_IO",
            Self::UnexpectedEof => "TEXT_PROVIDER_UNEXPECTED_EOF",
            Self::InvalidNumber => "TEXT_PROVIDER_INVALID_NUMBER",
            Self::EmptyInput => "TEXT_PROVIDER_EMPTY_INPUT",
        }
    }
}

impl fmt::Display for TextProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TextProviderError {
    /// Retrieve the stable [`TextProviderErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> TextProviderErrorCode {
        match self {
            Self::Io(_) => TextProviderErrorCode::Io,
            Self::UnexpectedEof { .. } => TextProviderErrorCode::UnexpectedEof,
            Self::InvalidNumber { .. } => TextProviderErrorCode::InvalidNumber,
            Self::EmptyInput => TextProviderErrorCode::EmptyInput,
        }
    }
}
