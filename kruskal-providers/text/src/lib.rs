//! Text provider reading weighted graphs from whitespace-separated input.
//!
//! The format is a vertex count `N` and edge count `M` followed by `M`
//! triples `v1 v2 cost`. Line breaks are insignificant.

mod errors;
mod provider;
mod tokens;

pub use crate::{
    errors::{Field, TextProviderError, TextProviderErrorCode},
    provider::TextGraphProvider,
    tokens::{Token, TokenReader},
};
