//! Command-line interface orchestration for the kruskal binary.
//!
//! The CLI offers a single `run` command that reads a weighted graph from a
//! file or stdin, computes its minimum spanning tree (or forest) and renders
//! the result as text or JSON.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, IndexingArg, OutputFormat, RunCommand,
    render_summary, run_cli,
};
