//! Command implementations and argument parsing for the kruskal CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use kruskal_core::{Edge, Kruskal, KruskalError, MinimumSpanningForest, VertexIndexing};
use kruskal_providers_text::{TextGraphProvider, TextProviderError};
use serde::Serialize;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Path argument that selects standard input.
const STDIN_PATH: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "kruskal",
    about = "Compute the minimum spanning tree of a weighted undirected graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read a graph and print its minimum spanning tree or forest.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph file in `N M` + `M × (v1 v2 cost)` format; `-` or omitted reads stdin.
    pub path: Option<PathBuf>,

    /// How vertex ids in the input are numbered.
    #[arg(long, value_enum, default_value_t = IndexingArg::OneBased)]
    pub indexing: IndexingArg,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Vertex id conventions accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndexingArg {
    /// Vertices are numbered `1..=N`.
    OneBased,
    /// Vertices are numbered `0..N`.
    ZeroBased,
}

impl From<IndexingArg> for VertexIndexing {
    fn from(value: IndexingArg) -> Self {
        match value {
            IndexingArg::OneBased => Self::OneBased,
            IndexingArg::ZeroBased => Self::ZeroBased,
        }
    }
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cost line, counts, then one tab-separated line per selected edge.
    Human,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The graph text could not be parsed.
    #[error(transparent)]
    Input(#[from] TextProviderError),
    /// The spanning forest computation failed.
    #[error(transparent)]
    Core(#[from] KruskalError),
}

impl CliError {
    /// Returns the stable machine-readable code for this failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_INPUT_OPEN_FAILED",
            Self::Input(error) => error.code().as_str(),
            Self::Core(error) => error.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the graph was read from: a path, or `stdin`.
    pub input: String,
    /// Selected edges, total cost and component count.
    pub forest: MinimumSpanningForest<i64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, or when the
/// graph is rejected by the selector.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{Cli, Command, IndexingArg, OutputFormat, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3 3\n1 2 5\n2 3 5\n1 3 5\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: Some(file.path().to_path_buf()),
///         indexing: IndexingArg::OneBased,
///         format: OutputFormat::Human,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 10);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(input = field::Empty, indexing = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let path = command
        .path
        .as_deref()
        .filter(|path| path.as_os_str() != STDIN_PATH);
    let input = path.map_or_else(|| "stdin".to_owned(), |path| path.display().to_string());
    let indexing = VertexIndexing::from(command.indexing);

    let span = Span::current();
    span.record("input", field::display(&input));
    span.record("indexing", field::display(indexing));

    let provider = match path {
        Some(path) => TextGraphProvider::try_from_reader(open_graph_file(path)?)?,
        None => TextGraphProvider::try_from_reader(io::stdin().lock())?,
    };
    let (vertex_count, edges) = provider.into_parts();
    let forest = Kruskal::new(indexing).run(vertex_count, edges)?;

    info!(
        input = input.as_str(),
        components = forest.component_count(),
        "command completed"
    );
    Ok(ExecutionSummary { input, forest })
}

#[instrument(name = "cli.open_graph_file", err, fields(path = field::Empty))]
pub(super) fn open_graph_file(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    total_weight: i128,
    component_count: usize,
    is_tree: bool,
    edges: &'a [Edge<i64>],
}

/// Renders `summary` to `writer` in the requested `format`.
///
/// The human format starts with the cost line, naming a forest instead of a
/// tree when the graph is disconnected.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use kruskal_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use kruskal_core::{Edge, Kruskal, VertexIndexing};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let forest = Kruskal::new(VertexIndexing::OneBased).run(2, vec![Edge::new(1, 2, 7_i64)])?;
/// let summary = ExecutionSummary { input: "demo".into(), forest };
/// let mut buffer = Vec::new();
/// render_summary(&summary, OutputFormat::Human, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "Cost of the minimum spanning tree: 7\ncomponents: 1\nedges: 1\n1\t2\t7\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(
    summary: &ExecutionSummary,
    format: OutputFormat,
    mut writer: impl Write,
) -> io::Result<()> {
    let forest = &summary.forest;
    match format {
        OutputFormat::Human => {
            let shape = if forest.is_tree() { "tree" } else { "forest" };
            writeln!(
                writer,
                "Cost of the minimum spanning {shape}: {}",
                forest.total_weight()
            )?;
            writeln!(writer, "components: {}", forest.component_count())?;
            writeln!(writer, "edges: {}", forest.edges().len())?;
            for edge in forest.edges() {
                writeln!(
                    writer,
                    "{}\t{}\t{}",
                    edge.source(),
                    edge.target(),
                    edge.weight()
                )?;
            }
        }
        OutputFormat::Json => {
            let payload = JsonSummary {
                total_weight: forest.total_weight(),
                component_count: forest.component_count(),
                is_tree: forest.is_tree(),
                edges: forest.edges(),
            };
            serde_json::to_writer(&mut writer, &payload)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
