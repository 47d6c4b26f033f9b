//! Command implementations and argument parsing for the minspan CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use minspan_core::{MinimumSpanningForest, MstError, kruskal};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::reader::{GraphInput, GraphReadError, prompt_graph, read_graph};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "minspan",
    about = "Compute minimum spanning trees with Kruskal's algorithm."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Read a graph and compute its minimum spanning tree.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Graph input source.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Graph input sources.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Read the graph from a text file: a `<vertex_count> <edge_count>`
    /// header followed by one `u v w` line per edge.
    File(FileArgs),
    /// Prompt for the graph on the console, re-asking on invalid input.
    Interactive,
}

/// File ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct FileArgs {
    /// Path to the graph description.
    pub path: PathBuf,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input source.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Graph input was malformed or incomplete.
    #[error(transparent)]
    Read(#[from] GraphReadError),
    /// The core rejected the graph.
    #[error(transparent)]
    Mst(#[from] MstError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Number of vertices in the input graph.
    pub vertex_count: usize,
    /// Number of edges offered to the builder.
    pub edge_count: usize,
    /// The spanning forest computed by the core.
    pub forest: MinimumSpanningForest,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the graph or computing the forest
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minspan_cli::cli::{Cli, Command, FileArgs, RunCommand, RunSource, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "2 1\n0 1 7\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         source: RunSource::File(FileArgs {
///             path: file.path().to_path_buf(),
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.forest.total_weight(), 7.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(name = "cli.execute", err, skip(command), fields(source = field::Empty))]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let graph = match command.source {
        RunSource::File(args) => {
            span.record("source", field::display("file"));
            read_graph_file(&args.path)?
        }
        RunSource::Interactive => {
            span.record("source", field::display("interactive"));
            let stdin = io::stdin();
            let stdout = io::stdout();
            prompt_graph(stdin.lock(), stdout.lock())?
        }
    };
    execute(graph)
}

pub(super) fn execute(graph: GraphInput) -> Result<ExecutionSummary, CliError> {
    let forest = kruskal(graph.vertex_count(), graph.edges())?;
    info!(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edges().len(),
        accepted = forest.edges().len(),
        components = forest.component_count(),
        "minimum spanning forest computed"
    );
    Ok(ExecutionSummary {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edges().len(),
        forest,
    })
}

#[instrument(name = "cli.read_graph_file", err, fields(path = field::Empty))]
pub(super) fn read_graph_file(path: &Path) -> Result<GraphInput, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(read_graph(BufReader::new(file))?)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// A forest with more than one component is reported as disconnected, per
/// the contract that fewer than `n - 1` accepted edges means no spanning
/// tree exists; otherwise the accepted edges are listed in acceptance order
/// followed by the total weight.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use minspan_cli::cli::{ExecutionSummary, render_summary};
/// # use minspan_core::{Edge, kruskal};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     vertex_count: 2,
///     edge_count: 1,
///     forest: kruskal(2, &[Edge::new(0, 1, 7.0)])?,
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner())?;
/// assert!(text.contains("total weight: 7"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    if !summary.forest.is_spanning_tree() {
        writeln!(
            writer,
            "graph is disconnected: no spanning tree exists ({} components)",
            summary.forest.component_count()
        )?;
        return Ok(());
    }

    writeln!(writer, "minimum spanning tree (source, target, weight):")?;
    for edge in summary.forest.edges() {
        writeln!(
            writer,
            "({}, {}, {})",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writeln!(writer, "total weight: {}", summary.forest.total_weight())?;
    Ok(())
}
