//! Command-line interface orchestration for the minspan tool.
//!
//! The CLI offers a `run` command that reads a weighted undirected graph
//! from a file or an interactive console session and prints its minimum
//! spanning tree, or reports that the graph is disconnected.

mod commands;
mod reader;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, FileArgs, RunCommand, RunSource, render_summary,
    run_cli,
};
pub use reader::{GraphInput, GraphReadError, prompt_graph, read_graph};
