//! Graph input parsing for batch files and interactive console sessions.
//!
//! The batch format is a header line `<vertex_count> <edge_count>` followed
//! by one `u v w` line per edge (endpoints then weight). The interactive
//! reader prompts for the same values and re-prompts on malformed numbers or
//! out-of-range endpoints, so the core never sees invalid input.

use std::io::{self, BufRead, Write};

use minspan_core::Edge;
use thiserror::Error;

/// A validated graph description: vertex count plus weighted edge list.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphInput {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl GraphInput {
    /// Creates a graph description from already-validated parts.
    #[must_use]
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edge list.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }
}

/// Errors raised while reading a graph description.
#[derive(Debug, Error)]
pub enum GraphReadError {
    /// Reading from the input stream failed.
    #[error("failed to read graph input: {source}")]
    Io {
        /// Underlying operating system error.
        #[from]
        source: io::Error,
    },
    /// The input ended before the announced data was complete.
    #[error("input ended unexpectedly after line {line_number}")]
    UnexpectedEnd {
        /// Number of the last line that was read.
        line_number: usize,
    },
    /// A line did not parse as the expected numbers.
    #[error("line {line_number} is malformed: expected {expected}, got `{content}`")]
    Malformed {
        /// Number of the offending line.
        line_number: usize,
        /// Description of the expected shape.
        expected: &'static str,
        /// The raw line content.
        content: String,
    },
    /// An edge endpoint fell outside `[0, vertex_count)`.
    #[error(
        "line {line_number}: vertex {vertex} is out of range for a graph with {vertex_count} vertices"
    )]
    VertexOutOfRange {
        /// Number of the offending line.
        line_number: usize,
        /// The out-of-range endpoint.
        vertex: usize,
        /// The announced vertex count.
        vertex_count: usize,
    },
}

/// Reads a complete graph description from a batch source.
///
/// Blank lines are skipped. Unlike the interactive reader there is no
/// re-prompting: the first malformed or out-of-range line aborts the parse.
///
/// # Errors
/// Returns [`GraphReadError`] when the stream fails, ends early, or contains
/// a malformed or out-of-range line.
pub fn read_graph(reader: impl BufRead) -> Result<GraphInput, GraphReadError> {
    let mut lines = reader.lines();
    let mut line_number = 0;

    let header = next_line(&mut lines, &mut line_number)?;
    let (vertex_count, edge_count) = parse_header(&header, line_number)?;

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let line = next_line(&mut lines, &mut line_number)?;
        edges.push(parse_edge(&line, line_number, vertex_count)?);
    }

    Ok(GraphInput {
        vertex_count,
        edges,
    })
}

/// Reads a graph description interactively, prompting on `output`.
///
/// Malformed numeric input and out-of-range endpoints produce a user-facing
/// message and a re-prompt rather than an error; only stream failures and
/// end-of-input abort the session.
///
/// # Errors
/// Returns [`GraphReadError::Io`] when the streams fail and
/// [`GraphReadError::UnexpectedEnd`] when input ends mid-session.
pub fn prompt_graph(
    mut input: impl BufRead,
    mut output: impl Write,
) -> Result<GraphInput, GraphReadError> {
    let mut line_number = 0;

    let vertex_count = prompt_number(
        &mut input,
        &mut output,
        &mut line_number,
        "Number of vertices: ",
    )?;
    let edge_count = prompt_number(
        &mut input,
        &mut output,
        &mut line_number,
        "Number of edges: ",
    )?;

    writeln!(output, "Enter each edge as `u v w` (endpoints then weight).")?;
    if vertex_count > 0 {
        writeln!(output, "Vertices are numbered 0 to {}.", vertex_count - 1)?;
    }

    let mut edges = Vec::with_capacity(edge_count);
    for index in 0..edge_count {
        edges.push(prompt_edge(
            &mut input,
            &mut output,
            &mut line_number,
            index,
            vertex_count,
        )?);
    }

    Ok(GraphInput {
        vertex_count,
        edges,
    })
}

fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    line_number: &mut usize,
) -> Result<String, GraphReadError> {
    loop {
        let Some(line) = lines.next() else {
            return Err(GraphReadError::UnexpectedEnd {
                line_number: *line_number,
            });
        };
        let line = line?;
        *line_number += 1;
        if !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

fn parse_header(line: &str, line_number: usize) -> Result<(usize, usize), GraphReadError> {
    let malformed = || GraphReadError::Malformed {
        line_number,
        expected: "`<vertex_count> <edge_count>`",
        content: line.trim().to_owned(),
    };

    let mut tokens = line.split_whitespace();
    let vertex_count = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    let edge_count = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }
    Ok((vertex_count, edge_count))
}

fn parse_edge(
    line: &str,
    line_number: usize,
    vertex_count: usize,
) -> Result<Edge, GraphReadError> {
    let malformed = || GraphReadError::Malformed {
        line_number,
        expected: "`<source> <target> <weight>`",
        content: line.trim().to_owned(),
    };

    let mut tokens = line.split_whitespace();
    let source: usize = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    let target: usize = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    let weight: f64 = tokens
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(malformed)?;
    if tokens.next().is_some() {
        return Err(malformed());
    }

    for vertex in [source, target] {
        if vertex >= vertex_count {
            return Err(GraphReadError::VertexOutOfRange {
                line_number,
                vertex,
                vertex_count,
            });
        }
    }

    Ok(Edge::new(source, target, weight))
}

fn prompt_number(
    input: &mut impl BufRead,
    output: &mut impl Write,
    line_number: &mut usize,
    prompt: &str,
) -> Result<usize, GraphReadError> {
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;
        let line = read_line(input, line_number)?;
        match line.trim().parse() {
            Ok(value) => return Ok(value),
            Err(_) => {
                writeln!(output, "Error: expected a non-negative whole number.")?;
            }
        }
    }
}

fn prompt_edge(
    input: &mut impl BufRead,
    output: &mut impl Write,
    line_number: &mut usize,
    index: usize,
    vertex_count: usize,
) -> Result<Edge, GraphReadError> {
    loop {
        write!(output, "Edge {}: ", index + 1)?;
        output.flush()?;
        let line = read_line(input, line_number)?;
        match parse_edge(&line, *line_number, vertex_count) {
            Ok(edge) => return Ok(edge),
            Err(GraphReadError::VertexOutOfRange { vertex_count, .. }) => {
                writeln!(
                    output,
                    "Error: vertex numbers must be between 0 and {}.",
                    vertex_count.saturating_sub(1)
                )?;
            }
            Err(GraphReadError::Malformed { .. }) => {
                writeln!(output, "Error: expected three numbers separated by spaces.")?;
            }
            Err(other) => return Err(other),
        }
    }
}

fn read_line(
    input: &mut impl BufRead,
    line_number: &mut usize,
) -> Result<String, GraphReadError> {
    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(GraphReadError::UnexpectedEnd {
            line_number: *line_number,
        });
    }
    *line_number += 1;
    Ok(line)
}
