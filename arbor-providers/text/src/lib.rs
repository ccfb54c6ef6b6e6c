//! Text provider for whitespace-separated weighted edge lists.
//!
//! The format starts with the vertex count `n` and edge count `m`, followed
//! by `m` triples `u v w`: two 1-based vertex numbers and an integer weight.
//! Tokens may be spread across lines freely; lines whose first non-blank
//! character is `#` are comments.
//!
//! ```text
//! # triangle
//! 3 3
//! 1 2 1
//! 2 3 2
//! 1 3 3
//! ```

mod errors;
mod tokens;

use std::io::{BufRead, Write};

use arbor_core::{AdjacencyGraph, Edge, Weight, WeightedGraph};
use tracing::debug;

pub use crate::errors::TextGraphError;
use crate::tokens::Tokens;

/// Largest vertex count [`read_graph`] accepts from a header.
///
/// Adjacency lists are allocated from the header before any edge is read,
/// so the count is capped to keep a malformed header from exhausting memory.
pub const MAX_VERTEX_COUNT: usize = 1 << 26;

/// Parses a graph from the textual edge-list format.
///
/// Edge identifiers follow the order of the triples in the input, and vertex
/// `k` of the text becomes vertex `k - 1` of the returned graph.
///
/// # Errors
/// Returns [`TextGraphError`] when the input cannot be read, a token is
/// missing or malformed, the vertex count exceeds [`MAX_VERTEX_COUNT`], a
/// vertex number falls outside `1..=n`, or tokens remain after the last
/// declared edge.
///
/// # Examples
/// ```
/// use arbor_core::WeightedGraph;
/// use arbor_providers_text::read_graph;
///
/// let graph = read_graph("3 2\n1 2 5\n2 3 -1\n".as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge(1).map(|edge| edge.weight()), Some(-1));
/// # Ok::<(), arbor_providers_text::TextGraphError>(())
/// ```
pub fn read_graph<R: BufRead>(reader: R) -> Result<AdjacencyGraph, TextGraphError> {
    let mut tokens = Tokens::new(reader);
    let (vertex_count, line) = tokens.parse::<usize>("vertex count")?;
    if vertex_count > MAX_VERTEX_COUNT {
        return Err(TextGraphError::TooManyVertices {
            vertex_count,
            limit: MAX_VERTEX_COUNT,
            line,
        });
    }
    let (edge_count, _) = tokens.parse::<usize>("edge count")?;

    let mut graph = AdjacencyGraph::try_new(vertex_count)?;
    for _ in 0..edge_count {
        let from = vertex(&mut tokens, vertex_count)?;
        let to = vertex(&mut tokens, vertex_count)?;
        let (weight, _) = tokens.parse::<Weight>("edge weight")?;
        graph.add_edge(from, to, weight)?;
    }

    if let Some(token) = tokens.next_token()? {
        return Err(TextGraphError::TrailingData {
            token: token.text,
            line: token.line,
        });
    }
    debug!(vertex_count, edge_count, "text graph parsed");
    Ok(graph)
}

fn vertex<R: BufRead>(tokens: &mut Tokens<R>, vertex_count: usize) -> Result<usize, TextGraphError> {
    let (vertex, line) = tokens.parse::<usize>("vertex number")?;
    if vertex == 0 || vertex > vertex_count {
        return Err(TextGraphError::VertexOutOfRange {
            vertex,
            vertex_count,
            line,
        });
    }
    Ok(vertex - 1)
}

/// Writes `graph` in the textual edge-list format, one edge per line.
///
/// # Errors
/// Returns [`TextGraphError::Io`] when writing fails.
///
/// # Examples
/// ```
/// use arbor_core::AdjacencyGraph;
/// use arbor_providers_text::write_graph;
///
/// let graph = AdjacencyGraph::from_edges(2, [(0, 1, 7)])?;
/// let mut out = Vec::new();
/// write_graph(&mut out, &graph)?;
/// assert_eq!(String::from_utf8_lossy(&out), "2 1\n1 2 7\n");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_graph<W: Write, G: WeightedGraph>(
    mut writer: W,
    graph: &G,
) -> Result<(), TextGraphError> {
    writeln!(writer, "{} {}", graph.vertex_count(), graph.edge_count())?;
    write_edges(&mut writer, graph.edges())?;
    Ok(())
}

/// Writes `edges` as 1-based `u v w` lines.
///
/// # Errors
/// Returns [`TextGraphError::Io`] when writing fails.
pub fn write_edges<W: Write>(mut writer: W, edges: &[Edge]) -> Result<(), TextGraphError> {
    for edge in edges {
        writeln!(writer, "{} {} {}", edge.from() + 1, edge.to() + 1, edge.weight())?;
    }
    Ok(())
}
