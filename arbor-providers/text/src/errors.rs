//! Error type for the textual edge-list provider.

use arbor_core::MstError;
use thiserror::Error;

/// Errors raised while reading or writing the textual edge-list format.
#[derive(Debug, Error)]
pub enum TextGraphError {
    /// Reading or writing the underlying stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The input ended before a required token.
    #[error("unexpected end of input: expected {expected}")]
    MissingToken {
        /// Name of the token that was expected next.
        expected: &'static str,
    },
    /// A token could not be parsed as the required integer.
    #[error("line {line}: `{token}` is not a valid {expected}")]
    InvalidNumber {
        /// Raw token text.
        token: String,
        /// Name of the value the token was meant to hold.
        expected: &'static str,
        /// 1-based line holding the token.
        line: usize,
    },
    /// The header declares more vertices than the reader accepts.
    #[error("line {line}: vertex count {vertex_count} exceeds the limit of {limit}")]
    TooManyVertices {
        /// Vertex count declared by the header.
        vertex_count: usize,
        /// Largest accepted vertex count.
        limit: usize,
        /// 1-based line holding the vertex count.
        line: usize,
    },
    /// An edge names a vertex outside `1..=vertex_count`.
    #[error("line {line}: vertex {vertex} is outside 1..={vertex_count}")]
    VertexOutOfRange {
        /// 1-based vertex number as written.
        vertex: usize,
        /// Vertex count declared by the header.
        vertex_count: usize,
        /// 1-based line holding the vertex number.
        line: usize,
    },
    /// Tokens follow the last declared edge.
    #[error("line {line}: unexpected trailing token `{token}`")]
    TrailingData {
        /// First surplus token.
        token: String,
        /// 1-based line holding the token.
        line: usize,
    },
    /// The core graph rejected the parsed data.
    #[error("graph error: {0}")]
    Graph(#[from] MstError),
}
