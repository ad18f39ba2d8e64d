use thiserror::Error;

use crate::graph::Vertex;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures of graph construction, heap operations and shortest-path runs.
///
/// None of these are recoverable for the run that produced them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("vertex {0} is not present")]
    UnknownVertex(Vertex),

    #[error("vertex {0} is already in the heap")]
    DuplicateVertex(Vertex),

    #[error("extract-min on an empty heap")]
    EmptyHeap,

    #[error("edge {from} -> {to} has invalid weight {weight} (must be finite and non-negative)")]
    InvalidEdgeWeight { from: Vertex, to: Vertex, weight: f64 },

    #[error("key for vertex {vertex} is unordered (NaN)")]
    UnorderedKey { vertex: Vertex },

    #[error("decrease-key for vertex {vertex} does not lower its key")]
    KeyIncreaseRejected { vertex: Vertex },

    /// The heap yielded an already settled vertex; its position index is corrupt.
    #[error("vertex {0} was extracted twice in one run")]
    VertexReextracted(Vertex),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
