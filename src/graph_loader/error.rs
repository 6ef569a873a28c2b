use crate::graph::GraphError;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph loading operations.
/// This error type is used to represent the ways an edge-list file can be
/// unreadable or malformed.
#[derive(Error, Debug)]
pub enum GraphLoaderError {
    /// Error when reading a file.
    #[error("Failed to read file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when the input has no node count line.
    #[error("No node count found; the first non-comment line must hold the number of nodes")]
    MissingNodeCount,

    /// Error when the node count is not a non-negative integer.
    #[error("Line {line}: invalid node count '{text}'")]
    InvalidNodeCount { line: usize, text: String },

    /// Error when an edge line is not two node indices.
    #[error("Line {line}: expected 'from to', found '{text}'")]
    MalformedEdge { line: usize, text: String },

    /// Error when an edge refers to a node outside the graph.
    #[error("Line {line}: {source}")]
    Graph { line: usize, source: GraphError },
}
