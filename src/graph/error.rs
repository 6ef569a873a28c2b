use super::NodeId;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for graph construction.
/// A graph that fails these checks is malformed input, which is distinct
/// from a well-formed graph that simply has no Eulerian path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Error when an edge points at a node index outside `[0, n)`.
    #[error("Edge {from} -> {target} points outside the graph (node count {node_count})")]
    TargetOutOfRange {
        from: NodeId,
        target: NodeId,
        node_count: usize,
    },

    /// Error when an edge is added from a node index outside `[0, n)`.
    #[error("Source node {node} does not exist (node count {node_count})")]
    NodeOutOfRange { node: NodeId, node_count: usize },
}
