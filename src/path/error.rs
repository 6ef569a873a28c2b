use crate::graph::NodeId;
use thiserror::Error;

// Error type for Eulerian path operations.
//
// "No Eulerian path" is not represented here; it is an ordinary `None`
// result. These variants are internal invariant violations or failed
// trail verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Error when a traversal passed both gates but did not consume every edge.
    #[error("Trail has {actual} nodes, expected {expected}; traversal left edges unconsumed")]
    TrailIncomplete { expected: usize, actual: usize },

    /// Error when a trail steps along an edge the graph does not contain.
    #[error("Trail uses edge {from} -> {to} which is not in the graph")]
    EdgeNotInGraph { from: NodeId, to: NodeId },

    /// Error when a trail uses an edge more often than the graph holds it.
    #[error("Trail uses edge {from} -> {to} more times than it occurs in the graph")]
    EdgeOverused { from: NodeId, to: NodeId },

    /// Error when a trail finishes with edges left untouched.
    #[error("Trail leaves {remaining} edge(s) unused")]
    EdgesUnused { remaining: usize },
}
