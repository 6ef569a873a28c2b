// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// In-memory directed multigraph.  Nodes are the indices `0..n`, and every node
// owns an ordered list of outgoing edge targets.  Duplicates are allowed
// (parallel edges) and a target equal to its own node is a self-loop.  The
// insertion order of a node's list is the order in which the trail builder
// explores its edges.
// ──────────────────────────────────────────────────────────────────────────────
use std::ops::Range;

use super::error::GraphError;

/// Represents a unique identifier for a node in the graph.
pub type NodeId = usize;

/// Directed multigraph stored as per-node adjacency lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<NodeId>>,
    edge_count: usize,
}

impl Graph {
    /// Builds a graph from a node-indexed list of outgoing edge targets.
    ///
    /// The node count is `adjacency.len()`. Every target must lie in
    /// `[0, n)`, otherwise `GraphError::TargetOutOfRange` is returned.
    pub fn new(adjacency: Vec<Vec<NodeId>>) -> Result<Self, GraphError> {
        let node_count = adjacency.len();
        for (from, targets) in adjacency.iter().enumerate() {
            if let Some(&target) = targets.iter().find(|&&t| t >= node_count) {
                return Err(GraphError::TargetOutOfRange {
                    from,
                    target,
                    node_count,
                });
            }
        }
        let edge_count = adjacency.iter().map(Vec::len).sum();
        Ok(Self {
            adjacency,
            edge_count,
        })
    }

    /// Creates an edgeless graph with `node_count` nodes.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_count: 0,
        }
    }

    /// Builds a graph of `node_count` nodes from `(from, to)` pairs,
    /// preserving the order in which the pairs are yielded.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::with_nodes(node_count);
        for (from, to) in edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }

    /// Appends a directed edge `from -> to` to the end of `from`'s list.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), GraphError> {
        let node_count = self.node_count();
        if from >= node_count {
            return Err(GraphError::NodeOutOfRange {
                node: from,
                node_count,
            });
        }
        if to >= node_count {
            return Err(GraphError::TargetOutOfRange {
                from,
                target: to,
                node_count,
            });
        }
        self.adjacency[from].push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the number of nodes `n`.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the total number of edges `m`.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns the node indices `0..n`.
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.node_count()
    }

    /// Returns the outgoing edge targets of `node` in insertion order.
    ///
    /// An unknown node has no successors.
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(node).map_or(&[], Vec::as_slice)
    }

    /// Iterates over every edge as `(from, to)`, node by node, each node's
    /// edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }
}
