use std::fmt;

use crate::graph::NodeId;

/// An Eulerian trail as the ordered list of nodes it visits.
///
/// Consecutive pairs are the edges used. A trail over `m` edges has `m + 1`
/// nodes; an edgeless graph yields the empty trail.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trail {
    nodes: Vec<NodeId>,
}

impl Trail {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges the trail walks.
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// True for a non-empty trail that ends where it started.
    pub fn is_circuit(&self) -> bool {
        self.edge_count() > 0 && self.start() == self.end()
    }

    /// The edges walked, in order, as `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_vec(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl From<Vec<NodeId>> for Trail {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::new(nodes)
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes = self.nodes.iter();
        if let Some(first) = nodes.next() {
            write!(f, "{}", first)?;
            for node in nodes {
                write!(f, " -> {}", node)?;
            }
        }
        Ok(())
    }
}
