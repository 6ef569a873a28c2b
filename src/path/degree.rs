//! Degree analysis: in/out degree per node and start/end classification.

use std::fmt;

use crate::graph::{Graph, NodeId};

/// In- and out-degree of every node, computed once per query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegreeTable {
    out_degree: Vec<usize>,
    in_degree: Vec<usize>,
    edge_count: usize,
}

/// Outcome of the degree gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegreeClass {
    /// No edges at all; the empty trail is the answer.
    Edgeless,
    /// Every node is balanced; the trail is a circuit starting at `start`.
    Circuit { start: NodeId },
    /// Exactly one node with one surplus outgoing edge and one with one
    /// surplus incoming edge.
    Open { start: NodeId, end: NodeId },
    /// The degree pattern admits no Eulerian path.
    Unbalanced(Imbalance),
}

/// First degree pattern that rules out an Eulerian path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Imbalance {
    /// `out - in` at `node` is outside `-1..=1`.
    ExcessTooLarge { node: NodeId, diff: i64 },
    /// A second node with `out - in == 1`.
    MultipleStarts { first: NodeId, second: NodeId },
    /// A second node with `in - out == 1`.
    MultipleEnds { first: NodeId, second: NodeId },
    /// A start candidate without a matching end candidate.
    UnmatchedStart { node: NodeId },
    /// An end candidate without a matching start candidate.
    UnmatchedEnd { node: NodeId },
}

impl DegreeTable {
    /// Counts in- and out-degrees in a single pass over the edges.
    pub fn compute(graph: &Graph) -> Self {
        let n = graph.node_count();
        let mut out_degree = vec![0; n];
        let mut in_degree = vec![0; n];
        for (from, to) in graph.edges() {
            out_degree[from] += 1;
            in_degree[to] += 1;
        }
        Self {
            out_degree,
            in_degree,
            edge_count: graph.edge_count(),
        }
    }

    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_degree[node]
    }

    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_degree[node]
    }

    /// `out - in` for `node`.
    pub fn balance(&self, node: NodeId) -> i64 {
        self.out_degree[node] as i64 - self.in_degree[node] as i64
    }

    /// True when `node` touches at least one edge in either direction.
    pub fn has_edges(&self, node: NodeId) -> bool {
        self.out_degree[node] + self.in_degree[node] > 0
    }

    pub fn node_count(&self) -> usize {
        self.out_degree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Classifies the degree pattern.
    ///
    /// In the circuit case the start is the lowest-indexed node with an
    /// outgoing edge, so the result only depends on the input.
    pub fn classify(&self) -> DegreeClass {
        if self.edge_count == 0 {
            return DegreeClass::Edgeless;
        }

        let mut start: Option<NodeId> = None;
        let mut end: Option<NodeId> = None;
        for node in 0..self.node_count() {
            match self.balance(node) {
                0 => {}
                1 => {
                    if let Some(first) = start {
                        return DegreeClass::Unbalanced(Imbalance::MultipleStarts {
                            first,
                            second: node,
                        });
                    }
                    start = Some(node);
                }
                -1 => {
                    if let Some(first) = end {
                        return DegreeClass::Unbalanced(Imbalance::MultipleEnds {
                            first,
                            second: node,
                        });
                    }
                    end = Some(node);
                }
                diff => {
                    return DegreeClass::Unbalanced(Imbalance::ExcessTooLarge { node, diff });
                }
            }
        }

        match (start, end) {
            (Some(start), Some(end)) => DegreeClass::Open { start, end },
            (Some(node), None) => DegreeClass::Unbalanced(Imbalance::UnmatchedStart { node }),
            (None, Some(node)) => DegreeClass::Unbalanced(Imbalance::UnmatchedEnd { node }),
            (None, None) => {
                // m > 0 guarantees some node has an outgoing edge.
                let start = (0..self.node_count())
                    .find(|&v| self.out_degree[v] > 0)
                    .unwrap_or_default();
                DegreeClass::Circuit { start }
            }
        }
    }
}

impl DegreeClass {
    /// The node a trail must start from, if the degree gate passed with edges.
    pub fn start(&self) -> Option<NodeId> {
        match *self {
            DegreeClass::Circuit { start } | DegreeClass::Open { start, .. } => Some(start),
            DegreeClass::Edgeless | DegreeClass::Unbalanced(_) => None,
        }
    }

    /// `(start, end)` of the trail the degree pattern implies.
    pub fn endpoints(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            DegreeClass::Circuit { start } => Some((start, start)),
            DegreeClass::Open { start, end } => Some((start, end)),
            DegreeClass::Edgeless | DegreeClass::Unbalanced(_) => None,
        }
    }

    pub fn admits_path(&self) -> bool {
        !matches!(self, DegreeClass::Unbalanced(_))
    }
}

impl fmt::Display for Imbalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Imbalance::ExcessTooLarge { node, diff } => {
                write!(f, "node {} has out-degree minus in-degree of {}", node, diff)
            }
            Imbalance::MultipleStarts { first, second } => write!(
                f,
                "nodes {} and {} both have one more outgoing than incoming edge",
                first, second
            ),
            Imbalance::MultipleEnds { first, second } => write!(
                f,
                "nodes {} and {} both have one more incoming than outgoing edge",
                first, second
            ),
            Imbalance::UnmatchedStart { node } => {
                write!(f, "node {} has a surplus outgoing edge with no matching end", node)
            }
            Imbalance::UnmatchedEnd { node } => {
                write!(f, "node {} has a surplus incoming edge with no matching start", node)
            }
        }
    }
}
