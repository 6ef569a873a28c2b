//! Direction-agnostic reachability check used as the second existence gate.

use super::degree::DegreeTable;
use crate::graph::{Graph, NodeId};

/// Returns true when every node that touches an edge can be reached from
/// `start` while ignoring edge direction.
///
/// Degree balance alone accepts a graph made of several disjoint balanced
/// components; this check rejects it.
pub fn is_weakly_connected(graph: &Graph, degrees: &DegreeTable, start: NodeId) -> bool {
    let n = graph.node_count();
    if start >= n {
        return false;
    }

    // Incoming lists so each node can also be left against edge direction.
    let mut predecessors: Vec<Vec<NodeId>> = vec![Vec::new(); n];
    for (from, to) in graph.edges() {
        predecessors[to].push(from);
    }

    let mut visited = vec![false; n];
    let mut stack: Vec<NodeId> = vec![start];
    visited[start] = true;

    while let Some(node) = stack.pop() {
        let neighbours = graph
            .successors(node)
            .iter()
            .chain(predecessors[node].iter());
        for &next in neighbours {
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }

    graph
        .nodes()
        .all(|node| visited[node] || !degrees.has_edges(node))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connected(n: usize, edges: &[(NodeId, NodeId)], start: NodeId) -> bool {
        let g = Graph::from_edges(n, edges.iter().copied()).unwrap();
        let degrees = DegreeTable::compute(&g);
        is_weakly_connected(&g, &degrees, start)
    }

    #[test]
    fn test_single_cycle_is_connected() {
        assert!(connected(3, &[(0, 1), (1, 2), (2, 0)], 0));
    }

    #[test]
    fn test_reaches_against_edge_direction() {
        // 2 is only reachable from 0 by walking 1 <- 2 backwards.
        assert!(connected(3, &[(0, 1), (2, 1)], 0));
    }

    #[test]
    fn test_isolated_nodes_are_ignored() {
        assert!(connected(5, &[(1, 3), (3, 1)], 1));
    }

    #[test]
    fn test_disjoint_components_rejected() {
        assert!(!connected(4, &[(0, 1), (1, 0), (2, 3), (3, 2)], 0));
    }

    #[test]
    fn test_disjoint_self_loops_rejected() {
        assert!(!connected(2, &[(0, 0), (1, 1)], 0));
    }

    #[test]
    fn test_start_out_of_range() {
        assert!(!connected(1, &[(0, 0)], 3));
    }
}
