//! Integration tests for Eulerian path search through the public API.

use std::collections::HashMap;

use eulerian_trail::graph::{Graph, GraphError, NodeId};
use eulerian_trail::path::{verify_trail, DegreeClass, PathFinder, Trail};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn graph(n: usize, edges: &[(NodeId, NodeId)]) -> Graph {
    Graph::from_edges(n, edges.iter().copied()).unwrap()
}

fn find(g: &Graph) -> Option<Trail> {
    PathFinder::find_eulerian_path(g).expect("traversal invariant violated")
}

/// Consumes one unit of the edge multiset per consecutive pair of the trail
/// and asserts nothing is missing or left over.
fn assert_uses_every_edge_once(g: &Graph, trail: &Trail) {
    let mut counts: HashMap<(NodeId, NodeId), i64> = HashMap::new();
    for edge in g.edges() {
        *counts.entry(edge).or_insert(0) += 1;
    }
    for (from, to) in trail.edges() {
        let count = counts
            .get_mut(&(from, to))
            .unwrap_or_else(|| panic!("edge {} -> {} is not in the graph", from, to));
        assert!(*count > 0, "edge {} -> {} used too often", from, to);
        *count -= 1;
    }
    assert!(counts.values().all(|&c| c == 0), "unused edges: {:?}", counts);
    assert_eq!(trail.len(), g.edge_count() + 1);
    assert_eq!(verify_trail(g, trail), Ok(()));
}

// ── Edgeless graphs ───────────────────────────────────────────────────────────

#[test]
fn test_zero_node_graph_yields_empty_trail() {
    let g = Graph::new(vec![]).unwrap();
    assert_eq!(find(&g), Some(Trail::default()));
}

#[test]
fn test_nodes_without_edges_yield_empty_trail() {
    let g = Graph::with_nodes(5);
    assert_eq!(find(&g), Some(Trail::default()));
}

// ── Successful paths ──────────────────────────────────────────────────────────

#[test]
fn test_all_equal_edge_frequency() {
    let g = graph(2, &[(0, 1), (0, 1), (1, 0), (1, 0)]);
    let trail = find(&g).expect("circuit expected");
    assert_eq!(trail.len(), 5);
    assert!(trail.is_circuit());
    assert_uses_every_edge_once(&g, &trail);
}

#[test]
fn test_simple_graph() {
    let g = graph(5, &[(0, 1), (1, 2), (1, 3), (1, 4), (2, 1), (4, 1)]);
    let trail = find(&g).expect("path expected");
    assert_eq!(trail.start(), Some(0));
    assert_eq!(trail.end(), Some(3));
    assert_uses_every_edge_once(&g, &trail);
}

#[test]
fn test_somewhat_complex_path() {
    // Balanced cycles hung off a spine, with a single path from node 1 to node 0.
    let g = graph(
        9,
        &[
            (6, 7),
            (4, 1),
            (7, 0),
            (1, 5),
            (1, 3),
            (1, 2),
            (1, 2),
            (2, 1),
            (2, 1),
            (3, 4),
            (3, 4),
            (4, 3),
            (5, 6),
            (5, 6),
            (6, 5),
            (7, 8),
            (8, 7),
        ],
    );
    assert_eq!(
        PathFinder::analyze(&g).class,
        DegreeClass::Open { start: 1, end: 0 }
    );
    let trail = find(&g).expect("path expected");
    assert_eq!(trail.len(), 18);
    assert_eq!(trail.start(), Some(1));
    assert_eq!(trail.end(), Some(0));
    assert_uses_every_edge_once(&g, &trail);
}

#[test]
fn test_parallel_edges_and_self_loops() {
    let g = graph(3, &[(0, 0), (0, 1), (1, 1), (1, 2), (2, 2), (2, 0), (0, 0)]);
    let trail = find(&g).expect("circuit expected");
    assert!(trail.is_circuit());
    assert_uses_every_edge_once(&g, &trail);
}

#[test]
fn test_trail_follows_insertion_order() {
    let g = graph(3, &[(0, 1), (0, 2), (1, 0), (2, 0)]);
    assert_eq!(find(&g).unwrap().nodes(), &[0, 1, 0, 2, 0]);

    let g = graph(3, &[(0, 2), (0, 1), (1, 0), (2, 0)]);
    assert_eq!(find(&g).unwrap().nodes(), &[0, 2, 0, 1, 0]);
}

#[test]
fn test_isolated_nodes_do_not_block_a_path() {
    let g = graph(6, &[(2, 4), (4, 2), (4, 5)]);
    let trail = find(&g).expect("path expected");
    assert_eq!(trail.nodes(), &[4, 2, 4, 5]);
    assert_uses_every_edge_once(&g, &trail);
}

#[test]
fn test_dense_multigraph_circuit() {
    // Every ordered pair twice plus a self-loop on each node.
    let n = 6;
    let mut edges = Vec::new();
    for from in 0..n {
        edges.push((from, from));
        for to in 0..n {
            if from != to {
                edges.push((from, to));
                edges.push((to, from));
            }
        }
    }
    let g = graph(n, &edges);
    let trail = find(&g).expect("circuit expected");
    assert_eq!(trail.start(), Some(0));
    assert!(trail.is_circuit());
    assert_uses_every_edge_once(&g, &trail);
}

#[test]
fn test_long_cycle_does_not_recurse() {
    let n = 200_000;
    let g = Graph::from_edges(n, (0..n).map(|v| (v, (v + 1) % n))).unwrap();
    let trail = find(&g).expect("circuit expected");
    assert_eq!(trail.len(), n + 1);
    assert_eq!(trail.nodes()[..3], [0, 1, 2]);
    assert_eq!(trail.end(), Some(0));
}

// ── No Eulerian path ──────────────────────────────────────────────────────────

#[test]
fn test_invalid_graph_double_edge() {
    let g = graph(2, &[(0, 1), (0, 1)]);
    assert_eq!(find(&g), None);
}

#[test]
fn test_invalid_graph_unreconcilable_degrees() {
    let g = graph(3, &[(0, 1), (1, 0), (1, 2), (2, 0), (2, 0)]);
    assert_eq!(find(&g), None);
}

#[test]
fn test_disjoint_balanced_components() {
    let g = graph(5, &[(0, 1), (1, 0), (3, 4), (4, 3)]);
    assert!(matches!(
        PathFinder::analyze(&g).class,
        DegreeClass::Circuit { start: 0 }
    ));
    assert_eq!(find(&g), None);
}

#[test]
fn test_disjoint_open_path_and_cycle() {
    let g = graph(5, &[(0, 1), (2, 3), (3, 4), (4, 2)]);
    assert_eq!(find(&g), None);
}

// ── Self-loop policy ──────────────────────────────────────────────────────────

/// A lone node with one self-loop is balanced and connected to itself, so it
/// has the Eulerian circuit `[0, 0]`.
#[test]
fn test_one_node_self_loop_graph() {
    let g = graph(1, &[(0, 0)]);
    let trail = find(&g).expect("self-loop circuit expected");
    assert_eq!(trail.nodes(), &[0, 0]);
    assert!(trail.is_circuit());
    assert_uses_every_edge_once(&g, &trail);
}

// ── Malformed input ───────────────────────────────────────────────────────────

#[test]
fn test_out_of_range_target_is_an_error_not_a_missing_path() {
    assert_eq!(
        Graph::new(vec![vec![1], vec![3]]),
        Err(GraphError::TargetOutOfRange {
            from: 1,
            target: 3,
            node_count: 2
        })
    );
}

// ── Re-entrancy ───────────────────────────────────────────────────────────────

#[test]
fn test_repeated_queries_agree() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 2), (0, 3), (3, 0)]);
    let first = find(&g);
    let second = find(&g);
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_queries_share_the_graph() {
    let g = graph(3, &[(0, 1), (1, 2), (2, 0), (0, 2), (2, 0), (0, 0)]);
    let expected = find(&g);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| find(&g))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
