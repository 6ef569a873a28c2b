//! Eulerian path search for directed multigraphs.
//!
//! A [`graph::Graph`] is a set of nodes `0..n`, each with an ordered list of
//! outgoing edge targets (parallel edges and self-loops allowed).
//! [`path::PathFinder::find_eulerian_path`] checks degree balance and weak
//! connectivity, then builds a trail with an iterative Hierholzer traversal.
//!
//! ```
//! use eulerian_trail::graph::Graph;
//! use eulerian_trail::path::PathFinder;
//!
//! let graph = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0), (0, 2)]).unwrap();
//! let trail = PathFinder::find_eulerian_path(&graph).unwrap().unwrap();
//! assert_eq!(trail.nodes(), &[0, 1, 2, 0, 2]);
//! ```

pub mod app;
pub mod graph;
pub mod graph_loader;
pub mod path;
