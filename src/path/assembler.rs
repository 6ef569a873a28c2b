use std::io::Write;

use super::connectivity::is_weakly_connected;
use super::degree::{DegreeClass, DegreeTable};
use super::error::PathError;
use super::explorer::TrailBuilder;
use super::trail::Trail;
use crate::graph::Graph;

/// Result of running both existence gates over a graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathAnalysis {
    pub degrees: DegreeTable,
    pub class: DegreeClass,
    /// `None` when the degree gate already failed or there are no edges.
    pub connected: Option<bool>,
}

impl PathAnalysis {
    /// True when an Eulerian path exists (the empty one included).
    pub fn has_path(&self) -> bool {
        match self.class {
            DegreeClass::Edgeless => true,
            DegreeClass::Unbalanced(_) => false,
            DegreeClass::Circuit { .. } | DegreeClass::Open { .. } => {
                self.connected.unwrap_or(false)
            }
        }
    }
}

/// `PathFinder` decides whether a directed multigraph has an Eulerian path
/// and builds one.
pub struct PathFinder;

impl PathFinder {
    /// Runs the degree gate, then the connectivity gate when it applies.
    pub fn analyze(graph: &Graph) -> PathAnalysis {
        let degrees = DegreeTable::compute(graph);
        let class = degrees.classify();
        let connected = class
            .start()
            .map(|start| is_weakly_connected(graph, &degrees, start));
        PathAnalysis {
            degrees,
            class,
            connected,
        }
    }

    /// Returns an Eulerian path of `graph`.
    ///
    /// `Ok(None)` means the graph has no Eulerian path. An edgeless graph,
    /// including one without nodes, yields the empty trail.
    ///
    /// # Errors
    /// `PathError::TrailIncomplete` if the traversal passed both gates but
    /// did not consume every edge. That is a bug, never a property of the
    /// input.
    pub fn find_eulerian_path(graph: &Graph) -> Result<Option<Trail>, PathError> {
        let analysis = Self::analyze(graph);
        if !analysis.has_path() {
            return Ok(None);
        }
        let Some(start) = analysis.class.start() else {
            return Ok(Some(Trail::default()));
        };

        let nodes = TrailBuilder::new(graph).build(start);
        let expected = graph.edge_count() + 1;
        if nodes.len() != expected {
            return Err(PathError::TrailIncomplete {
                expected,
                actual: nodes.len(),
            });
        }
        Ok(Some(Trail::new(nodes)))
    }

    /// Writes the analysis and the resulting path of `graph` to `writer`.
    pub fn print_path_to_writer(graph: &Graph, writer: &mut dyn Write) -> std::io::Result<()> {
        let analysis = Self::analyze(graph);
        writeln!(writer, "=== GRAPH ===")?;
        writeln!(writer, "Nodes: {}", graph.node_count())?;
        writeln!(writer, "Edges: {}", graph.edge_count())?;
        writeln!(writer)?;

        writeln!(writer, "=== DEGREES ===")?;
        for node in graph.nodes() {
            writeln!(
                writer,
                "Node {}: out {}, in {}",
                node,
                analysis.degrees.out_degree(node),
                analysis.degrees.in_degree(node)
            )?;
        }
        writeln!(writer)?;

        writeln!(writer, "=== EULERIAN PATH ===")?;
        match analysis.class {
            DegreeClass::Edgeless => writeln!(writer, "Graph has no edges; path is empty.")?,
            DegreeClass::Unbalanced(imbalance) => {
                writeln!(writer, "No Eulerian path: {}.", imbalance)?
            }
            DegreeClass::Circuit { .. } | DegreeClass::Open { .. } if !analysis.has_path() => {
                writeln!(writer, "No Eulerian path: edges span more than one component.")?
            }
            DegreeClass::Circuit { .. } | DegreeClass::Open { .. } => {
                match Self::find_eulerian_path(graph) {
                    Ok(Some(trail)) => writeln!(writer, "Path: {}", trail)?,
                    Ok(None) => writeln!(writer, "No Eulerian path.")?,
                    Err(e) => writeln!(writer, "Error: {}", e)?,
                }
            }
        }
        writeln!(writer)?;
        Ok(())
    }
}
