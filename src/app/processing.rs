//! Handles the core steps of finding an Eulerian path for a loaded graph.
//!
//! This module loads the graph, runs the degree and connectivity gates,
//! builds the trail, and optionally verifies it, logging each step.

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::graph::Graph;
use crate::graph_loader;
use crate::path::{verify_trail, DegreeClass, PathFinder, Trail};

/// Loads the graph from `graph_file` and logs its size.
pub fn load_graph(graph_file: &str, quiet_mode: bool) -> Result<Graph, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Loading graph from file...");
    let graph = graph_loader::load_graph_from_file(graph_file).map_err(|e| {
        verbose_eprintln!(quiet_mode, "Failed to load graph: {}", e);
        AppError::from(e)
    })?;
    verbose_println!(
        quiet_mode,
        "   => {} node(s), {} edge(s).",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Finds an Eulerian path in `graph`, logging why when there is none.
///
/// # Returns
/// `Ok(None)` when the graph has no Eulerian path.
///
/// # Errors
/// `AppError::Path` when the traversal breaks its own invariant, or when
/// `verify` is set and the trail fails verification.
pub fn find_path(graph: &Graph, verify: bool, quiet_mode: bool) -> Result<Option<Trail>, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 2] Analyzing degrees...");
    let analysis = PathFinder::analyze(graph);
    match analysis.class {
        DegreeClass::Edgeless => {
            verbose_println!(quiet_mode, "   => No edges; the Eulerian path is empty.");
        }
        DegreeClass::Circuit { start } => {
            verbose_println!(
                quiet_mode,
                "   => All nodes balanced; looking for a circuit from node {}.",
                start
            );
        }
        DegreeClass::Open { start, end } => {
            verbose_println!(
                quiet_mode,
                "   => Open path candidate from node {} to node {}.",
                start,
                end
            );
        }
        DegreeClass::Unbalanced(imbalance) => {
            verbose_println!(quiet_mode, "   => No Eulerian path: {}.", imbalance);
            return Ok(None);
        }
    }

    if let Some(connected) = analysis.connected {
        verbose_println!(quiet_mode, "\n[STEP 3] Checking connectivity...");
        if !connected {
            verbose_println!(
                quiet_mode,
                "   => No Eulerian path: edges span more than one component."
            );
            return Ok(None);
        }
        verbose_println!(quiet_mode, "   => All edge-bearing nodes are connected.");
    }

    verbose_println!(quiet_mode, "\n[STEP 4] Building trail...");
    let trail = PathFinder::find_eulerian_path(graph).map_err(|e| {
        verbose_eprintln!(quiet_mode, "Traversal failed: {}", e);
        AppError::from(e)
    })?;
    let Some(trail) = trail else {
        return Ok(None);
    };
    verbose_println!(
        quiet_mode,
        "   => Trail over {} edge(s): {}",
        trail.edge_count(),
        trail
    );

    if verify {
        verbose_println!(quiet_mode, "\n[STEP 5] Verifying trail...");
        verify_trail(graph, &trail).map_err(|e| {
            verbose_eprintln!(quiet_mode, "Verification failed: {}", e);
            AppError::from(e)
        })?;
        verbose_println!(quiet_mode, "   => Every edge used exactly once.");
    }

    Ok(Some(trail))
}
