//! Checks a trail against the edge multiset of its graph.

use std::collections::HashMap;

use super::error::PathError;
use super::trail::Trail;
use crate::graph::{Graph, NodeId};

/// Verifies that `trail` walks every edge of `graph` exactly once.
///
/// Each consecutive pair of the trail consumes one instance of the matching
/// edge; afterwards no instance may remain. An empty trail only verifies
/// against an edgeless graph.
pub fn verify_trail(graph: &Graph, trail: &Trail) -> Result<(), PathError> {
    let mut remaining: HashMap<(NodeId, NodeId), usize> = HashMap::new();
    for edge in graph.edges() {
        *remaining.entry(edge).or_insert(0) += 1;
    }

    for (from, to) in trail.edges() {
        match remaining.get_mut(&(from, to)) {
            None => return Err(PathError::EdgeNotInGraph { from, to }),
            Some(0) => return Err(PathError::EdgeOverused { from, to }),
            Some(count) => *count -= 1,
        }
    }

    let unused: usize = remaining.values().sum();
    if unused > 0 {
        return Err(PathError::EdgesUnused { remaining: unused });
    }
    Ok(())
}
