use std::fs;

use super::error::GraphLoaderError;
use crate::graph::{Graph, NodeId};

//─────────────────────────────────────────────────────────────────────────────

/// Loads a graph from an edge-list file.
pub fn load_graph_from_file(file_path: &str) -> Result<Graph, GraphLoaderError> {
    let file_content =
        fs::read_to_string(file_path).map_err(|e| GraphLoaderError::ReadFile(file_path.into(), e))?;
    parse_graph(&file_content)
}

/// Parses the edge-list format.
///
/// `#` starts a comment and blank lines are skipped. The first remaining
/// line is the node count; every following line is one edge `from to`.
/// Edges keep the order in which they appear.
pub fn parse_graph(content: &str) -> Result<Graph, GraphLoaderError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, raw)| (idx + 1, strip_comment(raw)))
        .filter(|(_, line)| !line.is_empty());

    let (count_line, count_text) = lines.next().ok_or(GraphLoaderError::MissingNodeCount)?;
    let node_count: usize =
        count_text
            .parse()
            .map_err(|_| GraphLoaderError::InvalidNodeCount {
                line: count_line,
                text: count_text.to_string(),
            })?;

    let mut graph = Graph::with_nodes(node_count);
    for (line, text) in lines {
        let (from, to) = parse_edge(text).ok_or_else(|| GraphLoaderError::MalformedEdge {
            line,
            text: text.to_string(),
        })?;
        graph
            .add_edge(from, to)
            .map_err(|source| GraphLoaderError::Graph { line, source })?;
    }
    Ok(graph)
}

fn strip_comment(line: &str) -> &str {
    line.split('#').next().unwrap_or_default().trim()
}

fn parse_edge(text: &str) -> Option<(NodeId, NodeId)> {
    let mut parts = text.split_whitespace();
    let from = parts.next()?.parse().ok()?;
    let to = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((from, to))
}
