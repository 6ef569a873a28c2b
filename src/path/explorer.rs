// ──────────────────────────────────────────────────────────────────────────────
// Iterative Hierholzer traversal.
// ──────────────────────────────────────────────────────────────────────────────
use crate::graph::{Graph, NodeId};

/// `TrailBuilder` walks a graph from a start node, consuming every reachable
/// edge exactly once.
///
/// The cursor array and the stack live on the builder and `build` consumes
/// it, so each traversal starts from fresh state and the graph itself is
/// only borrowed immutably.
pub struct TrailBuilder<'g> {
    graph: &'g Graph,
    /// Per-node count of outgoing edges already consumed.
    cursor: Vec<usize>,
    stack: Vec<NodeId>,
}

impl<'g> TrailBuilder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            cursor: vec![0; graph.node_count()],
            stack: Vec::new(),
        }
    }

    /// Runs the traversal from `start` and returns the visited nodes in
    /// forward order.
    ///
    /// The top of the stack follows its next unconsumed edge if it has one;
    /// otherwise it is popped onto the result. Edges are taken in insertion
    /// order, so the output depends only on the graph. When every edge is
    /// reachable from `start` the result has `edge_count + 1` nodes; the
    /// caller checks that.
    pub fn build(mut self, start: NodeId) -> Vec<NodeId> {
        let mut trail: Vec<NodeId> = Vec::with_capacity(self.graph.edge_count() + 1);
        if start >= self.graph.node_count() {
            return trail;
        }

        self.stack.push(start);
        while let Some(&current) = self.stack.last() {
            let targets = self.graph.successors(current);
            let consumed = self.cursor[current];
            if consumed < targets.len() {
                self.cursor[current] = consumed + 1;
                self.stack.push(targets[consumed]);
            } else if let Some(done) = self.stack.pop() {
                trail.push(done);
            }
        }

        // Pop order is the reverse of the walk.
        trail.reverse();
        trail
    }
}
