use serde::Serialize;

use crate::tree::{
    node::{NodeKind, SearchNode},
    view::NodeView,
};

/// Aggregate counts over one subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeStats {
    pub decision_nodes: usize,
    pub action_nodes: usize,
    pub decision_children_total: usize,
    pub action_children_total: usize,
    pub decision_children_max: usize,
    pub action_children_max: usize,
    /// Deepest decision layer reached, `None` when no decision node was visited.
    pub max_depth: Option<usize>,
    /// Visit count of the subtree root.
    pub visit_count: u64,
    /// Value of the subtree root.
    pub value: f64,
}

impl TreeStats {
    fn empty(visit_count: u64, value: f64) -> Self {
        TreeStats {
            decision_nodes: 0,
            action_nodes: 0,
            decision_children_total: 0,
            action_children_total: 0,
            decision_children_max: 0,
            action_children_max: 0,
            max_depth: None,
            visit_count,
            value,
        }
    }

    pub fn total_nodes(&self) -> usize {
        self.decision_nodes + self.action_nodes
    }

    fn record(&mut self, kind: NodeKind, children: usize, depth: usize) {
        match kind {
            NodeKind::Decision => {
                self.decision_nodes += 1;
                self.decision_children_total += children;
                self.decision_children_max = self.decision_children_max.max(children);
                self.max_depth = Some(self.max_depth.map_or(depth, |max| max.max(depth)));
            }
            NodeKind::Action => {
                self.action_nodes += 1;
                self.action_children_total += children;
                self.action_children_max = self.action_children_max.max(children);
            }
        }
    }
}

/// Walk every node under `root` regardless of visit count, stopping below
/// `max_depth` decision layers when given.
pub fn collect_stats<N: SearchNode>(root: &NodeView<N>, max_depth: Option<usize>) -> TreeStats {
    let mut stats = TreeStats::empty(root.visit_count(), root.value());
    let mut pending = vec![(root.node().clone(), 0usize)];

    while let Some((node, depth)) = pending.pop() {
        if max_depth.is_some_and(|max_depth| depth > max_depth) {
            continue;
        }
        let children = node.children();
        stats.record(node.kind(), children.len(), depth);
        // reversed so the stack pops children in enumeration order
        for (_, child) in children.into_iter().rev() {
            let child_depth = child.kind().step_depth(depth);
            pending.push((child, child_depth));
        }
    }

    stats
}
