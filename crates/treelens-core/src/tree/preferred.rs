use std::fmt;

use crate::tree::{
    node::{NodeKind, SearchNode},
    view::NodeView,
};

#[derive(Debug, Clone, PartialEq)]
/// One action choice on the preferred path.
pub struct PreferredStep<E> {
    /// Highest-valued action.
    pub edge: E,
    pub value: f64,
    /// Other actions whose value equals `value` exactly.
    pub equally_good: Vec<E>,
}

impl<E: fmt::Display> fmt::Display for PreferredStep<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let others: Vec<String> = self.equally_good.iter().map(ToString::to_string).collect();
        write!(f, "  {}  [{}]", self.edge, others.join(", "))
    }
}

/// Follow the greedy best-valued child from `root` downward.
///
/// Children are scanned in edge-string order, so ties go to the smallest
/// edge string. One step is reported per decision node whose best child is
/// an action; `max_depth` bounds the number of nodes visited.
pub fn trace_preferred_path<N: SearchNode>(
    root: &NodeView<N>,
    max_depth: Option<usize>,
) -> Vec<PreferredStep<N::Edge>> {
    let mut steps = Vec::new();
    let mut node = root.node().clone();
    let mut visited = 0usize;

    loop {
        if max_depth.is_some_and(|max_depth| visited >= max_depth) {
            break;
        }

        let children = NodeView::new(node.clone()).sorted_children();
        let mut best: Option<(usize, f64)> = None;
        for (pos, (_, child)) in children.iter().enumerate() {
            let value = child.value();
            if value > best.map_or(f64::NEG_INFINITY, |(_, best_value)| best_value) {
                best = Some((pos, value));
            }
        }
        let Some((best_pos, best_value)) = best else {
            break;
        };

        let equally_good = if node.kind() == NodeKind::Decision {
            children
                .iter()
                .enumerate()
                .filter(|(pos, (_, child))| *pos != best_pos && child.value() == best_value)
                .map(|(_, (edge, _))| edge.clone())
                .collect()
        } else {
            Vec::new()
        };

        let (edge, child) = children[best_pos].clone();
        if child.kind() == NodeKind::Action {
            steps.push(PreferredStep {
                edge,
                value: best_value,
                equally_good,
            });
        }

        node = child;
        visited += 1;
    }

    steps
}
