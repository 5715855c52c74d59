use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tree::ids::NodeKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// The two node kinds of a belief-state search tree.
/// Decision nodes estimate V(b) and are keyed by action,
/// action nodes estimate Q(b, a) and are keyed by observation.
pub enum NodeKind {
    Decision,
    Action,
}

impl NodeKind {
    /// Kind of every child of a node of this kind.
    pub fn child_kind(self) -> NodeKind {
        match self {
            NodeKind::Decision => NodeKind::Action,
            NodeKind::Action => NodeKind::Decision,
        }
    }

    /// Name used when printing a node.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Decision => "DecisionNode",
            NodeKind::Action => "ActionNode",
        }
    }

    /// Depth after stepping into a child of this kind.
    /// Depth counts decision layers, so only entering a decision node adds one.
    pub fn step_depth(self, depth: usize) -> usize {
        match self {
            NodeKind::Decision => depth + 1,
            NodeKind::Action => depth,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only contract a planner's tree has to satisfy to be inspected.
///
/// Implementors are handles onto externally owned nodes: cloning one must be
/// cheap and must never copy a subtree. The debugger only ever reads through
/// this trait.
pub trait SearchNode: Clone {
    /// Action (under decision nodes) or observation (under action nodes).
    type Edge: Clone + PartialEq + fmt::Display;

    fn kind(&self) -> NodeKind;

    fn visit_count(&self) -> u64;

    fn value(&self) -> f64;

    /// Children in the underlying mapping's enumeration order.
    fn children(&self) -> Vec<(Self::Edge, Self)>;

    /// Stable identity of the underlying node.
    fn key(&self) -> NodeKey;

    fn child_count(&self) -> usize {
        self.children().len()
    }
}

/// Children ordered ascending by the string form of their edge label.
/// This is the order used by every listing, index lookup and traversal.
pub fn sorted_children<N: SearchNode>(node: &N) -> Vec<(N::Edge, N)> {
    let mut children: Vec<(String, N::Edge, N)> = node
        .children()
        .into_iter()
        .map(|(edge, child)| (edge.to_string(), edge, child))
        .collect();
    children.sort_by(|a, b| a.0.cmp(&b.0));
    children
        .into_iter()
        .map(|(_, edge, child)| (edge, child))
        .collect()
}
