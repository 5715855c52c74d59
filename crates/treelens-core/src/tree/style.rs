use colored::Colorize;

use crate::tree::node::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a piece of output text represents.
pub enum Role {
    /// Kind name of a node.
    Kind(NodeKind),
    /// Edge leading into a node of the given kind.
    ParentEdge(NodeKind),
    /// Edge label in a child listing.
    ChildEdge,
    /// Depth annotation in tree art.
    Depth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Terminal styling. Purely cosmetic: a plain style yields the same text
/// with no escape codes.
pub struct Style {
    color: bool,
}

impl Style {
    pub fn colored() -> Self {
        Style { color: true }
    }

    pub fn plain() -> Self {
        Style { color: false }
    }

    pub fn new(color: bool) -> Self {
        Style { color }
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    pub fn paint(&self, text: &str, role: Role) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = match role {
            Role::Kind(NodeKind::Decision) | Role::ParentEdge(NodeKind::Action) => text.green(),
            Role::Kind(NodeKind::Action) | Role::ParentEdge(NodeKind::Decision) => text.red(),
            Role::ChildEdge => text.white(),
            Role::Depth => text.cyan(),
        };
        styled.to_string()
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::plain()
    }
}
