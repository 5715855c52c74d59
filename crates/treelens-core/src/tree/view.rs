use std::fmt;

use tracing::trace;

use crate::tree::{
    error::DebugError,
    ids::NodeKey,
    node::{NodeKind, SearchNode, sorted_children},
    similarity::Matcher,
    style::{Role, Style},
};

#[derive(Debug, Clone, PartialEq)]
/// Ways an operator can name a child.
pub enum LookupKey<E> {
    /// The edge value itself.
    Edge(E),
    /// Position in the listing sorted by edge string.
    Index(isize),
    /// Exact or approximate string form of an edge.
    Text(String),
}

impl<E> LookupKey<E> {
    pub fn edge(edge: E) -> Self {
        LookupKey::Edge(edge)
    }

    pub fn index(index: isize) -> Self {
        LookupKey::Index(index)
    }

    pub fn text(text: impl Into<String>) -> Self {
        LookupKey::Text(text.into())
    }
}

impl<E> From<&str> for LookupKey<E> {
    fn from(text: &str) -> Self {
        LookupKey::Text(text.to_string())
    }
}

impl<E> From<String> for LookupKey<E> {
    fn from(text: String) -> Self {
        LookupKey::Text(text)
    }
}

impl<E> From<isize> for LookupKey<E> {
    fn from(index: isize) -> Self {
        LookupKey::Index(index)
    }
}

impl<E: fmt::Display> fmt::Display for LookupKey<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupKey::Edge(edge) => write!(f, "{edge}"),
            LookupKey::Index(index) => write!(f, "{index}"),
            LookupKey::Text(text) => write!(f, "{text}"),
        }
    }
}

#[derive(Debug, Clone)]
/// Non-owning view of one node plus the edge that led to it.
///
/// The view holds a handle, never a copy of the children, so every lookup
/// reflects the tree as it is now. It is only meaningful while nobody
/// mutates the underlying tree.
pub struct NodeView<N: SearchNode> {
    node: N,
    parent_edge: Option<N::Edge>,
    show_children: bool,
}

impl<N: SearchNode> NodeView<N> {
    /// Wrap a root, which has no parent edge.
    pub fn new(node: N) -> Self {
        NodeView {
            node,
            parent_edge: None,
            show_children: true,
        }
    }

    /// Wrap a node reached through `edge`.
    pub fn with_parent(node: N, edge: N::Edge) -> Self {
        NodeView {
            node,
            parent_edge: Some(edge),
            show_children: true,
        }
    }

    /// The wrapped node.
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Unwrap into the underlying node.
    pub fn into_node(self) -> N {
        self.node
    }

    /// Decision or action.
    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    /// Visits recorded by the planner.
    pub fn visit_count(&self) -> u64 {
        self.node.visit_count()
    }

    /// Value estimate recorded by the planner.
    pub fn value(&self) -> f64 {
        self.node.value()
    }

    /// Identity of the wrapped node.
    pub fn key(&self) -> NodeKey {
        self.node.key()
    }

    /// Edge this view was reached through, `None` for a session root.
    pub fn parent_edge(&self) -> Option<&N::Edge> {
        self.parent_edge.as_ref()
    }

    /// The wrapped node's children, read straight from the tree.
    pub fn children(&self) -> Vec<(N::Edge, N)> {
        self.node.children()
    }

    /// Children ordered by the string form of their edges, as listed.
    pub fn sorted_children(&self) -> Vec<(N::Edge, N)> {
        sorted_children(&self.node)
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.node.child_count()
    }

    /// Whether `Display` lists the children.
    pub fn shows_children(&self) -> bool {
        self.show_children
    }

    /// Whether `Display` lists the children under the node line.
    pub fn set_show_children(&mut self, show: bool) {
        self.show_children = show;
    }

    /// Look up a child with the default similarity and threshold.
    pub fn get(&self, key: impl Into<LookupKey<N::Edge>>) -> Result<NodeView<N>, DebugError> {
        self.lookup(&key.into(), &Matcher::default())
    }

    /// Resolve a key to a child. Edges and text try an exact match first;
    /// an index is always a position in the sorted listing, and text falls
    /// back to the most similar edge string.
    pub fn lookup(
        &self,
        key: &LookupKey<N::Edge>,
        matcher: &Matcher,
    ) -> Result<NodeView<N>, DebugError> {
        let children = self.sorted_children();

        let exact = match key {
            LookupKey::Edge(edge) => children.iter().position(|(e, _)| e == edge),
            LookupKey::Index(_) => None,
            LookupKey::Text(text) => children.iter().position(|(e, _)| e.to_string() == *text),
        };
        if let Some(pos) = exact {
            return Ok(Self::child_view(children, pos));
        }

        match key {
            LookupKey::Edge(_) => Err(DebugError::InvalidKey {
                key: key.to_string(),
            }),
            LookupKey::Index(index) => {
                let len = children.len();
                match usize::try_from(*index) {
                    Ok(pos) if pos < len => Ok(Self::child_view(children, pos)),
                    _ => Err(DebugError::IndexOutOfRange { index: *index, len }),
                }
            }
            LookupKey::Text(text) => {
                let mut best: Option<(usize, f64)> = None;
                for (pos, (edge, _)) in children.iter().enumerate() {
                    let score = matcher.score(&edge.to_string(), text);
                    if best.is_none_or(|(_, best_score)| score > best_score) {
                        best = Some((pos, score));
                    }
                }
                match best {
                    Some((pos, score)) if matcher.accepts(score) => {
                        trace!(key = %text, score, "fuzzy key matched");
                        Ok(Self::child_view(children, pos))
                    }
                    _ => Err(DebugError::InvalidKey { key: text.clone() }),
                }
            }
        }
    }

    fn child_view(mut children: Vec<(N::Edge, N)>, pos: usize) -> NodeView<N> {
        let (edge, child) = children.swap_remove(pos);
        NodeView::with_parent(child, edge)
    }

    /// One-line form: `[edge⟶]Kind(n=.., v=..)`.
    pub fn line(&self, style: &Style) -> String {
        node_line(&self.node, self.parent_edge.as_ref(), style)
    }

    /// Node line, optionally followed by one indented line per child.
    pub fn describe(&self, include_children: bool, style: &Style) -> String {
        let mut output = self.line(style);
        if include_children {
            for (i, (edge, child)) in self.sorted_children().iter().enumerate() {
                output.push_str(&format!(
                    "\n    - [{i}] {}: {}",
                    style.paint(&edge.to_string(), Role::ChildEdge),
                    node_line(child, None, style)
                ));
            }
        }
        output
    }
}

fn node_line<N: SearchNode>(node: &N, parent_edge: Option<&N::Edge>, style: &Style) -> String {
    let kind = node.kind();
    let mut output = String::new();
    if let Some(edge) = parent_edge {
        output.push_str(&style.paint(&edge.to_string(), Role::ParentEdge(kind)));
        output.push('⟶');
    }
    output.push_str(&style.paint(kind.name(), Role::Kind(kind)));
    output.push_str(&format!("(n={}, v={:.3})", node.visit_count(), node.value()));
    output
}

impl<N: SearchNode> fmt::Display for NodeView<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(self.show_children, &Style::plain()))
    }
}
