use std::fmt;

use crate::tree::{
    debugger::TreeDebugger,
    error::{DebugError, TreeError},
    ids::{NodeId, NodeKey},
    node::{NodeKind, SearchNode},
};

#[derive(Debug, Clone)]
/// One node of the arena. Children are stored as `(edge, child id)` pairs in
/// insertion order, which is the enumeration order the debugger sees.
struct NodeData<L> {
    kind: NodeKind,
    visit_count: u64,
    value: f64,
    parent: Option<NodeId>,
    children: Vec<(L, NodeId)>,
}

#[derive(Debug, Clone)]
/// Arena-backed search tree a planner can fill in.
/// The root is always a decision node at index 0.
pub struct SearchTree<L> {
    nodes: Vec<NodeData<L>>,
}

impl<L> SearchTree<L>
where
    L: Clone + PartialEq + fmt::Display,
{
    /// Create a tree with a single root decision node.
    pub fn new(root_visits: u64, root_value: f64) -> Self {
        SearchTree {
            nodes: vec![NodeData {
                kind: NodeKind::Decision,
                visit_count: root_visits,
                value: root_value,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Return the root node id.
    pub fn root_id(&self) -> NodeId {
        NodeId::from(0)
    }

    /// Return how many nodes exist in the tree arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn data(&self, node_id: NodeId) -> Result<&NodeData<L>, TreeError> {
        self.nodes
            .get(node_id.index())
            .ok_or(TreeError::MissingNode { node_id })
    }

    fn data_mut(&mut self, node_id: NodeId) -> Result<&mut NodeData<L>, TreeError> {
        self.nodes
            .get_mut(node_id.index())
            .ok_or(TreeError::MissingNode { node_id })
    }

    /// Attach a child under `parent`.
    /// The child kind is derived from the parent so the tree always alternates.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        edge: L,
        visit_count: u64,
        value: f64,
    ) -> Result<NodeId, TreeError> {
        let kind = {
            let data = self.data(parent)?;
            if data.children.iter().any(|(existing, _)| *existing == edge) {
                return Err(TreeError::DuplicateEdge {
                    node_id: parent,
                    edge: edge.to_string(),
                });
            }
            data.kind.child_kind()
        };

        let child_id = NodeId::from(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            visit_count,
            value,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.data_mut(parent)?.children.push((edge, child_id));
        Ok(child_id)
    }

    /// Overwrite the statistics of a node, as a planner does during backup.
    pub fn set_stats(
        &mut self,
        node_id: NodeId,
        visit_count: u64,
        value: f64,
    ) -> Result<(), TreeError> {
        let data = self.data_mut(node_id)?;
        data.visit_count = visit_count;
        data.value = value;
        Ok(())
    }

    /// Return the parent of a given node
    pub fn parent(&self, node_id: NodeId) -> Result<Option<NodeId>, TreeError> {
        Ok(self.data(node_id)?.parent)
    }

    /// Return a read-only handle onto a node.
    pub fn node(&self, node_id: NodeId) -> Result<NodeRef<'_, L>, TreeError> {
        self.data(node_id)?;
        Ok(NodeRef {
            tree: self,
            node_id,
        })
    }

    /// Return a handle onto the root.
    pub fn root(&self) -> NodeRef<'_, L> {
        NodeRef {
            tree: self,
            node_id: self.root_id(),
        }
    }

    /// Open a debugger rooted at `node_id`.
    pub fn debugger(&self, node_id: NodeId) -> Result<TreeDebugger<NodeRef<'_, L>>, DebugError> {
        let node = self.node(node_id)?;
        Ok(TreeDebugger::new(node))
    }
}

/// Lightweight `(tree, id)` handle implementing `SearchNode`.
/// Copying it never copies children; it always reads the current arena state.
pub struct NodeRef<'a, L> {
    tree: &'a SearchTree<L>,
    node_id: NodeId,
}

impl<L> Clone for NodeRef<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for NodeRef<'_, L> {}

impl<L> fmt::Debug for NodeRef<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("node_id", &self.node_id)
            .finish()
    }
}

impl<'a, L> NodeRef<'a, L> {
    /// Arena id of the referenced node.
    pub fn id(&self) -> NodeId {
        self.node_id
    }

    // Handles are only built by `SearchTree` after checking the id.
    fn data(&self) -> &'a NodeData<L> {
        &self.tree.nodes[self.node_id.index()]
    }
}

impl<'a, L> SearchNode for NodeRef<'a, L>
where
    L: Clone + PartialEq + fmt::Display,
{
    type Edge = L;

    fn kind(&self) -> NodeKind {
        self.data().kind
    }

    fn visit_count(&self) -> u64 {
        self.data().visit_count
    }

    fn value(&self) -> f64 {
        self.data().value
    }

    fn children(&self) -> Vec<(L, Self)> {
        self.data()
            .children
            .iter()
            .map(|(edge, child)| {
                (
                    edge.clone(),
                    NodeRef {
                        tree: self.tree,
                        node_id: *child,
                    },
                )
            })
            .collect()
    }

    fn key(&self) -> NodeKey {
        NodeKey::from(self.node_id)
    }

    fn child_count(&self) -> usize {
        self.data().children.len()
    }
}
