/// A wraper for an integer index used to address nodes of a `SearchTree`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw arena index of this node
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    /// Allow for explicit conversion from usize to NodeId
    fn from(value: usize) -> Self {
        NodeId(value)
    }
}

/// Stable identity of an externally owned node.
/// Two handles onto the same underlying node must report the same key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeKey(u64);

impl NodeKey {
    /// Return the internal numeric representation of this key.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for NodeKey {
    fn from(value: u64) -> Self {
        NodeKey(value)
    }
}

impl From<NodeId> for NodeKey {
    fn from(value: NodeId) -> Self {
        NodeKey(value.index() as u64)
    }
}
