use thiserror::Error;

use crate::tree::ids::NodeId;

/// Error type for building and addressing a `SearchTree`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Attempted to access a node id that does not exist in the arena.
    #[error("missing node with id {}", .node_id.index())]
    MissingNode { node_id: NodeId },
    /// Attempted to attach a second child under an edge label already in use.
    #[error("node {} already has a child under edge '{edge}'", .node_id.index())]
    DuplicateEdge { node_id: NodeId, edge: String },
}

/// Error type for debugger queries.
///
/// Every variant is raised at the call that violates the contract; nothing
/// is retried and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DebugError {
    /// Wrong kind of argument, such as an unknown node or count kind.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The key matched no child, exactly or by similarity.
    #[error("cannot access children with key {key}")]
    InvalidKey { key: String },
    /// A positional key fell outside `[0, len)`.
    #[error("index {index} is out of range for {len} children")]
    IndexOutOfRange { index: isize, len: usize },
    /// A layer depth outside `[0, max_depth]`.
    #[error("depth {depth} is out of range (maximum: {})", fmt_max_depth(.max_depth))]
    OutOfRange {
        depth: usize,
        max_depth: Option<usize>,
    },
}

fn fmt_max_depth(max_depth: &Option<usize>) -> String {
    match max_depth {
        Some(depth) => depth.to_string(),
        None => "none".to_string(),
    }
}

impl From<TreeError> for DebugError {
    fn from(err: TreeError) -> Self {
        DebugError::InvalidArgument(err.to_string())
    }
}
