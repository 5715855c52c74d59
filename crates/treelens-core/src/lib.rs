mod tree;

pub use tree::config::{ConfigError, DebuggerConfig};
pub use tree::debugger::{CountKind, TreeDebugger};
pub use tree::error::{DebugError, TreeError};
pub use tree::ids::{NodeId, NodeKey};
pub use tree::node::{NodeKind, SearchNode, sorted_children};
pub use tree::preferred::{PreferredStep, trace_preferred_path};
pub use tree::render::{PrintMode, RenderOptions, render};
pub use tree::search_tree::{NodeRef, SearchTree};
pub use tree::similarity::{Matcher, SIMILARITY_THRESHOLD, SequenceRatio, Similarity};
pub use tree::stats::{TreeStats, collect_stats};
pub use tree::style::{Role, Style};
pub use tree::view::{LookupKey, NodeView};
