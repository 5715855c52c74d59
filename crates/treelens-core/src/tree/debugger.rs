use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc, str::FromStr};

use tracing::{debug, trace};

use crate::tree::{
    config::DebuggerConfig,
    error::DebugError,
    ids::NodeKey,
    node::{NodeKind, SearchNode, sorted_children},
    preferred::{PreferredStep, trace_preferred_path},
    render::{RenderOptions, render},
    similarity::Matcher,
    stats::{TreeStats, collect_stats},
    style::Style,
    view::{LookupKey, NodeView},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which nodes `count_nodes` counts.
pub enum CountKind {
    All,
    Decision,
    Action,
}

impl FromStr for CountKind {
    type Err = DebugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CountKind::All),
            "decision" | "v" => Ok(CountKind::Decision),
            "action" | "q" => Ok(CountKind::Action),
            _ => Err(DebugError::InvalidArgument(format!(
                "invalid value for kind={s}; valid values are all, decision, action"
            ))),
        }
    }
}

/// Cursor over a search tree.
///
/// The debugger keeps a root and a current position and answers every query
/// relative to the current position. Subtree statistics are memoized by the
/// identity of the underlying node, so returning to a node reuses them. The
/// tree must not change while a debugger is looking at it; for `SearchTree`
/// the shared borrow held by the handles guarantees that.
pub struct TreeDebugger<N: SearchNode> {
    root: NodeView<N>,
    current: NodeView<N>,
    matcher: Rc<Matcher>,
    style: Style,
    stats_cache: RefCell<HashMap<NodeKey, TreeStats>>,
}

impl<N: SearchNode> TreeDebugger<N> {
    /// Start a session at `root` with the default matcher and plain output.
    pub fn new(root: N) -> Self {
        let root = NodeView::new(root);
        TreeDebugger {
            current: root.clone(),
            root,
            matcher: Rc::new(Matcher::default()),
            style: Style::plain(),
            stats_cache: RefCell::new(HashMap::new()),
        }
    }

    /// Start a session using the addressing and styling settings of `config`.
    pub fn with_config(root: N, config: &DebuggerConfig) -> Self {
        TreeDebugger::new(root)
            .with_matcher(config.matcher())
            .with_style(config.style())
    }

    /// Replace the similarity used for text keys.
    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = Rc::new(matcher);
        self
    }

    /// Replace the styling used for printed lines.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// A fresh session rooted at `view`, sharing this session's settings.
    fn spawn(&self, view: NodeView<N>) -> Self {
        TreeDebugger {
            current: view.clone(),
            root: view,
            matcher: Rc::clone(&self.matcher),
            style: self.style,
            stats_cache: RefCell::new(HashMap::new()),
        }
    }

    /// The node the session started from.
    pub fn root(&self) -> &NodeView<N> {
        &self.root
    }

    /// The node under the cursor.
    pub fn current(&self) -> &NodeView<N> {
        &self.current
    }

    /// Edge that leads to the current node, `None` at the session root.
    pub fn parent_edge(&self) -> Option<&N::Edge> {
        self.current.parent_edge()
    }

    /// Similarity and threshold used for text keys.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Styling applied to rendered and described lines.
    pub fn style(&self) -> Style {
        self.style
    }

    /// Look up a child of the current node without moving the cursor.
    pub fn get(&self, key: impl Into<LookupKey<N::Edge>>) -> Result<NodeView<N>, DebugError> {
        self.current.lookup(&key.into(), &self.matcher)
    }

    /// Move the cursor to a child of the current node.
    pub fn navigate(
        &mut self,
        key: impl Into<LookupKey<N::Edge>>,
    ) -> Result<&NodeView<N>, DebugError> {
        let key = key.into();
        let next = self.current.lookup(&key, &self.matcher)?;
        debug!(key = %key, node = %next.line(&Style::plain()), "moved cursor");
        self.current = next;
        Ok(&self.current)
    }

    /// Move the cursor back to the session root.
    pub fn reset(&mut self) {
        self.current = self.root.clone();
    }

    fn with_stats<T>(&self, f: impl FnOnce(&TreeStats) -> T) -> T {
        let key = self.current.key();
        let mut cache = self.stats_cache.borrow_mut();
        let stats = cache.entry(key).or_insert_with(|| {
            trace!(node = key.value(), "stats cache miss");
            collect_stats(&self.current, None)
        });
        f(stats)
    }

    /// Aggregate statistics of the subtree under the current node.
    pub fn stats(&self) -> TreeStats {
        self.with_stats(TreeStats::clone)
    }

    /// Number of nodes of `kind` under the cursor, the cursor included.
    pub fn count_nodes(&self, kind: CountKind) -> usize {
        self.with_stats(|stats| match kind {
            CountKind::All => stats.total_nodes(),
            CountKind::Decision => stats.decision_nodes,
            CountKind::Action => stats.action_nodes,
        })
    }

    /// Number of nodes under the cursor, the cursor included.
    pub fn node_count(&self) -> usize {
        self.count_nodes(CountKind::All)
    }

    /// Number of decision nodes under the cursor.
    pub fn decision_count(&self) -> usize {
        self.count_nodes(CountKind::Decision)
    }

    /// Number of action nodes under the cursor.
    pub fn action_count(&self) -> usize {
        self.count_nodes(CountKind::Action)
    }

    /// Deepest decision layer under the current node.
    pub fn depth(&self) -> Option<usize> {
        self.with_stats(|stats| stats.max_depth)
    }

    /// All decision nodes exactly `depth` decision layers below the cursor.
    /// Large depths on a big tree can return a very large number of nodes.
    pub fn layer(&self, depth: usize) -> Result<Vec<NodeView<N>>, DebugError> {
        let max_depth = self.depth();
        if max_depth.is_none_or(|max_depth| depth > max_depth) {
            return Err(DebugError::OutOfRange { depth, max_depth });
        }

        let mut nodes = Vec::new();
        let mut pending = vec![(self.current.clone(), 0usize)];
        while let Some((view, current_depth)) = pending.pop() {
            if current_depth == depth {
                if view.kind() == NodeKind::Decision {
                    nodes.push(view);
                }
                continue;
            }
            for (edge, child) in sorted_children(view.node()).into_iter().rev() {
                let child_depth = child.kind().step_depth(current_depth);
                pending.push((NodeView::with_parent(child, edge), child_depth));
            }
        }

        debug!(depth, count = nodes.len(), "collected layer");
        Ok(nodes)
    }

    /// Like `layer`, but each node becomes the root of its own session.
    pub fn layer_debuggers(&self, depth: usize) -> Result<Vec<TreeDebugger<N>>, DebugError> {
        Ok(self
            .layer(depth)?
            .into_iter()
            .map(|view| self.spawn(view))
            .collect())
    }

    /// Branch-art lines for the subtree under the current node.
    pub fn render(&self, options: &RenderOptions) -> Vec<String> {
        render(&self.current, options, &self.style)
    }

    /// Every line of the subtree in summary mode.
    pub fn render_all(&self) -> Vec<String> {
        self.render(&RenderOptions::default())
    }

    /// Greedy best-value trace from the current node.
    pub fn preferred_path(&self, max_depth: Option<usize>) -> Vec<PreferredStep<N::Edge>> {
        trace_preferred_path(&self.current, max_depth)
    }

    /// One-line description of the session position.
    pub fn summary(&self) -> String {
        format!("TreeDebugger@\n{}", self.current.line(&self.style))
    }
}

impl<N: SearchNode> fmt::Display for TreeDebugger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.current.describe(true, &self.style))
    }
}

impl<N: SearchNode> fmt::Debug for TreeDebugger<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeDebugger")
            .field("current", &self.current.line(&Style::plain()))
            .field("cached_stats", &self.stats_cache.borrow().len())
            .finish()
    }
}
