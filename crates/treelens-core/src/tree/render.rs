use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::tree::{
    error::DebugError,
    node::{NodeKind, SearchNode},
    style::{Role, Style},
    view::NodeView,
};

/// Controls which children the renderer descends into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintMode {
    /// Hide children visited at most once.
    #[default]
    Summary,
    /// Show every child.
    Complete,
}

impl PrintMode {
    fn shows(self, visit_count: u64) -> bool {
        match self {
            PrintMode::Complete => true,
            PrintMode::Summary => visit_count > 1,
        }
    }
}

impl FromStr for PrintMode {
    type Err = DebugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(PrintMode::Summary),
            "complete" => Ok(PrintMode::Complete),
            _ => Err(DebugError::InvalidArgument(format!(
                "invalid print mode '{s}'; expected one of: summary, complete"
            ))),
        }
    }
}

impl fmt::Display for PrintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintMode::Summary => f.write_str("summary"),
            PrintMode::Complete => f.write_str("complete"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Deepest decision layer to draw; `None` draws everything.
    pub max_depth: Option<usize>,
    pub mode: PrintMode,
}

impl RenderOptions {
    pub fn new(max_depth: Option<usize>, mode: PrintMode) -> Self {
        RenderOptions { max_depth, mode }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Position of a node among the siblings that are drawn.
enum Branch {
    First,
    Middle,
    Last,
}

impl Branch {
    fn of(index: usize, len: usize) -> Branch {
        if index + 1 == len {
            Branch::Last
        } else if index == 0 {
            Branch::First
        } else {
            Branch::Middle
        }
    }

    /// Filler drawn under this node for its descendants.
    fn trunk(self) -> &'static str {
        match self {
            Branch::First | Branch::Middle => "│    ",
            Branch::Last => "     ",
        }
    }

    /// Connector drawn in front of this node.
    fn connector(self) -> &'static str {
        match self {
            Branch::First | Branch::Middle => "├─── ",
            Branch::Last => "└─── ",
        }
    }
}

/// Draw the subtree under `root` as branch art, one line per visited node,
/// in depth-first pre-order with children sorted by edge string.
pub fn render<N: SearchNode>(
    root: &NodeView<N>,
    options: &RenderOptions,
    style: &Style,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut ancestry = Vec::new();
    render_node(
        root.node(),
        root.parent_edge(),
        &mut ancestry,
        0,
        options,
        style,
        &mut lines,
    );
    lines
}

fn render_node<N: SearchNode>(
    node: &N,
    parent_edge: Option<&N::Edge>,
    ancestry: &mut Vec<Branch>,
    depth: usize,
    options: &RenderOptions,
    style: &Style,
    lines: &mut Vec<String>,
) {
    if options.max_depth.is_some_and(|max_depth| depth > max_depth) {
        return;
    }

    let mut line = String::new();
    if let Some((own, above)) = ancestry.split_last() {
        for branch in above {
            line.push_str(branch.trunk());
        }
        line.push_str(own.connector());
    }
    let view = match parent_edge {
        Some(edge) => NodeView::with_parent(node.clone(), edge.clone()),
        None => NodeView::new(node.clone()),
    };
    line.push_str(&view.line(style));
    if node.kind() == NodeKind::Decision {
        line.push_str(&style.paint(&format!("(depth={depth})"), Role::Depth));
    }
    lines.push(line);

    let visible: Vec<(N::Edge, N)> = view
        .sorted_children()
        .into_iter()
        .filter(|(_, child)| options.mode.shows(child.visit_count()))
        .collect();
    let len = visible.len();

    for (i, (edge, child)) in visible.iter().enumerate() {
        ancestry.push(Branch::of(i, len));
        render_node(
            child,
            Some(edge),
            ancestry,
            child.kind().step_depth(depth),
            options,
            style,
            lines,
        );
        ancestry.pop();
    }
}
