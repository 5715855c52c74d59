use proptest::prelude::*;

use crate::tree::{
    debugger::TreeDebugger,
    error::DebugError,
    ids::NodeId,
    node::{NodeKind, SearchNode, sorted_children},
    render::{PrintMode, RenderOptions},
    search_tree::{NodeRef, SearchTree},
    view::{LookupKey, NodeView},
};

/// Each entry attaches one node under `parent % nodes_so_far`.
fn build_tree(nodes: &[(usize, u64, f64)]) -> SearchTree<String> {
    let mut tree = SearchTree::new(3, 0.0);
    for (i, (parent, visits, value)) in nodes.iter().enumerate() {
        let parent = NodeId::from(parent % tree.node_count());
        tree.add_child(parent, format!("e{i}"), *visits, *value)
            .expect("labels are unique");
    }
    tree
}

fn decision_depth(tree: &SearchTree<String>, id: NodeId) -> usize {
    let mut depth = 0;
    let mut cursor = id;
    while let Some(parent) = tree.parent(cursor).expect("node exists") {
        if tree.node(cursor).expect("node exists").kind() == NodeKind::Decision {
            depth += 1;
        }
        cursor = parent;
    }
    depth
}

/// Nesting level of every node drawn by the renderer, in drawing order.
/// Nodes more than `max_depth` decision layers down are not drawn.
fn expected_levels(
    node: NodeRef<'_, String>,
    level: usize,
    depth: usize,
    options: &RenderOptions,
    out: &mut Vec<usize>,
) {
    if options.max_depth.is_some_and(|max_depth| depth > max_depth) {
        return;
    }
    out.push(level);
    for (_, child) in sorted_children(&node) {
        if options.mode == PrintMode::Complete || child.visit_count() > 1 {
            let child_depth = child.kind().step_depth(depth);
            expected_levels(child, level + 1, child_depth, options, out);
        }
    }
}

fn tree_strategy() -> impl Strategy<Value = Vec<(usize, u64, f64)>> {
    proptest::collection::vec((any::<usize>(), 0u64..5, -2.0f64..2.0), 0..40)
}

proptest! {
    #[test]
    fn node_counts_add_up(nodes in tree_strategy()) {
        let tree = build_tree(&nodes);
        let debugger = TreeDebugger::new(tree.root());

        prop_assert_eq!(
            debugger.node_count(),
            debugger.decision_count() + debugger.action_count()
        );
        prop_assert_eq!(debugger.node_count(), tree.node_count());
    }

    #[test]
    fn layers_hold_decision_nodes_at_their_depth(nodes in tree_strategy()) {
        let tree = build_tree(&nodes);
        let debugger = TreeDebugger::new(tree.root());
        let max_depth = debugger.depth().expect("root is a decision node");

        let mut seen = 0;
        for depth in 0..=max_depth {
            let layer = debugger.layer(depth).expect("depth within range");
            for view in &layer {
                prop_assert_eq!(view.kind(), NodeKind::Decision);
                prop_assert_eq!(decision_depth(&tree, view.node().id()), depth);
            }
            seen += layer.len();
        }
        prop_assert_eq!(seen, debugger.decision_count());
        let out_of_range = matches!(
            debugger.layer(max_depth + 1),
            Err(DebugError::OutOfRange { .. })
        );
        prop_assert!(out_of_range);
    }

    #[test]
    fn render_nesting_matches_ancestry(
        nodes in tree_strategy(),
        complete in any::<bool>(),
        max_depth in proptest::option::of(0usize..4),
    ) {
        let tree = build_tree(&nodes);
        let debugger = TreeDebugger::new(tree.root());
        let mode = if complete { PrintMode::Complete } else { PrintMode::Summary };
        let options = RenderOptions::new(max_depth, mode);

        let lines = debugger.render(&options);
        prop_assert_eq!(&lines, &debugger.render(&options));

        let mut levels = Vec::new();
        expected_levels(tree.root(), 0, 0, &options, &mut levels);
        prop_assert_eq!(lines.len(), levels.len());

        for (line, level) in lines.iter().zip(levels) {
            let chars: Vec<char> = line.chars().collect();
            let prefix_len = level * 5;
            prop_assert!(chars[..prefix_len].iter().all(|c| "│├└─ ".contains(*c)));
            prop_assert!(chars[prefix_len].is_alphanumeric());
            if let (Some(max_depth), Some((_, tail))) = (max_depth, line.split_once("(depth=")) {
                let drawn: usize = tail.trim_end_matches(')').parse().expect("depth label");
                prop_assert!(drawn <= max_depth);
            }
        }
    }

    #[test]
    fn addressing_modes_agree(nodes in tree_strategy()) {
        let tree = build_tree(&nodes);
        let root = NodeView::new(tree.root());
        let children = root.sorted_children();

        for (pos, (edge, child)) in children.iter().enumerate() {
            let by_edge = root.get(LookupKey::Edge(edge.clone())).expect("exact edge");
            let by_index = root.get(pos as isize).expect("valid index");
            let by_text = root.get(edge.as_str()).expect("edge string");
            prop_assert_eq!(by_edge.key(), child.key());
            prop_assert_eq!(by_index.key(), child.key());
            prop_assert_eq!(by_text.key(), child.key());
        }

        let past_end = children.len() as isize;
        prop_assert_eq!(
            root.get(past_end).expect_err("index past the end"),
            DebugError::IndexOutOfRange { index: past_end, len: children.len() }
        );
    }
}
