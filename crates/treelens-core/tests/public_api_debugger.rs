use treelens_core::{
    CountKind, DebugError, NodeKind, PrintMode, RenderOptions, SearchNode, SearchTree,
    TreeDebugger,
};

fn up_down_tree() -> SearchTree<String> {
    let mut tree = SearchTree::new(6, 1.0);
    let root = tree.root_id();
    tree.add_child(root, "up".to_string(), 5, 1.0)
        .expect("add up");
    tree.add_child(root, "down".to_string(), 1, 2.0)
        .expect("add down");
    tree
}

#[test]
fn public_summary_and_complete_rendering() {
    let tree = up_down_tree();
    let debugger = tree.debugger(tree.root_id()).expect("root exists");

    let summary = debugger.render(&RenderOptions::default()).join("\n");
    assert!(summary.contains("up⟶"));
    assert!(!summary.contains("down⟶"));

    let complete = debugger
        .render(&RenderOptions::new(None, PrintMode::Complete))
        .join("\n");
    assert!(complete.contains("up⟶"));
    assert!(complete.contains("down⟶"));

    assert_eq!(debugger.count_nodes(CountKind::Action), 2);
}

#[test]
fn public_index_lookup_uses_string_order() {
    let tree = up_down_tree();
    let debugger = TreeDebugger::new(tree.root());

    let first = debugger.get(0_isize).expect("index 0");
    let second = debugger.get(1_isize).expect("index 1");
    assert_eq!(first.parent_edge().map(String::as_str), Some("down"));
    assert_eq!(second.parent_edge().map(String::as_str), Some("up"));
    assert!(matches!(
        debugger.get(2_isize),
        Err(DebugError::IndexOutOfRange { index: 2, len: 2 })
    ));
}

#[test]
fn public_preferred_path_prefers_down() {
    let tree = up_down_tree();
    let debugger = TreeDebugger::new(tree.root());

    let path = debugger.preferred_path(None);
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].edge, "down");
    assert!(!path[0].equally_good.contains(&"up".to_string()));
}

#[test]
fn public_sessions_see_planner_updates_between_steps() {
    let mut tree = up_down_tree();
    let root = tree.root_id();
    {
        let debugger = TreeDebugger::new(tree.root());
        assert_eq!(debugger.node_count(), 3);
        assert_eq!(debugger.depth(), Some(0));
    }

    // the planner keeps expanding once the session is over
    let up = tree
        .root()
        .children()
        .into_iter()
        .find(|(edge, _)| edge == "up")
        .map(|(_, child)| child.id())
        .expect("up exists");
    let obs = tree
        .add_child(up, "obs".to_string(), 4, 0.5)
        .expect("add observation");
    tree.set_stats(root, 10, 1.5).expect("root exists");

    let mut debugger = TreeDebugger::new(tree.root());
    assert_eq!(debugger.node_count(), 4);
    assert_eq!(debugger.depth(), Some(1));
    assert_eq!(debugger.current().visit_count(), 10);

    debugger.navigate("up").expect("move to up");
    let next = debugger.navigate("ob").expect("fuzzy move to obs");
    assert_eq!(next.kind(), NodeKind::Decision);
    assert_eq!(next.node().id(), obs);
}
