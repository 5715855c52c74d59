use crate::tree::{
    search_tree::SearchTree,
    stats::collect_stats,
    tests::fixtures::planning_tree,
    view::NodeView,
};

#[test]
fn stats_count_every_node_regardless_of_visits() {
    let (tree, _) = planning_tree();
    let stats = collect_stats(&NodeView::new(tree.root()), None);

    assert_eq!(stats.decision_nodes, 3);
    assert_eq!(stats.action_nodes, 4);
    assert_eq!(stats.total_nodes(), tree.node_count());
    assert_eq!(stats.decision_children_total, 4);
    assert_eq!(stats.decision_children_max, 2);
    assert_eq!(stats.action_children_total, 2);
    assert_eq!(stats.action_children_max, 2);
    assert_eq!(stats.max_depth, Some(1));
    assert_eq!(stats.visit_count, 6);
    assert_eq!(stats.value, 2.0);
}

#[test]
fn stats_respect_max_depth() {
    let (tree, _) = planning_tree();
    let stats = collect_stats(&NodeView::new(tree.root()), Some(0));

    // root plus its two actions; the observation children sit at depth 1
    assert_eq!(stats.decision_nodes, 1);
    assert_eq!(stats.action_nodes, 2);
    assert_eq!(stats.max_depth, Some(0));
    // child counts are still those of the visited nodes
    assert_eq!(stats.action_children_total, 2);
}

#[test]
fn action_rooted_subtree_starts_at_depth_zero() {
    let (tree, ids) = planning_tree();
    let stats = collect_stats(&NodeView::new(tree.node(ids.up).expect("up")), None);

    assert_eq!(stats.action_nodes, 3);
    assert_eq!(stats.decision_nodes, 2);
    assert_eq!(stats.max_depth, Some(1));
    assert_eq!(stats.visit_count, 5);
}

#[test]
fn leaf_actions_have_no_decision_depth() {
    let (tree, ids) = planning_tree();
    for leaf in [ids.left, ids.right] {
        let stats = collect_stats(&NodeView::new(tree.node(leaf).expect("leaf")), None);

        assert_eq!(stats.total_nodes(), 1);
        assert_eq!(stats.max_depth, None);
        assert_eq!(stats.action_children_max, 0);
    }
}

#[test]
fn depth_only_grows_on_decision_layers() {
    // root -a-> A -o-> D -a-> A -o-> D
    let mut tree = SearchTree::new(1, 0.0);
    let mut parent = tree.root_id();
    for i in 0..4 {
        parent = tree
            .add_child(parent, format!("e{i}"), 1, 0.0)
            .expect("chain link");
    }
    let stats = collect_stats(&NodeView::new(tree.root()), None);

    assert_eq!(stats.max_depth, Some(2));
    assert_eq!(stats.decision_nodes, 3);
    assert_eq!(stats.action_nodes, 2);
}

#[test]
fn stats_serialize_to_json() {
    let (tree, _) = planning_tree();
    let stats = collect_stats(&NodeView::new(tree.root()), None);
    let json = serde_json::to_value(&stats).expect("stats serialize");

    assert_eq!(json["decision_nodes"], 3);
    assert_eq!(json["max_depth"], 1);
}
