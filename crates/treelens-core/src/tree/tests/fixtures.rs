use crate::tree::{ids::NodeId, search_tree::SearchTree};

/// Ids of the nodes in `planning_tree`.
pub struct PlanningIds {
    pub up: NodeId,
    pub down: NodeId,
    pub o1: NodeId,
    pub o2: NodeId,
    pub left: NodeId,
    pub right: NodeId,
}

/// ```text
/// root D(6, 2.0)
/// ├── up   A(5, 1.0)
/// │   ├── o1 D(3, 1.0)
/// │   │   ├── left  A(2, 0.5)
/// │   │   └── right A(1, 0.7)
/// │   └── o2 D(2, 0.8)
/// └── down A(1, 2.0)
/// ```
/// Children are inserted out of string order on purpose.
pub fn planning_tree() -> (SearchTree<String>, PlanningIds) {
    let mut tree = SearchTree::new(6, 2.0);
    let root = tree.root_id();
    let up = tree.add_child(root, "up".to_string(), 5, 1.0).expect("add up");
    let down = tree
        .add_child(root, "down".to_string(), 1, 2.0)
        .expect("add down");
    let o2 = tree.add_child(up, "o2".to_string(), 2, 0.8).expect("add o2");
    let o1 = tree.add_child(up, "o1".to_string(), 3, 1.0).expect("add o1");
    let right = tree
        .add_child(o1, "right".to_string(), 1, 0.7)
        .expect("add right");
    let left = tree
        .add_child(o1, "left".to_string(), 2, 0.5)
        .expect("add left");

    (
        tree,
        PlanningIds {
            up,
            down,
            o1,
            o2,
            left,
            right,
        },
    )
}

/// Root decision node with the two actions `up` and `down` only.
pub fn two_action_tree() -> SearchTree<String> {
    let mut tree = SearchTree::new(6, 0.0);
    let root = tree.root_id();
    tree.add_child(root, "up".to_string(), 5, 1.0).expect("add up");
    tree.add_child(root, "down".to_string(), 1, 2.0)
        .expect("add down");
    tree
}
