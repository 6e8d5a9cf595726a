//! Closure-driven traversals over mixed static and dynamic trees.

use core::cell::{Cell, RefCell};

use pretty_assertions::assert_eq;
use typetree_core::prelude::*;

type Tree = CompositeNode<(StaticPowerNode<LeafNode<u32>, 3>, LeafNode<u32>)>;

fn tree() -> Tree {
    CompositeNode::new((
        StaticPowerNode::from_fn(|i| LeafNode::new(i as u32)),
        LeafNode::new(10),
    ))
}

#[test]
fn pre_and_post_only() {
    let calls = Cell::new(0);
    for_each_node_with(
        &tree(),
        |_, _| calls.set(calls.get() + 1),
        |_, _| {},
        |_, _| calls.set(calls.get() + 1),
    );
    assert_eq!(calls.get(), 4);
}

#[test]
fn pre_leaf_and_post() {
    let calls = Cell::new(0);
    let bump = |_: &dyn NodeView, _: &TreePath| calls.set(calls.get() + 1);
    for_each_node_with(&tree(), bump, bump, bump);
    assert_eq!(calls.get(), 8);
}

#[test]
fn every_node_once_parents_first() {
    let mut seen = Vec::new();
    for_each_node(&tree(), |node, path| seen.push((node.kind(), path.to_string())));
    assert_eq!(
        seen,
        vec![
            (NodeKind::Composite, "[]".to_string()),
            (NodeKind::StaticPower, "[0]".to_string()),
            (NodeKind::Leaf, "[0, 0]".to_string()),
            (NodeKind::Leaf, "[0, 1]".to_string()),
            (NodeKind::Leaf, "[0, 2]".to_string()),
            (NodeKind::Leaf, "[1]".to_string()),
        ]
    );
}

#[test]
fn leaves_left_to_right() {
    let mut paths = Vec::new();
    for_each_leaf_node(&tree(), |_, path| paths.push(path.clone()));
    assert_eq!(
        paths,
        vec![
            TreePath::from([0, 0]),
            TreePath::from([0, 1]),
            TreePath::from([0, 2]),
            TreePath::from([1]),
        ]
    );
}

#[test]
fn post_runs_children_first() {
    let order = RefCell::new(Vec::new());
    for_each_node_with(
        &tree(),
        |_, _| {},
        |_, path| order.borrow_mut().push(format!("leaf {path}")),
        |node, path| order.borrow_mut().push(format!("post {:?} {path}", node.kind())),
    );
    assert_eq!(
        order.into_inner(),
        vec![
            "leaf [0, 0]",
            "leaf [0, 1]",
            "leaf [0, 2]",
            "post StaticPower [0]",
            "leaf [1]",
            "post Composite []",
        ]
    );
}

#[test]
fn dynamic_subtrees() {
    let tree = CompositeNode::new((
        DynamicPowerNode::new(vec![
            DynamicPowerNode::with_degree(2, LeafNode::<()>::default()),
            DynamicPowerNode::default(),
            DynamicPowerNode::with_degree(1, LeafNode::default()),
        ]),
        DynamicUniformPowerNode::new(3, LeafNode::<()>::default()),
    ));

    let leaves = Cell::new(0);
    for_each_leaf_node(&tree, |_, _| leaves.set(leaves.get() + 1));
    assert_eq!(leaves.get(), 2 + 0 + 1 + 3);

    let nodes = Cell::new(0);
    for_each_node(&tree, |_, _| nodes.set(nodes.get() + 1));
    assert_eq!(nodes.get(), count_nodes(&tree));
}

#[test]
fn callbacks_agree_with_static_counts() {
    let tree = tree();

    let nodes = Cell::new(0);
    for_each_node(&tree, |_, _| nodes.set(nodes.get() + 1));
    assert_eq!(nodes.get(), StaticNodeCount::<Tree>::RESULT);

    let leaves = Cell::new(0);
    for_each_leaf_node(&tree, |_, _| leaves.set(leaves.get() + 1));
    assert_eq!(leaves.get(), StaticLeafCount::<Tree>::RESULT);
}

#[test]
fn node_view_reaches_payload_free_structure() {
    let degrees = Cell::new(0);
    for_each_node_with(
        &tree(),
        |node, _| degrees.set(degrees.get() + node.degree()),
        |node, _| assert_eq!(node.degree(), 0),
        |_, _| {},
    );
    assert_eq!(degrees.get(), 2 + 3);
}
