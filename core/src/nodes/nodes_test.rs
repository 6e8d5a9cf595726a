use pretty_assertions::assert_eq;

use super::*;
use crate::node::{Child, DynamicChildren, NodeKind, NodeView};
use crate::typelevel::idx;

#[test]
fn test_leaf_payload() {
    let mut leaf = LeafNode::new(String::from("a"));
    assert_eq!(leaf.value(), "a");

    leaf.value_mut().push('b');
    let old = leaf.set_value(String::from("c"));
    assert_eq!(old, "ab");
    assert_eq!(leaf.into_value(), "c");

    assert_eq!(LeafNode::<u8>::default().degree(), 0);
}

#[test]
fn test_static_power_construction() {
    let squares = StaticPowerNode::<LeafNode<usize>, 4>::from_fn(|i| LeafNode::new(i * i));
    let values: Vec<usize> = squares.iter().map(|leaf| *leaf.value()).collect();
    assert_eq!(values, vec![0, 1, 4, 9]);
    assert_eq!(StaticPowerNode::<LeafNode, 4>::DEGREE, 4);

    let repeated = StaticPowerNode::<_, 3>::repeat(LeafNode::new('x'));
    assert!(repeated.iter().all(|leaf| *leaf.value() == 'x'));
    assert_eq!(repeated.degree(), 3);
}

#[test]
fn test_static_power_set_child_returns_previous() {
    let mut node = StaticPowerNode::new([LeafNode::new(1), LeafNode::new(2)]);

    let old = node.set_child(1, LeafNode::new(5));
    assert_eq!(old, LeafNode::new(2));
    assert_eq!(*node.child(idx::<1>()).value(), 5);

    node.children_mut()[0] = LeafNode::new(7);
    assert_eq!(node.into_children(), [LeafNode::new(7), LeafNode::new(5)]);
}

#[test]
fn test_dynamic_power_resize() {
    let mut node = DynamicPowerNode::with_degree(2, LeafNode::new(0u8));
    assert_eq!(node.degree(), 2);

    node.push(LeafNode::new(3));
    assert_eq!(node.degree(), 3);
    assert_eq!(*node.child(2usize).value(), 3);

    node.resize(5, LeafNode::new(9));
    assert_eq!(node.degree(), 5);
    assert_eq!(*node.child_dyn(4).value(), 9);

    node.resize(1, LeafNode::new(9));
    assert_eq!(node.children(), &[LeafNode::new(0)]);

    let old = node.set_child(0, LeafNode::new(1));
    assert_eq!(*old.value(), 0);
}

#[test]
fn test_dynamic_power_collects() {
    let node: DynamicPowerNode<LeafNode<i64>> = (1..=3).map(LeafNode::new).collect();
    assert_eq!(node.degree(), 3);
    assert_eq!(node.into_children().len(), 3);

    let empty = DynamicPowerNode::<LeafNode>::default();
    assert_eq!(empty.degree(), 0);
    assert!(empty.child_view(0).is_none());
}

#[test]
fn test_uniform_nodes_share_one_child() {
    let mut node = StaticUniformPowerNode::<_, 3>::new(LeafNode::new(4));
    assert_eq!(node.degree(), 3);
    assert!(core::ptr::eq(node.child(0usize), node.child(2usize)));
    assert!(core::ptr::eq(node.child(idx::<1>()), node.shared_child()));

    *node.child_mut(idx::<2>()).value_mut() = 8;
    assert_eq!(*node.child(0usize).value(), 8);

    let old = node.set_child(LeafNode::new(1));
    assert_eq!(*old.value(), 8);
    assert_eq!(node.into_child(), LeafNode::new(1));
}

#[test]
fn test_dynamic_uniform_degree() {
    let mut node = DynamicUniformPowerNode::new(2, LeafNode::new("shared"));
    assert_eq!(node.degree(), 2);
    assert!(node.child_view(1).is_some());
    assert!(node.child_view(2).is_none());

    node.set_degree(0);
    assert_eq!(NodeView::degree(&node), 0);
    assert!(node.child_view(0).is_none());

    *node.shared_child_mut().value_mut() = "changed";
    assert_eq!(*node.into_child().value(), "changed");
}

#[test]
fn test_composite_children() {
    let mut node = CompositeNode::new((LeafNode::new(1u8), LeafNode::new("two"), LeafNode::new(3.0)));
    assert_eq!(NodeView::degree(&node), 3);
    assert_eq!(node.kind(), NodeKind::Composite);

    node.children_mut().0.set_value(10);
    assert_eq!(*node.child(idx::<0>()).value(), 10);
    assert_eq!(*node.children().1.value(), "two");

    let (a, b, c) = node.into_children();
    assert_eq!((*a.value(), *b.value(), *c.value()), (10, "two", 3.0));
}

#[test]
fn test_composite_of_twelve() {
    let node = CompositeNode::new((
        LeafNode::new(0),
        LeafNode::new(1),
        LeafNode::new(2),
        LeafNode::new(3),
        LeafNode::new(4),
        LeafNode::new(5),
        LeafNode::new(6),
        LeafNode::new(7),
        LeafNode::new(8),
        LeafNode::new(9),
        LeafNode::new(10),
        LeafNode::new(11),
    ));
    assert_eq!(NodeView::degree(&node), 12);
    assert_eq!(*node.child(idx::<11>()).value(), 11);
    assert!(node.child_view(12).is_none());
}
