use pretty_assertions::assert_eq;
use static_assertions::assert_type_eq_all;

use super::*;
use crate::nodes::{
    CompositeNode, DynamicPowerNode, DynamicUniformPowerNode, LeafNode, StaticPowerNode,
    StaticUniformPowerNode,
};
use crate::typelevel::{U0, U1, U2, U3, idx};

type Power3 = StaticPowerNode<LeafNode<i32>, 3>;
type Mixed = CompositeNode<(LeafNode<&'static str>, Power3, DynamicPowerNode<LeafNode<i32>>)>;

fn mixed() -> Mixed {
    CompositeNode::new((
        LeafNode::new("head"),
        StaticPowerNode::new([LeafNode::new(1), LeafNode::new(2), LeafNode::new(3)]),
        DynamicPowerNode::new(vec![LeafNode::new(10), LeafNode::new(20)]),
    ))
}

#[test]
fn test_classify_canonical_sets() {
    for kind in [
        NodeKind::Leaf,
        NodeKind::StaticPower,
        NodeKind::DynamicPower,
        NodeKind::StaticUniformPower,
        NodeKind::DynamicUniformPower,
        NodeKind::Composite,
    ] {
        assert_eq!(NodeKind::classify(kind.properties()), Some(kind));
    }
}

#[test]
fn test_classify_rejects_contradictions() {
    // Leaf with children-related flags.
    assert_eq!(
        NodeKind::classify(NodeProperties::LEAF | NodeProperties::IS_TYPE_UNIFORM),
        None
    );
    // Uniform children without a shared type.
    assert_eq!(
        NodeKind::classify(NodeProperties::IS_UNIFORM | NodeProperties::HAS_STATIC_SIZE),
        None
    );
    // Heterogeneous children need a static size.
    assert_eq!(NodeKind::classify(NodeProperties::empty()), None);
}

#[test]
fn test_power_and_composite_predicates() {
    assert!(NodeProperties::STATIC_POWER.is_power());
    assert!(NodeProperties::DYNAMIC_POWER.is_power());
    assert!(!NodeProperties::DYNAMIC_UNIFORM_POWER.is_power());
    assert!(!NodeProperties::LEAF.is_power());
    assert!(NodeProperties::COMPOSITE.is_composite());
    assert!(!NodeProperties::STATIC_POWER.is_composite());
    assert!(!NodeProperties::LEAF.is_composite());
}

#[test]
fn test_container_kinds() {
    assert_eq!(<LeafNode as TreeNode>::KIND, NodeKind::Leaf);
    assert_eq!(<Power3 as TreeNode>::KIND, NodeKind::StaticPower);
    assert_eq!(<DynamicPowerNode<LeafNode> as TreeNode>::KIND, NodeKind::DynamicPower);
    assert_eq!(
        <StaticUniformPowerNode<LeafNode, 4> as TreeNode>::KIND,
        NodeKind::StaticUniformPower
    );
    assert_eq!(
        <DynamicUniformPowerNode<LeafNode> as TreeNode>::KIND,
        NodeKind::DynamicUniformPower
    );
    assert_eq!(<Mixed as TreeNode>::KIND, NodeKind::Composite);
}

#[test]
fn test_derived_flags() {
    assert!(<LeafNode as TreeNode>::IS_LEAF);
    assert!(<LeafNode as TreeNode>::HAS_STATIC_SIZE);
    assert!(<Power3 as TreeNode>::IS_POWER);
    assert!(<Power3 as TreeNode>::IS_TYPE_UNIFORM);
    assert!(!<Power3 as TreeNode>::IS_UNIFORM);
    assert!(<StaticUniformPowerNode<LeafNode, 2> as TreeNode>::IS_UNIFORM);
    assert!(!<DynamicPowerNode<LeafNode> as TreeNode>::HAS_STATIC_SIZE);
    assert!(<Mixed as TreeNode>::IS_COMPOSITE);
    assert!(!<Mixed as TreeNode>::IS_TYPE_UNIFORM);
}

#[test]
fn test_static_degrees() {
    assert_eq!(<LeafNode as TreeNode>::STATIC_DEGREE, Some(0));
    assert_eq!(<Power3 as TreeNode>::STATIC_DEGREE, Some(3));
    assert_eq!(<Mixed as TreeNode>::STATIC_DEGREE, Some(3));
    assert_eq!(<DynamicPowerNode<LeafNode> as TreeNode>::STATIC_DEGREE, None);
    assert_eq!(<DynamicUniformPowerNode<LeafNode> as TreeNode>::STATIC_DEGREE, None);

    assert_type_eq_all!(<LeafNode as StaticDegree>::Degree, U0);
    assert_type_eq_all!(<Power3 as StaticDegree>::Degree, U3);
    assert_type_eq_all!(<CompositeNode<(LeafNode, LeafNode)> as StaticDegree>::Degree, U2);
}

#[test]
fn test_child_types() {
    assert_type_eq_all!(<Mixed as ChildAt<U0>>::Child, LeafNode<&'static str>);
    assert_type_eq_all!(<Mixed as ChildAt<U1>>::Child, Power3);
    assert_type_eq_all!(<Power3 as ChildAt<U2>>::Child, LeafNode<i32>);
    assert_type_eq_all!(<Power3 as Child<usize>>::Output, LeafNode<i32>);
}

#[test]
fn test_child_access() {
    let mut tree = mixed();

    assert_eq!(*tree.child(idx::<0>()).value(), "head");
    assert_eq!(*tree.child(idx::<1>()).child(2usize).value(), 3);
    assert_eq!(*tree.child(idx::<1>()).child(idx::<0>()).value(), 1);
    assert_eq!(*tree.child(idx::<2>()).child(1usize).value(), 20);

    *tree.child_mut(idx::<2>()).child_mut(0usize).value_mut() = 11;
    assert_eq!(*tree.child(idx::<2>()).child(0usize).value(), 11);
}

#[test]
fn test_child_macro() {
    let tree = mixed();

    assert_eq!(*child!(tree, idx::<1>(), 1usize).value(), 2);
    assert_eq!(*child!(tree, idx::<2>(), 0usize).value(), 10);
    assert_eq!(child!(tree).degree(), 3);
}

#[test]
fn test_node_view() {
    let tree = mixed();
    let view: &dyn NodeView = &tree;

    assert_eq!(view.kind(), NodeKind::Composite);
    assert_eq!(view.degree(), 3);
    assert!(view.child_view(3).is_none());

    let power = view.child_view(1).map(|child| child.kind());
    assert_eq!(power, Some(NodeKind::StaticPower));

    let dynamic = view.child_view(2).map(|child| child.degree());
    assert_eq!(dynamic, Some(2));

    let leaf = view.child_view(0).and_then(|leaf| leaf.child_view(0));
    assert!(leaf.is_none());
}
