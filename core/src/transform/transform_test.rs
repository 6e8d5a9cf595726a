use pretty_assertions::assert_eq;
use static_assertions::assert_type_eq_all;

use super::*;
use crate::accumulate::{ConstValue, StaticNodeCount};
use crate::error::PathError;
use crate::node::{Child, NodeKind, NodeView, TreeNode};
use crate::nodes::{
    CompositeNode, DynamicPowerNode, DynamicUniformPowerNode, LeafNode, StaticPowerNode,
};
use crate::path::{Descend, TreePath};
use crate::test_utils::init_test_logging;
use crate::typelevel::idx;
use crate::view::{count_leaves, count_nodes, tree_depth};
use crate::tree_path;

type Example = CompositeNode<(StaticPowerNode<LeafNode<i32>, 3>, LeafNode<i32>)>;

fn example() -> Example {
    CompositeNode::new((
        StaticPowerNode::new([LeafNode::new(1), LeafNode::new(2), LeafNode::new(3)]),
        LeafNode::new(4),
    ))
}

fn static_node_count<T>(_tree: &T) -> usize
where
    StaticNodeCount<T>: ConstValue<usize>,
{
    <StaticNodeCount<T> as ConstValue<usize>>::VALUE
}

#[test]
fn test_identity_transformation() {
    init_test_logging();
    let tree = example();

    let copy = transformed_tree(&tree, &IdentityTransformation);
    assert_type_eq_all!(<Example as TransformTree<IdentityTransformation>>::Output, Example);
    assert_eq!(copy, tree);

    let mapped = transform_tree(&tree, &IdentityTransformation);
    assert_eq!(mapped, tree);
}

#[test]
fn test_identity_is_idempotent() {
    let tree = example();
    let once = transformed_tree(&tree, &IdentityTransformation);
    let twice = transformed_tree(&once, &IdentityTransformation);
    assert_eq!(once, twice);
    assert_eq!(static_node_count(&twice), 6);
}

/// Doubles integer payloads and turns them into strings.
struct Render;

impl NodeTransformation<LeafNode<i32>, LeafNode<i32>> for Render {
    type Output = LeafNode<String>;

    fn map_node(&self, source: &LeafNode<i32>, _rebuilt: LeafNode<i32>) -> LeafNode<String> {
        LeafNode::new((source.value() * 2).to_string())
    }
}

impl<C, const N: usize, R> NodeTransformation<StaticPowerNode<C, N>, R> for Render {
    type Output = R;

    fn map_node(&self, _source: &StaticPowerNode<C, N>, rebuilt: R) -> R {
        rebuilt
    }
}

impl<T, R> NodeTransformation<CompositeNode<T>, R> for Render {
    type Output = R;

    fn map_node(&self, _source: &CompositeNode<T>, rebuilt: R) -> R {
        rebuilt
    }
}

#[test]
fn test_transformation_changes_leaf_types() {
    let rendered = transformed_tree(&example(), &Render);

    assert_type_eq_all!(
        <Example as TransformTree<Render>>::Output,
        CompositeNode<(StaticPowerNode<LeafNode<String>, 3>, LeafNode<String>)>
    );
    assert_eq!(rendered.child(idx::<0>()).child(2usize).value(), "6");
    assert_eq!(rendered.child(idx::<1>()).value(), "8");
    assert_eq!(count_nodes(&rendered), 6);
    assert_eq!(tree_depth(&rendered), 3);
}

/// Counts the nodes it is handed.
struct Counting(core::cell::Cell<usize>);

impl<R> NodeMapping<R> for Counting {
    type Output = R;

    fn map_node(&self, rebuilt: R) -> R {
        self.0.set(self.0.get() + 1);
        rebuilt
    }
}

#[test]
fn test_mapping_sees_every_node_once() {
    let counting = Counting(core::cell::Cell::new(0));
    let tree = CompositeNode::new((example(), DynamicPowerNode::new(vec![LeafNode::new(0); 4])));

    let copy = transform_tree(&tree, &counting);
    assert_eq!(counting.0.get(), 6 + 5 + 1);
    assert_eq!(copy, tree);
}

#[test]
fn test_size_tree() {
    let tree = CompositeNode::new((
        StaticPowerNode::<LeafNode, 3>::default(),
        DynamicPowerNode::with_degree(2, LeafNode::<()>::default()),
        DynamicUniformPowerNode::new(5, LeafNode::<()>::default()),
    ));
    let sizes = make_size_tree(&tree);

    assert_eq!(sizes.size(), 3);
    assert_eq!(sizes.descend(&tree_path![idx::<0>()]).size(), 3);
    assert_eq!(sizes.descend(&tree_path![idx::<1>()]).size(), 2);
    assert_eq!(sizes.descend(&tree_path![idx::<2>()]).size(), 5);
    assert_eq!(sizes.descend(&tree_path![idx::<1>(), 0usize]).size(), 0);

    assert_eq!(sizes.kind(), NodeKind::Composite);
    assert_eq!(<SizeNode<StaticPowerNode<SizeNode<LeafNode>, 3>> as TreeNode>::KIND, NodeKind::StaticPower);
    assert_eq!(count_nodes(&sizes), count_nodes(&tree));
    assert_eq!(count_leaves(&sizes), 3 + 2 + 5);
}

#[test]
fn test_size_tree_keeps_static_counts() {
    let sizes = make_size_tree(&example());
    assert_eq!(static_node_count(&sizes), 6);
    assert_eq!(sizes.node().children().1.size(), 0);
}

#[test]
fn test_data_tree_defaults_and_updates() {
    let mut data = make_data_tree::<Vec<&str>, _>(&example());

    assert!(data.data().is_empty());
    data.data_at_mut(&tree_path![idx::<0>(), 1usize]).push("visited");
    data.data_mut().push("root");

    assert_eq!(data.data_at(&tree_path![idx::<0>(), 1usize]), &vec!["visited"]);
    assert!(data.data_at(&tree_path![idx::<0>(), 0usize]).is_empty());
    assert_eq!(data.data_at(&tree_path![]), &vec!["root"]);

    let leaf = data.descend(&tree_path![idx::<1>()]);
    assert_eq!(*leaf.node().value(), 4);
}

#[test]
fn test_data_tree_from_view() {
    let tree = CompositeNode::new((
        StaticPowerNode::<LeafNode, 2>::default(),
        DynamicPowerNode::with_degree(4, LeafNode::<()>::default()),
    ));
    let degrees = make_data_tree_with(&tree, |node| node.degree() * 10);

    assert_eq!(*degrees.data(), 20);
    assert_eq!(*degrees.data_at(&tree_path![idx::<0>()]), 20);
    assert_eq!(*degrees.data_at(&tree_path![idx::<1>()]), 40);
    assert_eq!(*degrees.data_at(&tree_path![idx::<1>(), 3usize]), 0);

    let old = degrees.clone().set_data(1);
    assert_eq!(old, 20);
}

// ============================================================================
// Tree containers
// ============================================================================

type Shape = CompositeNode<(
    StaticPowerNode<LeafNode, 2>,
    DynamicPowerNode<LeafNode>,
    DynamicUniformPowerNode<LeafNode>,
)>;

fn shape() -> Shape {
    CompositeNode::new((
        StaticPowerNode::default(),
        DynamicPowerNode::with_degree(3, LeafNode::default()),
        DynamicUniformPowerNode::new(2, LeafNode::default()),
    ))
}

#[test]
fn test_uniform_container_shape() {
    let container = make_uniform_tree_container::<i32, _>(&shape());

    assert_type_eq_all!(
        <Shape as TransformTree<ContainerMapping<DefaultValue<i32>>>>::Output,
        CompositeNode<(
            StaticPowerNode<ValueLeaf<i32>, 2>,
            DynamicPowerNode<ValueLeaf<i32>>,
            DynamicUniformPowerNode<ValueLeaf<i32>>,
        )>
    );
    assert_eq!(count_leaves(container.root()), 7);
    assert_eq!(container.value_at::<i32>(&TreePath::from([1, 2])), Ok(&0));
}

#[test]
fn test_container_typed_access() {
    let mut container = make_uniform_tree_container::<i32, _>(&shape());

    *container.get_mut(&tree_path![idx::<0>(), idx::<1>()]) = 5;
    *container.get_mut(&tree_path![idx::<1>(), 2usize]) = 7;

    assert_eq!(*container.get(&tree_path![idx::<0>(), 1usize]), 5);
    assert_eq!(*container.get(&tree_path![idx::<1>(), 2usize]), 7);
    assert_eq!(*container.get(&tree_path![idx::<0>(), 0usize]), 0);
}

#[test]
fn test_container_runtime_access() {
    let mut container = make_uniform_tree_container::<i32, _>(&shape());

    *container.value_at_mut::<i32>(&TreePath::from([1, 0])).unwrap() = 3;
    assert_eq!(container.value_at::<i32>(&TreePath::from([1, 0])), Ok(&3));
    assert_eq!(*container.get(&tree_path![idx::<1>(), 0usize]), 3);

    // Both positions of a uniform node share one value.
    *container.value_at_mut::<i32>(&TreePath::from([2, 0])).unwrap() = 9;
    assert_eq!(container.value_at::<i32>(&TreePath::from([2, 1])), Ok(&9));
}

#[test]
fn test_container_lookup_errors() {
    init_test_logging();
    let container = make_uniform_tree_container::<i32, _>(&shape());
    let lookup = |path: &[usize]| container.value_at::<i32>(&TreePath::from(path)).copied();

    assert_eq!(
        lookup(&[0, 2]),
        Err(PathError::IndexOutOfRange {
            index: 2,
            degree: 2,
            depth: 1
        })
    );
    assert_eq!(
        lookup(&[3]),
        Err(PathError::IndexOutOfRange {
            index: 3,
            degree: 3,
            depth: 0
        })
    );
    assert_eq!(lookup(&[0]), Err(PathError::NotALeaf { depth: 1 }));
    assert_eq!(lookup(&[]), Err(PathError::NotALeaf { depth: 0 }));
    assert_eq!(lookup(&[0, 1, 0]), Err(PathError::PastLeaf { depth: 2 }));
    assert_eq!(
        lookup(&[2, 2]),
        Err(PathError::IndexOutOfRange {
            index: 2,
            degree: 2,
            depth: 1
        })
    );
}

#[test]
fn test_container_resize_dynamic_node() {
    let mut container = make_uniform_tree_container::<i32, _>(&shape());

    container
        .node_mut(&tree_path![idx::<1>()])
        .resize(5, ValueLeaf::new(-1));
    assert_eq!(container.node(&tree_path![idx::<1>()]).degree(), 5);
    assert_eq!(container.value_at::<i32>(&TreePath::from([1, 4])), Ok(&-1));
    assert_eq!(container.value_at::<i32>(&TreePath::from([1, 0])), Ok(&0));

    container.node_mut(&tree_path![idx::<2>()]).set_degree(0);
    assert_eq!(count_leaves(container.root()), 2 + 5);
}

/// Stores each leaf's payload.
struct Payload;

impl<T: Clone> LeafToValue<LeafNode<T>> for Payload {
    type Value = T;

    fn leaf_value(&self, leaf: &LeafNode<T>) -> T {
        leaf.value().clone()
    }
}

#[test]
fn test_container_from_leaf_payloads() {
    let container = make_tree_container(&example(), Payload);

    assert_eq!(*container.get(&tree_path![idx::<0>(), 2usize]), 3);
    assert_eq!(*container.get(&tree_path![idx::<1>()]), 4);

    let values: Vec<i32> = [[0usize, 0], [0, 1], [0, 2]]
        .into_iter()
        .map(|path| *container.value_at::<i32>(&TreePath::from(path)).unwrap())
        .collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_container_from_closure() {
    let container = make_tree_container(&shape(), |leaf: &dyn NodeView| leaf.degree() + 1);
    assert_eq!(*container.get(&tree_path![idx::<2>(), 1usize]), 1);
    assert_eq!(container.into_root().children().1.degree(), 3);
}
