use pretty_assertions::assert_eq;
use static_assertions::{assert_type_eq_all, const_assert_eq};

use super::*;
use crate::node::{NodeKind, NodeProperties, TreeNode, checked_kind};
use crate::nodes::{CompositeNode, LeafNode, StaticPowerNode, StaticUniformPowerNode};
use crate::path::HybridPath;
use crate::typelevel::{NatAdd, True, U0, U1, U2, U3, U4, U5, Z};

type Example = CompositeNode<(StaticPowerNode<LeafNode, 3>, LeafNode)>;
type Deep = CompositeNode<(
    LeafNode<u8>,
    StaticPowerNode<CompositeNode<(LeafNode, StaticUniformPowerNode<LeafNode, 2>)>, 2>,
)>;

const_assert_eq!(StaticNodeCount::<Example>::RESULT, 6);
const_assert_eq!(StaticLeafCount::<Example>::RESULT, 4);
const_assert_eq!(StaticInnerNodeCount::<Example>::RESULT, 2);

#[test]
fn test_counts_on_single_leaf() {
    assert_eq!(StaticNodeCount::<LeafNode>::RESULT, 1);
    assert_eq!(StaticLeafCount::<LeafNode>::RESULT, 1);
    assert_eq!(StaticInnerNodeCount::<LeafNode>::RESULT, 0);
    assert_eq!(StaticDepth::<LeafNode>::RESULT, 1);
}

#[test]
fn test_counts_on_deep_tree() {
    // root, leaf, power, 2 x (composite, leaf, uniform, 2 leaves)
    assert_eq!(StaticNodeCount::<Deep>::RESULT, 13);
    assert_eq!(StaticLeafCount::<Deep>::RESULT, 7);
    assert_eq!(StaticInnerNodeCount::<Deep>::RESULT, 6);
    assert_eq!(StaticDepth::<Deep>::RESULT, 5);
}

#[test]
fn test_leaf_and_inner_partition_nodes() {
    assert_eq!(
        StaticLeafCount::<Deep>::RESULT + StaticInnerNodeCount::<Deep>::RESULT,
        StaticNodeCount::<Deep>::RESULT
    );
}

/// Multiplies the degrees of all inner nodes.
struct DegreeProduct;

impl StaticFunctor for DegreeProduct {
    type Result = u64;
}

impl<N: TreeNode, P> VisitNode<N, P> for DegreeProduct {
    const DO_VISIT: bool = !N::IS_LEAF;
    const VALUE: u64 = match N::STATIC_DEGREE {
        Some(degree) => degree as u64,
        None => 1,
    };
}

#[test]
fn test_custom_reduction_and_start() {
    // 2 (root) * 3 (power)
    assert_eq!(
        AccumulateValue::<Example, DegreeProduct, Multiply, ConstU64<1>>::RESULT,
        6
    );
    assert_eq!(
        AccumulateValue::<Example, DegreeProduct, Multiply, ConstU64<10>>::RESULT,
        60
    );
    // A lone leaf is not visited and yields the start value.
    assert_eq!(
        AccumulateValue::<LeafNode, DegreeProduct, Multiply, ConstU64<7>>::RESULT,
        7
    );
}

/// Sum of path depths of the visited nodes.
struct DepthSum;

impl StaticFunctor for DepthSum {
    type Result = usize;
}

impl<N: TreeNode, P: HybridPath> VisitNode<N, P> for DepthSum {
    const VALUE: usize = P::DEPTH;
}

#[test]
fn test_functor_sees_path() {
    // Power node at depth 1, its three leaves at 2, the last leaf at 1.
    assert_eq!(
        AccumulateValue::<Example, DepthSum, Plus, ConstUsize<0>>::RESULT,
        8
    );
}

/// Any leaf carrying a `u8` payload.
struct HasByteLeaf;

impl StaticFunctor for HasByteLeaf {
    type Result = bool;
}

impl<N: TreeNode, P> VisitNode<N, P> for HasByteLeaf {
    const VALUE: bool = N::IS_LEAF && core::mem::size_of::<N>() == 1;
}

#[test]
fn test_boolean_reductions() {
    assert!(AccumulateValue::<Deep, HasByteLeaf, Or, ConstBool<false>>::RESULT);
    assert!(!AccumulateValue::<Example, HasByteLeaf, Or, ConstBool<false>>::RESULT);
    assert!(!AccumulateValue::<Deep, HasByteLeaf, And, ConstBool<true>>::RESULT);
}

#[test]
fn test_min_and_max() {
    assert_eq!(AccumulateValue::<Deep, TreeDepth, Max, ConstUsize<0>>::RESULT, 5);
    assert_eq!(AccumulateValue::<Deep, TreeDepth, Min, ConstUsize<100>>::RESULT, 1);
}

#[test]
fn test_const_value_carrier() {
    fn carried<C: ConstValue<usize>>() -> usize {
        C::VALUE
    }

    assert_eq!(carried::<StaticNodeCount<Example>>(), 6);
    assert_eq!(carried::<ConstUsize<3>>(), 3);
}

/// Contributes 2 for every node.
struct Two;

impl StaticFunctor for Two {
    type Result = u64;
}

impl<N, P> VisitNode<N, P> for Two {
    const VALUE: u64 = 2;
}

#[test]
fn test_parent_child_reduction_differs_from_siblings() {
    // Power: 1 + 2 + 2 + 2 = 7, times 2 is 14. Leaf: 16. Root: 16 * 2.
    assert_eq!(AccumulateValue::<Example, Two, Plus, ConstU64<1>, Multiply>::RESULT, 32);
    assert_eq!(AccumulateValue::<Example, Two, Plus, ConstU64<1>>::RESULT, 13);
}

#[test]
fn test_engines_check_node_kinds() {
    assert_eq!(<Deep as TreeNode>::KIND, NodeKind::Composite);
    let () = <Deep as AccumulatedType<TypePolicy<One, Add, Z>>>::CHECK;
    assert_eq!(StaticNodeCount::<Deep>::RESULT, 13);
}

#[test]
#[should_panic(expected = "node properties do not resolve to a single node kind")]
fn test_kind_check_rejects_contradictory_flags() {
    let _ = checked_kind(NodeProperties::LEAF | NodeProperties::IS_UNIFORM, NodeKind::Leaf);
}

// ============================================================================
// Type accumulation
// ============================================================================

struct One;

impl<N, P> TypeFunctor<N, P> for One {
    type DoVisit = True;
    type Visit = U1;
}

struct Add;

impl<A: NatAdd<B>, B> TypeReduction<A, B> for Add {
    type Output = <A as NatAdd<B>>::Output;
}

/// Counts leaves only.
struct LeafOne;

impl<N: TreeNode, P> TypeFunctor<N, P> for LeafOne
where
    N::Tag: LeafFlag,
{
    type DoVisit = <N::Tag as LeafFlag>::Flag;
    type Visit = U1;
}

trait LeafFlag {
    type Flag: crate::typelevel::Bool;
}

impl LeafFlag for crate::node::LeafNodeTag {
    type Flag = True;
}

impl LeafFlag for crate::node::PowerNodeTag {
    type Flag = crate::typelevel::False;
}

impl LeafFlag for crate::node::CompositeNodeTag {
    type Flag = crate::typelevel::False;
}

type Small = CompositeNode<(LeafNode, StaticPowerNode<LeafNode, 2>)>;

#[test]
fn test_bottom_up_counts_every_node() {
    assert_type_eq_all!(AccumulateType<Small, TypePolicy<One, Add, Z, Add, BottomUpReduction>>, U5);
    assert_type_eq_all!(AccumulateType<LeafNode, TypePolicy<One, Add, Z, Add, BottomUpReduction>>, U1);
}

#[test]
fn test_flattened_restarts_first_child() {
    // The power node's first leaf starts over from Z, dropping the leaf before it.
    assert_type_eq_all!(AccumulateType<Small, TypePolicy<One, Add, Z>>, U4);
    assert_type_eq_all!(AccumulateType<Small, TypePolicy<One, Add, Z, Add, FlattenedReduction>>, U4);
}

#[test]
fn test_skipped_nodes_pass_through() {
    assert_type_eq_all!(
        AccumulateType<Small, TypePolicy<LeafOne, Add, Z, Add, BottomUpReduction>>,
        U3
    );
    assert_type_eq_all!(
        AccumulateType<StaticPowerNode<LeafNode, 2>, TypePolicy<LeafOne, Add, U2, Add, BottomUpReduction>>,
        U4
    );
    assert_type_eq_all!(AccumulateType<Example, TypePolicy<LeafOne, Add, U0, Add, BottomUpReduction>>, U4);
}

/// Pairs the children's result with the node's own contribution.
struct Nest;

impl<A, B> TypeReduction<A, B> for Nest {
    type Output = (A, B);
}

#[test]
fn test_type_parent_child_reduction_differs_from_siblings() {
    assert_type_eq_all!(
        AccumulateType<Small, TypePolicy<One, Add, Z, Nest, BottomUpReduction>>,
        ((U3, U1), U1)
    );
    assert_type_eq_all!(AccumulateType<Small, TypePolicy<One, Add, Z, Nest>>, ((U2, U1), U1));
}
