use core::marker::PhantomData;

use crate::node::{ChildAt, LeafNodeTag, StaticDegree, StaticInnerTag, TreeNode};
use crate::path::{Branch, Root};
use crate::typelevel::{Nat, S, Z};

use super::reduction::{ConstValue, StaticReduction};

/// Declares the result type of a value functor.
pub trait StaticFunctor {
    type Result;
}

/// Per-node contribution of a functor for node type `N` at path type `P`.
///
/// ```
/// use typetree_core::prelude::*;
///
/// /// Sums the static degrees of all inner nodes.
/// struct DegreeSum;
///
/// impl StaticFunctor for DegreeSum {
///     type Result = usize;
/// }
///
/// impl<N: TreeNode, P> VisitNode<N, P> for DegreeSum {
///     const DO_VISIT: bool = !N::IS_LEAF;
///     const VALUE: usize = match N::STATIC_DEGREE {
///         Some(degree) => degree,
///         None => 0,
///     };
/// }
///
/// type Tree = CompositeNode<(StaticPowerNode<LeafNode, 3>, LeafNode)>;
/// assert_eq!(AccumulateValue::<Tree, DegreeSum, Plus, ConstUsize<0>>::RESULT, 5);
/// ```
pub trait VisitNode<N, P>: StaticFunctor {
    const DO_VISIT: bool = true;
    const VALUE: Self::Result;
}

type Res<F> = <F as StaticFunctor>::Result;
type ChildOf<N, I> = <N as ChildAt<I>>::Child;
type TagOf<N> = <N as TreeNode>::Tag;

/// The contribution of node `N` at `P`, as a constant carrier.
pub struct Visited<F, N, P>(PhantomData<(F, N, P)>);

impl<F, N, P> ConstValue<Res<F>> for Visited<F, N, P>
where
    F: VisitNode<N, P>,
{
    const VALUE: Res<F> = <F as VisitNode<N, P>>::VALUE;
}

/// Accumulation of the subtree rooted at `N`, entered with running value `Cur`.
pub trait AccumulateByTag<Tag, F: StaticFunctor, R, PCR, Cur, P> {
    const RESULT: Res<F>;
}

impl<N, F, R, PCR, Cur, P> AccumulateByTag<LeafNodeTag, F, R, PCR, Cur, P> for N
where
    N: TreeNode,
    F: VisitNode<N, P>,
    Cur: ConstValue<Res<F>>,
    R: StaticReduction<Res<F>, Cur, Visited<F, N, P>>,
{
    const RESULT: Res<F> = {
        let _kind = <N as TreeNode>::KIND;
        if <F as VisitNode<N, P>>::DO_VISIT {
            <R as StaticReduction<Res<F>, Cur, Visited<F, N, P>>>::RESULT
        } else {
            <Cur as ConstValue<Res<F>>>::VALUE
        }
    };
}

impl<Tag, N, F, R, PCR, Cur, P> AccumulateByTag<Tag, F, R, PCR, Cur, P> for N
where
    Tag: StaticInnerTag,
    N: StaticDegree + AccumulateChildren<F, R, PCR, Cur, P, Z, <N as StaticDegree>::Degree>,
    F: VisitNode<N, P>,
    PCR: StaticReduction<Res<F>, ChildrenValue<N, F, R, PCR, Cur, P>, Visited<F, N, P>>,
{
    const RESULT: Res<F> = {
        let _kind = <N as TreeNode>::KIND;
        if <F as VisitNode<N, P>>::DO_VISIT {
            <PCR as StaticReduction<Res<F>, ChildrenValue<N, F, R, PCR, Cur, P>, Visited<F, N, P>>>::RESULT
        } else {
            <N as AccumulateChildren<F, R, PCR, Cur, P, Z, <N as StaticDegree>::Degree>>::RESULT
        }
    };
}

/// Fold over children `I..I + Remaining` of the implementing node.
pub trait AccumulateChildren<F: StaticFunctor, R, PCR, Cur, P, I, Remaining> {
    const RESULT: Res<F>;
}

impl<N, F, R, PCR, Cur, P, I> AccumulateChildren<F, R, PCR, Cur, P, I, Z> for N
where
    F: StaticFunctor,
    Cur: ConstValue<Res<F>>,
{
    const RESULT: Res<F> = <Cur as ConstValue<Res<F>>>::VALUE;
}

impl<N, F, R, PCR, Cur, P, I, Rem> AccumulateChildren<F, R, PCR, Cur, P, I, S<Rem>> for N
where
    F: StaticFunctor,
    I: Nat,
    N: ChildAt<I>,
    ChildOf<N, I>: AccumulateByTag<TagOf<ChildOf<N, I>>, F, R, PCR, Cur, Branch<P, I>>,
    N: AccumulateChildren<
            F,
            R,
            PCR,
            SubtreeValue<ChildOf<N, I>, F, R, PCR, Cur, Branch<P, I>>,
            P,
            S<I>,
            Rem,
        >,
{
    const RESULT: Res<F> = <N as AccumulateChildren<
        F,
        R,
        PCR,
        SubtreeValue<ChildOf<N, I>, F, R, PCR, Cur, Branch<P, I>>,
        P,
        S<I>,
        Rem,
    >>::RESULT;
}

/// Result of the subtree rooted at `N`, as a constant carrier.
pub struct SubtreeValue<N, F, R, PCR, Cur, P>(PhantomData<(N, F, R, PCR, Cur, P)>);

impl<N, F, R, PCR, Cur, P> ConstValue<Res<F>> for SubtreeValue<N, F, R, PCR, Cur, P>
where
    N: TreeNode + AccumulateByTag<TagOf<N>, F, R, PCR, Cur, P>,
    F: StaticFunctor,
{
    const VALUE: Res<F> = <N as AccumulateByTag<TagOf<N>, F, R, PCR, Cur, P>>::RESULT;
}

/// Folded result of all children of `N`, as a constant carrier.
pub struct ChildrenValue<N, F, R, PCR, Cur, P>(PhantomData<(N, F, R, PCR, Cur, P)>);

impl<N, F, R, PCR, Cur, P> ConstValue<Res<F>> for ChildrenValue<N, F, R, PCR, Cur, P>
where
    F: StaticFunctor,
    N: StaticDegree + AccumulateChildren<F, R, PCR, Cur, P, Z, <N as StaticDegree>::Degree>,
{
    const VALUE: Res<F> =
        <N as AccumulateChildren<F, R, PCR, Cur, P, Z, <N as StaticDegree>::Degree>>::RESULT;
}

/// Compile-time fold of `Tree` with functor `F`.
///
/// `R` combines siblings, `PCR` combines an inner node's children result
/// with its own contribution, and `Start` carries the initial value.
///
/// Each node's result is seeded with everything folded before it, so the
/// depth of constant evaluation grows linearly with the total number of
/// nodes, not with the tree depth. The default `recursion_limit` of 128
/// covers trees of roughly thirty nodes. Crates evaluating the result for
/// larger trees raise it, e.g. `#![recursion_limit = "1024"]` for a few
/// hundred nodes. [`AccumulateType`](super::AccumulateType) scales the same
/// way.
///
/// Evaluating `RESULT` also evaluates [`TreeNode::KIND`] of every node, so
/// contradictory node flags fail the build:
///
/// ```compile_fail
/// use typetree_core::prelude::*;
///
/// struct Broken;
///
/// impl NodeView for Broken {
///     fn kind(&self) -> NodeKind {
///         NodeKind::Leaf
///     }
///
///     fn degree(&self) -> usize {
///         0
///     }
///
///     fn child_view(&self, _index: usize) -> Option<&dyn NodeView> {
///         None
///     }
/// }
///
/// impl TreeNode for Broken {
///     const PROPERTIES: NodeProperties = NodeProperties::LEAF.union(NodeProperties::IS_UNIFORM);
///     type Tag = LeafNodeTag;
///     const STATIC_DEGREE: Option<usize> = Some(0);
/// }
///
/// type Tree = CompositeNode<(Broken, LeafNode)>;
/// assert_eq!(StaticNodeCount::<Tree>::RESULT, 3);
/// ```
pub struct AccumulateValue<Tree, F, R, Start, PCR = R>(PhantomData<(Tree, F, R, Start, PCR)>);

impl<Tree, F, R, Start, PCR> AccumulateValue<Tree, F, R, Start, PCR>
where
    Tree: TreeNode + AccumulateByTag<TagOf<Tree>, F, R, PCR, Start, Root>,
    F: StaticFunctor,
{
    pub const RESULT: Res<F> = <Tree as AccumulateByTag<TagOf<Tree>, F, R, PCR, Start, Root>>::RESULT;
}

impl<Tree, F, R, Start, PCR> ConstValue<Res<F>> for AccumulateValue<Tree, F, R, Start, PCR>
where
    Tree: TreeNode + AccumulateByTag<TagOf<Tree>, F, R, PCR, Start, Root>,
    F: StaticFunctor,
{
    const VALUE: Res<F> = <Tree as AccumulateByTag<TagOf<Tree>, F, R, PCR, Start, Root>>::RESULT;
}
