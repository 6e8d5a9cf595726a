//! Compile-time accumulation of a type.
//!
//! Same traversal as the value engine, with an extra reduction strategy:
//!
//! - [`FlattenedReduction`]: entering the first child of a node restarts the
//!   running type at the policy's start type, so each subtree is gathered
//!   independently and only combined where it meets its parent.
//! - [`BottomUpReduction`]: the running type flows across subtree
//!   boundaries; later subtrees see everything accumulated before them.
//!
//! ```
//! use static_assertions::assert_type_eq_all;
//! use typetree_core::prelude::*;
//! use typetree_core::typelevel::{NatAdd, U1, U4, U5, Z};
//!
//! /// Counts visited nodes as a Peano natural.
//! struct One;
//!
//! impl<N, P> TypeFunctor<N, P> for One {
//!     type DoVisit = True;
//!     type Visit = U1;
//! }
//!
//! struct Add;
//!
//! impl<A: NatAdd<B>, B> TypeReduction<A, B> for Add {
//!     type Output = <A as NatAdd<B>>::Output;
//! }
//!
//! type Tree = CompositeNode<(LeafNode, StaticPowerNode<LeafNode, 2>)>;
//!
//! assert_type_eq_all!(AccumulateType<Tree, TypePolicy<One, Add, Z, Add, BottomUpReduction>>, U5);
//! assert_type_eq_all!(AccumulateType<Tree, TypePolicy<One, Add, Z>>, U4);
//! ```

use core::marker::PhantomData;

use crate::node::{ChildAt, LeafNodeTag, StaticDegree, StaticInnerTag, TreeNode};
use crate::path::{Branch, Root};
use crate::typelevel::{Bool, False, Nat, S, True, Z};

/// Per-node contribution for node type `N` at path type `P`.
pub trait TypeFunctor<N, P> {
    type DoVisit: Bool;
    type Visit;
}

/// Combines the running type `A` with the contribution `B`.
pub trait TypeReduction<A, B> {
    type Output;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FlattenedReduction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BottomUpReduction;

/// The running type handed to the child at index `I`.
pub trait Propagate<Current, Start, I> {
    type Output;
}

impl<Current, Start> Propagate<Current, Start, Z> for FlattenedReduction {
    type Output = Start;
}

impl<Current, Start, N> Propagate<Current, Start, S<N>> for FlattenedReduction {
    type Output = Current;
}

impl<Current, Start, I> Propagate<Current, Start, I> for BottomUpReduction {
    type Output = Current;
}

/// Everything the type engine needs besides the tree.
pub trait TypeAccumulationPolicy {
    type Functor;
    type SiblingReduction;
    type ParentChildReduction;
    type StartType;
    type ReductionStrategy;
}

/// Assembles a [`TypeAccumulationPolicy`] from its parts.
pub struct TypePolicy<F, R, Start, PCR = R, Strategy = FlattenedReduction>(
    PhantomData<(F, R, Start, PCR, Strategy)>,
);

impl<F, R, Start, PCR, Strategy> TypeAccumulationPolicy for TypePolicy<F, R, Start, PCR, Strategy> {
    type Functor = F;
    type SiblingReduction = R;
    type ParentChildReduction = PCR;
    type StartType = Start;
    type ReductionStrategy = Strategy;
}

/// Reduces with `R` when the implementing flag is [`True`], passes
/// `Current` through otherwise.
pub trait SelectReduce<R, Current, Visit> {
    type Output;
}

impl<R, Current, Visit> SelectReduce<R, Current, Visit> for False {
    type Output = Current;
}

impl<R, Current, Visit> SelectReduce<R, Current, Visit> for True
where
    R: TypeReduction<Current, Visit>,
{
    type Output = <R as TypeReduction<Current, Visit>>::Output;
}

type FunctorOf<Pol> = <Pol as TypeAccumulationPolicy>::Functor;
type DoVisitOf<Pol, N, P> = <FunctorOf<Pol> as TypeFunctor<N, P>>::DoVisit;
type VisitOf<Pol, N, P> = <FunctorOf<Pol> as TypeFunctor<N, P>>::Visit;
type ChildOf<N, I> = <N as ChildAt<I>>::Child;
type TagOf<N> = <N as TreeNode>::Tag;
type Propagated<Pol, Current, I> = <<Pol as TypeAccumulationPolicy>::ReductionStrategy as Propagate<
    Current,
    <Pol as TypeAccumulationPolicy>::StartType,
    I,
>>::Output;

/// Type accumulated over the subtree rooted at `N`, entered with `Current`.
pub trait AccumulateTypeByTag<Tag, Pol, Current, P> {
    type Output;

    /// Evaluates [`TreeNode::KIND`] for every node of the subtree.
    const CHECK: ();
}

impl<N, Pol, Current, P> AccumulateTypeByTag<LeafNodeTag, Pol, Current, P> for N
where
    N: TreeNode,
    Pol: TypeAccumulationPolicy,
    FunctorOf<Pol>: TypeFunctor<N, P>,
    DoVisitOf<Pol, N, P>:
        SelectReduce<<Pol as TypeAccumulationPolicy>::SiblingReduction, Current, VisitOf<Pol, N, P>>,
{
    type Output = <DoVisitOf<Pol, N, P> as SelectReduce<
        <Pol as TypeAccumulationPolicy>::SiblingReduction,
        Current,
        VisitOf<Pol, N, P>,
    >>::Output;

    const CHECK: () = {
        let _kind = <N as TreeNode>::KIND;
    };
}

impl<Tag, N, Pol, Current, P> AccumulateTypeByTag<Tag, Pol, Current, P> for N
where
    Tag: StaticInnerTag,
    Pol: TypeAccumulationPolicy,
    N: StaticDegree + AccumulateTypeChildren<Pol, Current, P, Z, <N as StaticDegree>::Degree>,
    FunctorOf<Pol>: TypeFunctor<N, P>,
    DoVisitOf<Pol, N, P>: SelectReduce<
            <Pol as TypeAccumulationPolicy>::ParentChildReduction,
            <N as AccumulateTypeChildren<Pol, Current, P, Z, <N as StaticDegree>::Degree>>::Output,
            VisitOf<Pol, N, P>,
        >,
{
    type Output = <DoVisitOf<Pol, N, P> as SelectReduce<
        <Pol as TypeAccumulationPolicy>::ParentChildReduction,
        <N as AccumulateTypeChildren<Pol, Current, P, Z, <N as StaticDegree>::Degree>>::Output,
        VisitOf<Pol, N, P>,
    >>::Output;

    const CHECK: () = {
        let _kind = <N as TreeNode>::KIND;
        let () = <N as AccumulateTypeChildren<Pol, Current, P, Z, <N as StaticDegree>::Degree>>::CHECK;
    };
}

/// Fold over children `I..I + Remaining` of the implementing node.
pub trait AccumulateTypeChildren<Pol, Current, P, I, Remaining> {
    type Output;

    const CHECK: ();
}

impl<N, Pol, Current, P, I> AccumulateTypeChildren<Pol, Current, P, I, Z> for N {
    type Output = Current;

    const CHECK: () = ();
}

impl<N, Pol, Current, P, I, Rem> AccumulateTypeChildren<Pol, Current, P, I, S<Rem>> for N
where
    Pol: TypeAccumulationPolicy,
    I: Nat,
    N: ChildAt<I>,
    <Pol as TypeAccumulationPolicy>::ReductionStrategy:
        Propagate<Current, <Pol as TypeAccumulationPolicy>::StartType, I>,
    ChildOf<N, I>: AccumulateTypeByTag<
            TagOf<ChildOf<N, I>>,
            Pol,
            Propagated<Pol, Current, I>,
            Branch<P, I>,
        >,
    N: AccumulateTypeChildren<
            Pol,
            <ChildOf<N, I> as AccumulateTypeByTag<
                TagOf<ChildOf<N, I>>,
                Pol,
                Propagated<Pol, Current, I>,
                Branch<P, I>,
            >>::Output,
            P,
            S<I>,
            Rem,
        >,
{
    type Output = <N as AccumulateTypeChildren<
        Pol,
        <ChildOf<N, I> as AccumulateTypeByTag<
            TagOf<ChildOf<N, I>>,
            Pol,
            Propagated<Pol, Current, I>,
            Branch<P, I>,
        >>::Output,
        P,
        S<I>,
        Rem,
    >>::Output;

    const CHECK: () = {
        let () = <ChildOf<N, I> as AccumulateTypeByTag<
            TagOf<ChildOf<N, I>>,
            Pol,
            Propagated<Pol, Current, I>,
            Branch<P, I>,
        >>::CHECK;
        let () = <N as AccumulateTypeChildren<
            Pol,
            <ChildOf<N, I> as AccumulateTypeByTag<
                TagOf<ChildOf<N, I>>,
                Pol,
                Propagated<Pol, Current, I>,
                Branch<P, I>,
            >>::Output,
            P,
            S<I>,
            Rem,
        >>::CHECK;
    };
}

/// The type accumulated over a whole tree under `Policy`.
///
/// Resolving a type involves no constant evaluation, so node flags are only
/// checked when [`AccumulatedType::CHECK`] is evaluated:
///
/// ```compile_fail
/// use typetree_core::prelude::*;
/// use typetree_core::typelevel::U1;
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
/// struct One;
///
/// impl<N, P> TypeFunctor<N, P> for One {
///     type DoVisit = True;
///     type Visit = U1;
/// }
///
/// struct Keep;
///
/// impl<A, B> TypeReduction<A, B> for Keep {
///     type Output = A;
/// }
///
/// type Tree = CompositeNode<(Broken, LeafNode)>;
/// let () = <Tree as AccumulatedType<TypePolicy<One, Keep, Z>>>::CHECK;
/// ```
pub trait AccumulatedType<Policy> {
    type Output;

    /// Evaluates [`TreeNode::KIND`] for every node of the tree.
    const CHECK: ();
}

impl<Tree, Policy> AccumulatedType<Policy> for Tree
where
    Tree: TreeNode
        + AccumulateTypeByTag<
            TagOf<Tree>,
            Policy,
            <Policy as TypeAccumulationPolicy>::StartType,
            Root,
        >,
    Policy: TypeAccumulationPolicy,
{
    type Output = <Tree as AccumulateTypeByTag<
        TagOf<Tree>,
        Policy,
        <Policy as TypeAccumulationPolicy>::StartType,
        Root,
    >>::Output;

    const CHECK: () = <Tree as AccumulateTypeByTag<
        TagOf<Tree>,
        Policy,
        <Policy as TypeAccumulationPolicy>::StartType,
        Root,
    >>::CHECK;
}

/// Shorthand for [`AccumulatedType::Output`].
///
/// Like [`AccumulateValue`](super::AccumulateValue), resolving this recurses
/// through every sibling chain, so the compiler's evaluation depth grows with
/// the total node count. Trees past roughly thirty nodes need a raised
/// `recursion_limit`.
pub type AccumulateType<Tree, Policy> = <Tree as AccumulatedType<Policy>>::Output;
