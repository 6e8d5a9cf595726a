//! The hybrid traversal engine.
//!
//! Dispatch happens on the node tag:
//!
//! | Tag                            | Children iterated                    |
//! |--------------------------------|--------------------------------------|
//! | leaf                           | none, `leaf` hook only               |
//! | composite                      | unrolled                             |
//! | static power / static uniform  | by the visitor's [`TreeVisitor::Traversal`], runtime loop past degree 32 |
//! | dynamic power / dynamic uniform| runtime loop                         |
//!
//! The mode is chosen again at every node, so static and dynamic subtrees
//! nest freely.

use tracing::trace;

use crate::node::{
    ChildAt, CompositeNodeTag, DynamicChildren, DynamicPowerNodeTag, DynamicUniformPowerNodeTag,
    LeafNodeTag, NodeView, PowerNodeTag, StaticDegree, TraversalSupport, TreeNode,
    UniformPowerNodeTag,
};
use crate::path::{Branch, HybridPath, Root};
use crate::typelevel::{False, Nat, S, True, Z};

use super::visitor::{
    AfterChild, BeforeChild, ChildFilter, DynamicTraversal, Homogeneous, HybridVisitor,
    StaticTraversal, TreeVisitor, VisitIn, VisitLeaf, VisitPost, VisitPre,
};

type TagOf<N> = <N as TreeNode>::Tag;
type ChildOf<N, I> = <N as ChildAt<I>>::Child;
type DynChildOf<N> = <N as DynamicChildren>::Child;
type PreOut<V, N, P, A> = <V as VisitPre<N, P, A>>::Output;
type BeforeOut<V, N, C, P, I, A> = <V as BeforeChild<N, C, P, I, A>>::Output;
type InfixOut<V, N, P, I, A> = <I as Infix<V, N, P, A>>::Output;
type FilterOf<V, N, C, P> = <V as ChildFilter<N, C, P>>::Visit;
type DescentOut<V, N, C, P, I, A> =
    <FilterOf<V, N, C, P> as VisitChildIf<C, V, Branch<P, I>, A>>::Output;
type Unrolled<N, V, P, A> = <N as UnrollChildren<V, P, A, Z, <N as StaticDegree>::Degree>>::Output;
type StaticChildOut<N, V, P, A, I> = <N as ApplyStaticChild<V, P, A, I>>::Output;
type ModeOf<N, V> =
    <<N as TraversalSupport>::Unrollable as SelectMode<<V as TreeVisitor>::Traversal>>::Mode;

/// Traverses `tree` with a heterogeneous visitor, returning the final
/// accumulator.
pub fn hybrid_apply_to_tree<T, V, A>(
    tree: &T,
    visitor: &mut V,
    init: A,
) -> <T as ApplyToTree<V, Root, A>>::Output
where
    T: ApplyToTree<V, Root, A>,
{
    <T as ApplyToTree<V, Root, A>>::apply_to_tree(tree, &Root, visitor, init)
}

/// Traverses `tree` with a [`HybridVisitor`], threading one accumulator
/// type through every hook.
pub fn apply_to_tree<'v, T, V, A>(tree: &T, visitor: &'v mut V, init: A) -> A
where
    V: HybridVisitor<A>,
    T: ApplyToTree<Homogeneous<&'v mut V>, Root, A, Output = A>,
{
    let mut adapter = Homogeneous::new(visitor);
    <T as ApplyToTree<Homogeneous<&'v mut V>, Root, A>>::apply_to_tree(
        tree,
        &Root,
        &mut adapter,
        init,
    )
}

/// Traversal of the subtree rooted at the implementing node, found at `P`.
pub trait ApplyToTree<V, P, A>: TreeNode {
    type Output;

    fn apply_to_tree(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A> ApplyToTree<V, P, A> for N
where
    N: TreeNode + ApplyByTag<TagOf<N>, V, P, A>,
{
    type Output = <N as ApplyByTag<TagOf<N>, V, P, A>>::Output;

    fn apply_to_tree(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        <N as ApplyByTag<TagOf<N>, V, P, A>>::apply_by_tag(self, path, visitor, acc)
    }
}

/// Per-kind traversal, selected by the node tag.
pub trait ApplyByTag<Tag, V, P, A> {
    type Output;

    fn apply_by_tag(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A> ApplyByTag<LeafNodeTag, V, P, A> for N
where
    N: TreeNode,
    P: HybridPath,
    V: VisitLeaf<N, P, A>,
{
    type Output = <V as VisitLeaf<N, P, A>>::Output;

    fn apply_by_tag(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        let kind = const { <N as TreeNode>::KIND };
        trace!(?kind, depth = P::DEPTH, "visit leaf");
        <V as VisitLeaf<N, P, A>>::leaf(visitor, self, path, acc)
    }
}

macro_rules! apply_by_tag_via {
    ($tag:ty => $engine:ident :: $method:ident) => {
        impl<N, V, P, A> ApplyByTag<$tag, V, P, A> for N
        where
            N: $engine<V, P, A>,
        {
            type Output = <N as $engine<V, P, A>>::Output;

            fn apply_by_tag(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
                <N as $engine<V, P, A>>::$method(self, path, visitor, acc)
            }
        }
    };
}

apply_by_tag_via!(CompositeNodeTag => ApplyStatic::apply_static);
apply_by_tag_via!(PowerNodeTag => ApplyPreferred::apply_preferred);
apply_by_tag_via!(UniformPowerNodeTag => ApplyPreferred::apply_preferred);
apply_by_tag_via!(DynamicPowerNodeTag => ApplyDynamic::apply_dynamic);
apply_by_tag_via!(DynamicUniformPowerNodeTag => ApplyDynamic::apply_dynamic);

// ============================================================================
// Mode selection
// ============================================================================

/// Traversal of a static power node: in the visitor's mode when the node
/// can be unrolled, by a runtime loop otherwise.
pub trait ApplyPreferred<V, P, A> {
    type Output;

    fn apply_preferred(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A> ApplyPreferred<V, P, A> for N
where
    V: TreeVisitor,
    N: TraversalSupport,
    <N as TraversalSupport>::Unrollable: SelectMode<<V as TreeVisitor>::Traversal>,
    N: ApplyWithMode<ModeOf<N, V>, V, P, A>,
{
    type Output = <N as ApplyWithMode<ModeOf<N, V>, V, P, A>>::Output;

    fn apply_preferred(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        <N as ApplyWithMode<ModeOf<N, V>, V, P, A>>::apply_with_mode(self, path, visitor, acc)
    }
}

/// The mode actually used given the visitor's preference `Pref`.
pub trait SelectMode<Pref> {
    type Mode;
}

impl<Pref> SelectMode<Pref> for True {
    type Mode = Pref;
}

impl<Pref> SelectMode<Pref> for False {
    type Mode = DynamicTraversal;
}

pub trait ApplyWithMode<Mode, V, P, A> {
    type Output;

    fn apply_with_mode(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A> ApplyWithMode<StaticTraversal, V, P, A> for N
where
    N: ApplyStatic<V, P, A>,
{
    type Output = <N as ApplyStatic<V, P, A>>::Output;

    fn apply_with_mode(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        <N as ApplyStatic<V, P, A>>::apply_static(self, path, visitor, acc)
    }
}

impl<N, V, P, A> ApplyWithMode<DynamicTraversal, V, P, A> for N
where
    N: ApplyDynamic<V, P, A>,
{
    type Output = <N as ApplyDynamic<V, P, A>>::Output;

    fn apply_with_mode(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        <N as ApplyDynamic<V, P, A>>::apply_dynamic(self, path, visitor, acc)
    }
}

// ============================================================================
// Static unrolling
// ============================================================================

/// `pre`, every child unrolled left to right, then `post`.
pub trait ApplyStatic<V, P, A> {
    type Output;

    fn apply_static(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A> ApplyStatic<V, P, A> for N
where
    N: StaticDegree,
    P: HybridPath,
    V: VisitPre<N, P, A>,
    N: UnrollChildren<V, P, PreOut<V, N, P, A>, Z, <N as StaticDegree>::Degree>,
    V: VisitPost<N, P, Unrolled<N, V, P, PreOut<V, N, P, A>>>,
{
    type Output = <V as VisitPost<N, P, Unrolled<N, V, P, PreOut<V, N, P, A>>>>::Output;

    fn apply_static(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        let kind = const { <N as TreeNode>::KIND };
        trace!(?kind, depth = P::DEPTH, degree = <N::Degree as Nat>::VALUE, "unroll children");
        let acc = <V as VisitPre<N, P, A>>::pre(visitor, self, path, acc);
        let acc = <N as UnrollChildren<V, P, PreOut<V, N, P, A>, Z, N::Degree>>::unroll(
            self, path, visitor, acc,
        );
        <V as VisitPost<N, P, Unrolled<N, V, P, PreOut<V, N, P, A>>>>::post(visitor, self, path, acc)
    }
}

/// Left fold over children `I..I + Remaining`; each step may change the
/// accumulator type.
pub trait UnrollChildren<V, P, A, I, Remaining> {
    type Output;

    fn unroll(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A, I> UnrollChildren<V, P, A, I, Z> for N {
    type Output = A;

    fn unroll(&self, _path: &P, _visitor: &mut V, acc: A) -> A {
        acc
    }
}

impl<N, V, P, A, I, Rem> UnrollChildren<V, P, A, I, S<Rem>> for N
where
    N: ApplyStaticChild<V, P, A, I>,
    N: UnrollChildren<V, P, StaticChildOut<N, V, P, A, I>, S<I>, Rem>,
{
    type Output = <N as UnrollChildren<V, P, StaticChildOut<N, V, P, A, I>, S<I>, Rem>>::Output;

    fn unroll(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        let acc = <N as ApplyStaticChild<V, P, A, I>>::apply_static_child(self, path, visitor, acc);
        <N as UnrollChildren<V, P, StaticChildOut<N, V, P, A, I>, S<I>, Rem>>::unroll(
            self, path, visitor, acc,
        )
    }
}

/// The hook sequence around compile-time child `I`.
pub trait ApplyStaticChild<V, P, A, I> {
    type Output;

    fn apply_static_child(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A, I> ApplyStaticChild<V, P, A, I> for N
where
    I: Nat,
    P: HybridPath,
    N: ChildAt<I>,
    V: BeforeChild<N, ChildOf<N, I>, P, I, A>,
    I: Infix<V, N, P, BeforeOut<V, N, ChildOf<N, I>, P, I, A>>,
    V: ChildFilter<N, ChildOf<N, I>, P>,
    FilterOf<V, N, ChildOf<N, I>, P>: VisitChildIf<
            ChildOf<N, I>,
            V,
            Branch<P, I>,
            InfixOut<V, N, P, I, BeforeOut<V, N, ChildOf<N, I>, P, I, A>>,
        >,
    V: AfterChild<
            N,
            ChildOf<N, I>,
            P,
            I,
            DescentOut<
                V,
                N,
                ChildOf<N, I>,
                P,
                I,
                InfixOut<V, N, P, I, BeforeOut<V, N, ChildOf<N, I>, P, I, A>>,
            >,
        >,
{
    type Output = <V as AfterChild<
        N,
        ChildOf<N, I>,
        P,
        I,
        DescentOut<
            V,
            N,
            ChildOf<N, I>,
            P,
            I,
            InfixOut<V, N, P, I, BeforeOut<V, N, ChildOf<N, I>, P, I, A>>,
        >,
    >>::Output;

    fn apply_static_child(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        let index = I::default();
        let child = <N as ChildAt<I>>::child_at(self);
        let acc = <V as BeforeChild<N, ChildOf<N, I>, P, I, A>>::before_child(
            visitor, self, child, path, index, acc,
        );
        let acc = <I as Infix<V, N, P, _>>::infix(visitor, self, path, acc);
        let child_path = path.clone().push_back(index);
        let acc = <FilterOf<V, N, ChildOf<N, I>, P> as VisitChildIf<_, _, _, _>>::visit_child(
            child,
            &child_path,
            visitor,
            acc,
        );
        <V as AfterChild<N, ChildOf<N, I>, P, I, _>>::after_child(
            visitor, self, child, path, index, acc,
        )
    }
}

/// The between-children hook, skipped before the first child.
pub trait Infix<V, N, P, A> {
    type Output;

    fn infix(visitor: &mut V, node: &N, path: &P, acc: A) -> Self::Output;
}

impl<V, N, P, A> Infix<V, N, P, A> for Z {
    type Output = A;

    fn infix(_visitor: &mut V, _node: &N, _path: &P, acc: A) -> A {
        acc
    }
}

impl<V, N, P, A, M> Infix<V, N, P, A> for S<M>
where
    V: VisitIn<N, P, A>,
{
    type Output = <V as VisitIn<N, P, A>>::Output;

    fn infix(visitor: &mut V, node: &N, path: &P, acc: A) -> Self::Output {
        <V as VisitIn<N, P, A>>::infix(visitor, node, path, acc)
    }
}

/// Recurses into a child when the implementing flag is [`True`].
pub trait VisitChildIf<C, V, P, A> {
    type Output;

    fn visit_child(child: &C, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<C, V, P, A> VisitChildIf<C, V, P, A> for False {
    type Output = A;

    fn visit_child(_child: &C, _path: &P, _visitor: &mut V, acc: A) -> A {
        acc
    }
}

impl<C, V, P, A> VisitChildIf<C, V, P, A> for True
where
    C: ApplyToTree<V, P, A>,
{
    type Output = <C as ApplyToTree<V, P, A>>::Output;

    fn visit_child(child: &C, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        <C as ApplyToTree<V, P, A>>::apply_to_tree(child, path, visitor, acc)
    }
}

// ============================================================================
// Dynamic iteration
// ============================================================================

/// `pre`, a runtime loop over the children, then `post`.
pub trait ApplyDynamic<V, P, A> {
    type Output;

    fn apply_dynamic(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output;
}

impl<N, V, P, A> ApplyDynamic<V, P, A> for N
where
    N: DynamicChildren,
    P: HybridPath,
    V: VisitPre<N, P, A>,
    N: ApplyDynamicChild<V, P, PreOut<V, N, P, A>>,
    V: VisitPost<N, P, PreOut<V, N, P, A>>,
{
    type Output = <V as VisitPost<N, P, PreOut<V, N, P, A>>>::Output;

    fn apply_dynamic(&self, path: &P, visitor: &mut V, acc: A) -> Self::Output {
        let degree = NodeView::degree(self);
        let kind = const { <N as TreeNode>::KIND };
        trace!(?kind, depth = P::DEPTH, degree, "loop over children");
        let mut acc = <V as VisitPre<N, P, A>>::pre(visitor, self, path, acc);
        for index in 0..degree {
            acc = <N as ApplyDynamicChild<V, P, PreOut<V, N, P, A>>>::apply_dynamic_child(
                self, path, visitor, index, acc,
            );
        }
        <V as VisitPost<N, P, PreOut<V, N, P, A>>>::post(visitor, self, path, acc)
    }
}

/// The hook sequence around runtime child `index`.
///
/// Every hook must hand back the accumulator type it received.
pub trait ApplyDynamicChild<V, P, A> {
    fn apply_dynamic_child(&self, path: &P, visitor: &mut V, index: usize, acc: A) -> A;
}

impl<N, V, P, A> ApplyDynamicChild<V, P, A> for N
where
    N: DynamicChildren,
    P: HybridPath,
    V: BeforeChild<N, DynChildOf<N>, P, usize, A, Output = A>
        + VisitIn<N, P, A, Output = A>
        + ChildFilter<N, DynChildOf<N>, P>
        + AfterChild<N, DynChildOf<N>, P, usize, A, Output = A>,
    FilterOf<V, N, DynChildOf<N>, P>:
        VisitChildIf<DynChildOf<N>, V, Branch<P, usize>, A, Output = A>,
{
    fn apply_dynamic_child(&self, path: &P, visitor: &mut V, index: usize, acc: A) -> A {
        let child = <N as DynamicChildren>::child_dyn(self, index);
        let acc = <V as BeforeChild<N, DynChildOf<N>, P, usize, A>>::before_child(
            visitor, self, child, path, index, acc,
        );
        let acc = if index > 0 {
            <V as VisitIn<N, P, A>>::infix(visitor, self, path, acc)
        } else {
            acc
        };
        let child_path = path.clone().push_back(index);
        let acc = <FilterOf<V, N, DynChildOf<N>, P> as VisitChildIf<
            DynChildOf<N>,
            V,
            Branch<P, usize>,
            A,
        >>::visit_child(child, &child_path, visitor, acc);
        <V as AfterChild<N, DynChildOf<N>, P, usize, A>>::after_child(
            visitor, self, child, path, index, acc,
        )
    }
}
