//! Visitor hooks of the hybrid traversal.
//!
//! Each hook is its own trait, generic over the node type, the path type and
//! the incoming accumulator type, with an associated `Output`. This is what
//! lets a statically unrolled traversal change the accumulator type from one
//! child to the next. Dynamic loops require each per-child hook to return
//! the type it was given.
//!
//! Most visitors do not need this. [`HybridVisitor`] is the homogeneous
//! form: one accumulator type, every hook defaulting to pass-through, and
//! the [`Homogeneous`] adapter turning it into the full hook set.

use crate::node::TreeNode;
use crate::path::{HybridPath, PathIndex};
use crate::typelevel::{Bool, True};

/// How a node that supports both modes has its children iterated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalMode {
    /// Unrolled at compile time, indices are [`Nat`](crate::typelevel::Nat)s.
    Static,
    /// A runtime loop, indices are `usize`.
    Dynamic,
}

/// Type-level [`TraversalMode`] chosen by a visitor.
pub trait TraversalPreference: 'static {
    const MODE: TraversalMode;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StaticTraversal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DynamicTraversal;

impl TraversalPreference for StaticTraversal {
    const MODE: TraversalMode = TraversalMode::Static;
}

impl TraversalPreference for DynamicTraversal {
    const MODE: TraversalMode = TraversalMode::Dynamic;
}

/// Base trait of every visitor: declares the traversal preference.
///
/// The preference only matters for nodes that support both modes (static
/// power and static uniform power nodes). Composites are always unrolled and
/// dynamically sized nodes always looped.
pub trait TreeVisitor {
    type Traversal: TraversalPreference;
}

impl<V: TreeVisitor + ?Sized> TreeVisitor for &mut V {
    type Traversal = V::Traversal;
}

// ============================================================================
// Hooks
// ============================================================================

/// Called when entering an inner node.
pub trait VisitPre<N, P, A>: TreeVisitor {
    type Output;

    fn pre(&mut self, node: &N, path: &P, acc: A) -> Self::Output;
}

/// Called between consecutive children of an inner node, never before the first.
pub trait VisitIn<N, P, A>: TreeVisitor {
    type Output;

    fn infix(&mut self, node: &N, path: &P, acc: A) -> Self::Output;
}

/// Called when leaving an inner node.
pub trait VisitPost<N, P, A>: TreeVisitor {
    type Output;

    fn post(&mut self, node: &N, path: &P, acc: A) -> Self::Output;
}

/// Called on each leaf.
pub trait VisitLeaf<N, P, A>: TreeVisitor {
    type Output;

    fn leaf(&mut self, node: &N, path: &P, acc: A) -> Self::Output;
}

/// Called before child `index` of `node`, whether or not it is entered.
pub trait BeforeChild<N, C, P, I, A>: TreeVisitor {
    type Output;

    fn before_child(&mut self, node: &N, child: &C, path: &P, index: I, acc: A) -> Self::Output;
}

/// Called after child `index` of `node`, whether or not it was entered.
pub trait AfterChild<N, C, P, I, A>: TreeVisitor {
    type Output;

    fn after_child(&mut self, node: &N, child: &C, path: &P, index: I, acc: A) -> Self::Output;
}

/// Whether children of type `C` under `N` at `P` are entered at all.
///
/// A skipped child leaves the accumulator unchanged.
pub trait ChildFilter<N, C, P>: TreeVisitor {
    type Visit: Bool;
}

// ============================================================================
// Homogeneous visitors
// ============================================================================

/// A visitor with a single accumulator type `A`.
///
/// Every hook defaults to returning the accumulator unchanged.
///
/// ```
/// use typetree_core::prelude::*;
///
/// struct CountLeaves;
///
/// impl TreeVisitor for CountLeaves {
///     type Traversal = DynamicTraversal;
/// }
///
/// impl HybridVisitor<usize> for CountLeaves {
///     fn leaf<N: TreeNode, P: HybridPath>(&mut self, _: &N, _: &P, acc: usize) -> usize {
///         acc + 1
///     }
/// }
///
/// let tree = CompositeNode::new((
///     DynamicPowerNode::new(vec![LeafNode::<()>::default(); 5]),
///     LeafNode::<()>::default(),
/// ));
/// assert_eq!(apply_to_tree(&tree, &mut CountLeaves, 0usize), 6);
/// ```
pub trait HybridVisitor<A>: TreeVisitor {
    fn pre<N: TreeNode, P: HybridPath>(&mut self, _node: &N, _path: &P, acc: A) -> A {
        acc
    }

    fn infix<N: TreeNode, P: HybridPath>(&mut self, _node: &N, _path: &P, acc: A) -> A {
        acc
    }

    fn post<N: TreeNode, P: HybridPath>(&mut self, _node: &N, _path: &P, acc: A) -> A {
        acc
    }

    fn leaf<N: TreeNode, P: HybridPath>(&mut self, _node: &N, _path: &P, acc: A) -> A {
        acc
    }

    fn before_child<N: TreeNode, C: TreeNode, P: HybridPath, I: PathIndex>(
        &mut self,
        _node: &N,
        _child: &C,
        _path: &P,
        _index: I,
        acc: A,
    ) -> A {
        acc
    }

    fn after_child<N: TreeNode, C: TreeNode, P: HybridPath, I: PathIndex>(
        &mut self,
        _node: &N,
        _child: &C,
        _path: &P,
        _index: I,
        acc: A,
    ) -> A {
        acc
    }
}

impl<V, A> HybridVisitor<A> for &mut V
where
    V: HybridVisitor<A>,
{
    fn pre<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, acc: A) -> A {
        V::pre(&mut **self, node, path, acc)
    }

    fn infix<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, acc: A) -> A {
        V::infix(&mut **self, node, path, acc)
    }

    fn post<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, acc: A) -> A {
        V::post(&mut **self, node, path, acc)
    }

    fn leaf<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, acc: A) -> A {
        V::leaf(&mut **self, node, path, acc)
    }

    fn before_child<N: TreeNode, C: TreeNode, P: HybridPath, I: PathIndex>(
        &mut self,
        node: &N,
        child: &C,
        path: &P,
        index: I,
        acc: A,
    ) -> A {
        V::before_child(&mut **self, node, child, path, index, acc)
    }

    fn after_child<N: TreeNode, C: TreeNode, P: HybridPath, I: PathIndex>(
        &mut self,
        node: &N,
        child: &C,
        path: &P,
        index: I,
        acc: A,
    ) -> A {
        V::after_child(&mut **self, node, child, path, index, acc)
    }
}

/// Presents a [`HybridVisitor`] through the individual hook traits.
pub struct Homogeneous<V> {
    visitor: V,
}

impl<V> Homogeneous<V> {
    pub fn new(visitor: V) -> Self {
        Self { visitor }
    }

    pub fn into_inner(self) -> V {
        self.visitor
    }
}

impl<V: TreeVisitor> TreeVisitor for Homogeneous<V> {
    type Traversal = V::Traversal;
}

impl<V, N, P, A> VisitPre<N, P, A> for Homogeneous<V>
where
    V: HybridVisitor<A>,
    N: TreeNode,
    P: HybridPath,
{
    type Output = A;

    fn pre(&mut self, node: &N, path: &P, acc: A) -> A {
        <V as HybridVisitor<A>>::pre(&mut self.visitor, node, path, acc)
    }
}

impl<V, N, P, A> VisitIn<N, P, A> for Homogeneous<V>
where
    V: HybridVisitor<A>,
    N: TreeNode,
    P: HybridPath,
{
    type Output = A;

    fn infix(&mut self, node: &N, path: &P, acc: A) -> A {
        <V as HybridVisitor<A>>::infix(&mut self.visitor, node, path, acc)
    }
}

impl<V, N, P, A> VisitPost<N, P, A> for Homogeneous<V>
where
    V: HybridVisitor<A>,
    N: TreeNode,
    P: HybridPath,
{
    type Output = A;

    fn post(&mut self, node: &N, path: &P, acc: A) -> A {
        <V as HybridVisitor<A>>::post(&mut self.visitor, node, path, acc)
    }
}

impl<V, N, P, A> VisitLeaf<N, P, A> for Homogeneous<V>
where
    V: HybridVisitor<A>,
    N: TreeNode,
    P: HybridPath,
{
    type Output = A;

    fn leaf(&mut self, node: &N, path: &P, acc: A) -> A {
        <V as HybridVisitor<A>>::leaf(&mut self.visitor, node, path, acc)
    }
}

impl<V, N, C, P, I, A> BeforeChild<N, C, P, I, A> for Homogeneous<V>
where
    V: HybridVisitor<A>,
    N: TreeNode,
    C: TreeNode,
    P: HybridPath,
    I: PathIndex,
{
    type Output = A;

    fn before_child(&mut self, node: &N, child: &C, path: &P, index: I, acc: A) -> A {
        <V as HybridVisitor<A>>::before_child(&mut self.visitor, node, child, path, index, acc)
    }
}

impl<V, N, C, P, I, A> AfterChild<N, C, P, I, A> for Homogeneous<V>
where
    V: HybridVisitor<A>,
    N: TreeNode,
    C: TreeNode,
    P: HybridPath,
    I: PathIndex,
{
    type Output = A;

    fn after_child(&mut self, node: &N, child: &C, path: &P, index: I, acc: A) -> A {
        <V as HybridVisitor<A>>::after_child(&mut self.visitor, node, child, path, index, acc)
    }
}

impl<V, N, C, P> ChildFilter<N, C, P> for Homogeneous<V>
where
    V: TreeVisitor,
{
    type Visit = True;
}
