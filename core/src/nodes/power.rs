use core::array;
use core::mem;

use crate::node::{
    ChildAt, DynamicChildren, DynamicPowerNodeTag, NodeKind, NodeProperties, NodeView,
    PowerNodeTag, StaticDegree, TraversalSupport, TreeNode,
};
use crate::typelevel::{CanUnroll, Const, Nat, ToNat};
use crate::Vec;

/// `N` individually addressed children of type `C`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StaticPowerNode<C, const N: usize> {
    children: [C; N],
}

impl<C, const N: usize> StaticPowerNode<C, N> {
    pub const DEGREE: usize = N;

    pub const fn new(children: [C; N]) -> Self {
        Self { children }
    }

    /// Builds child `i` as `f(i)`.
    pub fn from_fn(f: impl FnMut(usize) -> C) -> Self {
        Self {
            children: array::from_fn(f),
        }
    }

    /// `N` copies of `child`.
    pub fn repeat(child: C) -> Self
    where
        C: Clone,
    {
        Self::from_fn(|_| child.clone())
    }

    pub const fn degree(&self) -> usize {
        N
    }

    pub fn children(&self) -> &[C; N] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [C; N] {
        &mut self.children
    }

    pub fn iter(&self) -> core::slice::Iter<'_, C> {
        self.children.iter()
    }

    /// Moves `child` into slot `index` and returns the previous occupant.
    pub fn set_child(&mut self, index: usize, child: C) -> C {
        debug_assert!(index < N, "Index out of bounds");
        mem::replace(&mut self.children[index], child)
    }

    pub fn into_children(self) -> [C; N] {
        self.children
    }
}

impl<C: Default, const N: usize> Default for StaticPowerNode<C, N> {
    fn default() -> Self {
        Self::from_fn(|_| C::default())
    }
}

impl<C: TreeNode, const N: usize> TreeNode for StaticPowerNode<C, N> {
    const PROPERTIES: NodeProperties = NodeProperties::STATIC_POWER;
    type Tag = PowerNodeTag;
    const STATIC_DEGREE: Option<usize> = Some(N);
}

impl<C: TreeNode, const N: usize> NodeView for StaticPowerNode<C, N> {
    fn kind(&self) -> NodeKind {
        NodeKind::StaticPower
    }

    fn degree(&self) -> usize {
        N
    }

    fn child_view(&self, index: usize) -> Option<&dyn NodeView> {
        self.children.get(index).map(|child| child as &dyn NodeView)
    }
}

impl<C: TreeNode, const N: usize> StaticDegree for StaticPowerNode<C, N>
where
    Const<N>: ToNat,
{
    type Degree = <Const<N> as ToNat>::Output;
}

impl<C: TreeNode, const N: usize> TraversalSupport for StaticPowerNode<C, N>
where
    Const<N>: CanUnroll,
{
    type Unrollable = <Const<N> as CanUnroll>::Output;
}

impl<C: TreeNode, const N: usize, I: Nat> ChildAt<I> for StaticPowerNode<C, N> {
    type Child = C;

    fn child_at(&self) -> &C {
        const { assert!(I::VALUE < N, "child index out of range") };
        &self.children[I::VALUE]
    }

    fn child_at_mut(&mut self) -> &mut C {
        const { assert!(I::VALUE < N, "child index out of range") };
        &mut self.children[I::VALUE]
    }
}

impl<C: TreeNode, const N: usize> DynamicChildren for StaticPowerNode<C, N> {
    type Child = C;

    fn child_dyn(&self, index: usize) -> &C {
        debug_assert!(index < N, "Index out of bounds");
        &self.children[index]
    }

    fn child_dyn_mut(&mut self, index: usize) -> &mut C {
        debug_assert!(index < N, "Index out of bounds");
        &mut self.children[index]
    }
}

// ============================================================================
// Dynamic power node
// ============================================================================

/// A runtime number of individually addressed children of type `C`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DynamicPowerNode<C> {
    children: Vec<C>,
}

impl<C> DynamicPowerNode<C> {
    pub fn new(children: Vec<C>) -> Self {
        Self { children }
    }

    /// `degree` copies of `child`.
    pub fn with_degree(degree: usize, child: C) -> Self
    where
        C: Clone,
    {
        Self {
            children: crate::vec![child; degree],
        }
    }

    pub fn degree(&self) -> usize {
        self.children.len()
    }

    pub fn children(&self) -> &[C] {
        &self.children
    }

    /// The children as a slice; the degree is changed with [`Self::resize`].
    pub fn children_mut(&mut self) -> &mut [C] {
        &mut self.children
    }

    pub fn iter(&self) -> core::slice::Iter<'_, C> {
        self.children.iter()
    }

    pub fn push(&mut self, child: C) {
        self.children.push(child);
    }

    /// Moves `child` into slot `index` and returns the previous occupant.
    pub fn set_child(&mut self, index: usize, child: C) -> C {
        debug_assert!(index < self.children.len(), "Index out of bounds");
        mem::replace(&mut self.children[index], child)
    }

    /// Grows with clones of `fill` or truncates to `degree` children.
    pub fn resize(&mut self, degree: usize, fill: C)
    where
        C: Clone,
    {
        self.children.resize(degree, fill);
    }

    pub fn into_children(self) -> Vec<C> {
        self.children
    }
}

impl<C> Default for DynamicPowerNode<C> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
        }
    }
}

impl<C> FromIterator<C> for DynamicPowerNode<C> {
    fn from_iter<T: IntoIterator<Item = C>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl<C: TreeNode> TreeNode for DynamicPowerNode<C> {
    const PROPERTIES: NodeProperties = NodeProperties::DYNAMIC_POWER;
    type Tag = DynamicPowerNodeTag;
    const STATIC_DEGREE: Option<usize> = None;
}

impl<C: TreeNode> NodeView for DynamicPowerNode<C> {
    fn kind(&self) -> NodeKind {
        NodeKind::DynamicPower
    }

    fn degree(&self) -> usize {
        self.children.len()
    }

    fn child_view(&self, index: usize) -> Option<&dyn NodeView> {
        self.children.get(index).map(|child| child as &dyn NodeView)
    }
}

impl<C: TreeNode> DynamicChildren for DynamicPowerNode<C> {
    type Child = C;

    fn child_dyn(&self, index: usize) -> &C {
        debug_assert!(index < self.children.len(), "Index out of bounds");
        &self.children[index]
    }

    fn child_dyn_mut(&mut self, index: usize) -> &mut C {
        debug_assert!(index < self.children.len(), "Index out of bounds");
        &mut self.children[index]
    }
}
