use core::mem;

use crate::node::{
    ChildAt, DynamicChildren, DynamicUniformPowerNodeTag, NodeKind, NodeProperties, NodeView,
    StaticDegree, TraversalSupport, TreeNode, UniformPowerNodeTag,
};
use crate::typelevel::{CanUnroll, Const, Nat, ToNat};

/// One child of type `C` standing for all `N` positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StaticUniformPowerNode<C, const N: usize> {
    child: C,
}

impl<C, const N: usize> StaticUniformPowerNode<C, N> {
    pub const DEGREE: usize = N;

    pub const fn new(child: C) -> Self {
        Self { child }
    }

    pub const fn degree(&self) -> usize {
        N
    }

    /// The repeated child. Every index resolves to it.
    pub fn shared_child(&self) -> &C {
        &self.child
    }

    pub fn shared_child_mut(&mut self) -> &mut C {
        &mut self.child
    }

    /// Moves `child` in and returns the previous one.
    pub fn set_child(&mut self, child: C) -> C {
        mem::replace(&mut self.child, child)
    }

    pub fn into_child(self) -> C {
        self.child
    }
}

impl<C: TreeNode, const N: usize> TreeNode for StaticUniformPowerNode<C, N> {
    const PROPERTIES: NodeProperties = NodeProperties::STATIC_UNIFORM_POWER;
    type Tag = UniformPowerNodeTag;
    const STATIC_DEGREE: Option<usize> = Some(N);
}

impl<C: TreeNode, const N: usize> NodeView for StaticUniformPowerNode<C, N> {
    fn kind(&self) -> NodeKind {
        NodeKind::StaticUniformPower
    }

    fn degree(&self) -> usize {
        N
    }

    fn child_view(&self, index: usize) -> Option<&dyn NodeView> {
        (index < N).then_some(&self.child as &dyn NodeView)
    }
}

impl<C: TreeNode, const N: usize> StaticDegree for StaticUniformPowerNode<C, N>
where
    Const<N>: ToNat,
{
    type Degree = <Const<N> as ToNat>::Output;
}

impl<C: TreeNode, const N: usize> TraversalSupport for StaticUniformPowerNode<C, N>
where
    Const<N>: CanUnroll,
{
    type Unrollable = <Const<N> as CanUnroll>::Output;
}

impl<C: TreeNode, const N: usize, I: Nat> ChildAt<I> for StaticUniformPowerNode<C, N> {
    type Child = C;

    fn child_at(&self) -> &C {
        const { assert!(I::VALUE < N, "child index out of range") };
        &self.child
    }

    fn child_at_mut(&mut self) -> &mut C {
        const { assert!(I::VALUE < N, "child index out of range") };
        &mut self.child
    }
}

impl<C: TreeNode, const N: usize> DynamicChildren for StaticUniformPowerNode<C, N> {
    type Child = C;

    fn child_dyn(&self, index: usize) -> &C {
        debug_assert!(index < N, "Index out of bounds");
        &self.child
    }

    fn child_dyn_mut(&mut self, index: usize) -> &mut C {
        debug_assert!(index < N, "Index out of bounds");
        &mut self.child
    }
}

// ============================================================================
// Dynamic uniform power node
// ============================================================================

/// One child of type `C` standing for a runtime number of positions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DynamicUniformPowerNode<C> {
    degree: usize,
    child: C,
}

impl<C> DynamicUniformPowerNode<C> {
    pub const fn new(degree: usize, child: C) -> Self {
        Self { degree, child }
    }

    pub const fn degree(&self) -> usize {
        self.degree
    }

    pub fn set_degree(&mut self, degree: usize) {
        self.degree = degree;
    }

    pub fn shared_child(&self) -> &C {
        &self.child
    }

    pub fn shared_child_mut(&mut self) -> &mut C {
        &mut self.child
    }

    /// Moves `child` in and returns the previous one.
    pub fn set_child(&mut self, child: C) -> C {
        mem::replace(&mut self.child, child)
    }

    pub fn into_child(self) -> C {
        self.child
    }
}

impl<C: TreeNode> TreeNode for DynamicUniformPowerNode<C> {
    const PROPERTIES: NodeProperties = NodeProperties::DYNAMIC_UNIFORM_POWER;
    type Tag = DynamicUniformPowerNodeTag;
    const STATIC_DEGREE: Option<usize> = None;
}

impl<C: TreeNode> NodeView for DynamicUniformPowerNode<C> {
    fn kind(&self) -> NodeKind {
        NodeKind::DynamicUniformPower
    }

    fn degree(&self) -> usize {
        self.degree
    }

    fn child_view(&self, index: usize) -> Option<&dyn NodeView> {
        (index < self.degree).then_some(&self.child as &dyn NodeView)
    }
}

impl<C: TreeNode> DynamicChildren for DynamicUniformPowerNode<C> {
    type Child = C;

    fn child_dyn(&self, index: usize) -> &C {
        debug_assert!(index < self.degree, "Index out of bounds");
        &self.child
    }

    fn child_dyn_mut(&mut self, index: usize) -> &mut C {
        debug_assert!(index < self.degree, "Index out of bounds");
        &mut self.child
    }
}
