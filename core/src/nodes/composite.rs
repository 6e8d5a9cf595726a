use crate::node::{
    ChildAt, CompositeNodeTag, NodeKind, NodeProperties, NodeView, StaticDegree, TreeNode,
};
use crate::typelevel::*;

/// Heterogeneous children stored as a tuple, e.g.
/// `CompositeNode<(LeafNode, StaticPowerNode<LeafNode, 3>)>`.
///
/// Children are reached with compile-time indices only; a missing impl of
/// [`ChildAt`] is how an out-of-range index shows up. Tuples of 1 to 12
/// children are supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompositeNode<T> {
    children: T,
}

impl<T> CompositeNode<T> {
    pub const fn new(children: T) -> Self {
        Self { children }
    }

    pub fn children(&self) -> &T {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut T {
        &mut self.children
    }

    pub fn into_children(self) -> T {
        self.children
    }
}

/// Invokes `$m!` once per supported composite arity with
/// `(degree nat, degree; index: type param @ index nat, ...)`.
macro_rules! for_each_composite_arity {
    ($m:ident) => {
        $m!(U1, 1; 0: A @ U0);
        $m!(U2, 2; 0: A @ U0, 1: B @ U1);
        $m!(U3, 3; 0: A @ U0, 1: B @ U1, 2: C @ U2);
        $m!(U4, 4; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3);
        $m!(U5, 5; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4);
        $m!(U6, 6; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4, 5: F @ U5);
        $m!(U7, 7; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4, 5: F @ U5,
            6: G @ U6);
        $m!(U8, 8; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4, 5: F @ U5,
            6: G @ U6, 7: H @ U7);
        $m!(U9, 9; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4, 5: F @ U5,
            6: G @ U6, 7: H @ U7, 8: J @ U8);
        $m!(U10, 10; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4, 5: F @ U5,
            6: G @ U6, 7: H @ U7, 8: J @ U8, 9: K @ U9);
        $m!(U11, 11; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4, 5: F @ U5,
            6: G @ U6, 7: H @ U7, 8: J @ U8, 9: K @ U9, 10: L @ U10);
        $m!(U12, 12; 0: A @ U0, 1: B @ U1, 2: C @ U2, 3: D @ U3, 4: E @ U4, 5: F @ U5,
            6: G @ U6, 7: H @ U7, 8: J @ U8, 9: K @ U9, 10: L @ U10, 11: M @ U11);
    };
}

pub(crate) use for_each_composite_arity;

macro_rules! impl_composite_child {
    ([$($T:ident),+], $idx:tt, $C:ident, $nat:ty) => {
        impl<$($T: TreeNode),+> ChildAt<$nat> for CompositeNode<($($T,)+)> {
            type Child = $C;

            fn child_at(&self) -> &$C {
                &self.children.$idx
            }

            fn child_at_mut(&mut self) -> &mut $C {
                &mut self.children.$idx
            }
        }
    };
}

macro_rules! impl_composite_children {
    ($all:tt; $($idx:tt : $C:ident @ $nat:ty),+) => {
        $(impl_composite_child!($all, $idx, $C, $nat);)+
    };
}

macro_rules! impl_composite_node {
    ($degree:ty, $len:literal; $($idx:tt : $T:ident @ $nat:ty),+) => {
        impl<$($T: TreeNode),+> TreeNode for CompositeNode<($($T,)+)> {
            const PROPERTIES: NodeProperties = NodeProperties::COMPOSITE;
            type Tag = CompositeNodeTag;
            const STATIC_DEGREE: Option<usize> = Some($len);
        }

        impl<$($T: TreeNode),+> NodeView for CompositeNode<($($T,)+)> {
            fn kind(&self) -> NodeKind {
                NodeKind::Composite
            }

            fn degree(&self) -> usize {
                $len
            }

            fn child_view(&self, index: usize) -> Option<&dyn NodeView> {
                match index {
                    $($idx => Some(&self.children.$idx as &dyn NodeView),)+
                    _ => None,
                }
            }
        }

        impl<$($T: TreeNode),+> StaticDegree for CompositeNode<($($T,)+)> {
            type Degree = $degree;
        }

        impl_composite_children!([$($T),+]; $($idx : $T @ $nat),+);
    };
}

for_each_composite_arity!(impl_composite_node);
