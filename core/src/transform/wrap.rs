//! Forwarding of the node traits through decorating wrappers.

/// Implements the node traits for `$wrapper<N, ..>` by forwarding to its
/// `node` field, so a decorated tree keeps the shape of the tree it wraps.
macro_rules! delegate_tree_node {
    ($wrapper:ident<N $(, $param:ident)*>) => {
        impl<N: $crate::node::TreeNode $(, $param)*> $crate::node::TreeNode
            for $wrapper<N $(, $param)*>
        {
            const PROPERTIES: $crate::node::NodeProperties = N::PROPERTIES;
            type Tag = N::Tag;
            const STATIC_DEGREE: Option<usize> = N::STATIC_DEGREE;
        }

        impl<N: $crate::node::TreeNode $(, $param)*> $crate::node::NodeView
            for $wrapper<N $(, $param)*>
        {
            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeView::kind(&self.node)
            }

            fn degree(&self) -> usize {
                $crate::node::NodeView::degree(&self.node)
            }

            fn child_view(&self, index: usize) -> Option<&dyn $crate::node::NodeView> {
                $crate::node::NodeView::child_view(&self.node, index)
            }
        }

        impl<N: $crate::node::StaticDegree $(, $param)*> $crate::node::StaticDegree
            for $wrapper<N $(, $param)*>
        {
            type Degree = N::Degree;
        }

        impl<N: $crate::node::TraversalSupport $(, $param)*> $crate::node::TraversalSupport
            for $wrapper<N $(, $param)*>
        {
            type Unrollable = N::Unrollable;
        }

        impl<N, I $(, $param)*> $crate::node::ChildAt<I> for $wrapper<N $(, $param)*>
        where
            N: $crate::node::ChildAt<I>,
            I: $crate::typelevel::Nat,
        {
            type Child = <N as $crate::node::ChildAt<I>>::Child;

            fn child_at(&self) -> &Self::Child {
                <N as $crate::node::ChildAt<I>>::child_at(&self.node)
            }

            fn child_at_mut(&mut self) -> &mut Self::Child {
                <N as $crate::node::ChildAt<I>>::child_at_mut(&mut self.node)
            }
        }

        impl<N: $crate::node::DynamicChildren $(, $param)*> $crate::node::DynamicChildren
            for $wrapper<N $(, $param)*>
        {
            type Child = <N as $crate::node::DynamicChildren>::Child;

            fn child_dyn(&self, index: usize) -> &Self::Child {
                <N as $crate::node::DynamicChildren>::child_dyn(&self.node, index)
            }

            fn child_dyn_mut(&mut self, index: usize) -> &mut Self::Child {
                <N as $crate::node::DynamicChildren>::child_dyn_mut(&mut self.node, index)
            }
        }
    };
}

pub(crate) use delegate_tree_node;
