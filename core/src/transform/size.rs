use core::ops::Deref;

use crate::node::{NodeView, TreeNode};

use super::wrap::delegate_tree_node;
use super::{IgnoreSource, NodeMapping, TransformTree};

/// A node decorated with its size, the number of its children.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SizeNode<N> {
    node: N,
}

impl<N> SizeNode<N> {
    pub fn new(node: N) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn into_inner(self) -> N {
        self.node
    }
}

impl<N: NodeView> SizeNode<N> {
    pub fn size(&self) -> usize {
        self.node.degree()
    }
}

impl<N> Deref for SizeNode<N> {
    type Target = N;

    fn deref(&self) -> &N {
        &self.node
    }
}

delegate_tree_node!(SizeNode<N>);

/// Wraps every node in a [`SizeNode`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SizeMapping;

impl<R: TreeNode> NodeMapping<R> for SizeMapping {
    type Output = SizeNode<R>;

    fn map_node(&self, rebuilt: R) -> SizeNode<R> {
        SizeNode::new(rebuilt)
    }
}

/// A copy of `tree` where every node reports its [`SizeNode::size`].
pub fn make_size_tree<T>(tree: &T) -> <T as TransformTree<IgnoreSource<SizeMapping>>>::Output
where
    T: TransformTree<IgnoreSource<SizeMapping>>,
{
    tree.transformed(&IgnoreSource(SizeMapping))
}
