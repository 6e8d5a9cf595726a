//! Rebuilding a tree as an isomorphic tree of different node types.
//!
//! [`transformed_tree`] works bottom up. The children of a node are
//! transformed first and collected in a container of the same shape as the
//! source node (a static power node's children go into a
//! [`StaticPowerNode`](crate::nodes::StaticPowerNode), a composite's into a
//! [`CompositeNode`](crate::nodes::CompositeNode), and so on). The
//! transformation is then handed the source node and that rebuilt node and
//! produces the node for this position.
//!
//! Siblings are transformed left to right, but transformations should not
//! rely on the order: they receive `&self` and are expected to be pure.
//!
//! Size trees, data trees and tree containers are all thin transformations
//! on top of this.

mod container;
mod data;
mod rebuild;
mod size;
mod wrap;

use tracing::trace;

use crate::node::TreeNode;

pub use container::{
    ContainerByTag, ContainerMapping, DefaultValue, HasValue, LeafToValue, TreeContainer,
    ValueLeaf, ValueLookup, make_tree_container, make_uniform_tree_container,
};
pub use data::{DataFromFn, DataNode, DefaultData, HasData, make_data_tree, make_data_tree_with};
pub use rebuild::RebuildChildren;
pub use size::{SizeMapping, SizeNode, make_size_tree};

/// Maps a source node and its rebuilt counterpart to the target node.
pub trait NodeTransformation<S, R> {
    type Output;

    fn map_node(&self, source: &S, rebuilt: R) -> Self::Output;
}

/// Maps a rebuilt node to the target node, ignoring the source.
pub trait NodeMapping<R> {
    type Output;

    fn map_node(&self, rebuilt: R) -> Self::Output;
}

impl<R, M: NodeMapping<R> + ?Sized> NodeMapping<R> for &M {
    type Output = M::Output;

    fn map_node(&self, rebuilt: R) -> Self::Output {
        M::map_node(*self, rebuilt)
    }
}

/// Presents a [`NodeMapping`] as a [`NodeTransformation`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IgnoreSource<M>(pub M);

impl<S, R, M: NodeMapping<R>> NodeTransformation<S, R> for IgnoreSource<M> {
    type Output = M::Output;

    fn map_node(&self, _source: &S, rebuilt: R) -> Self::Output {
        <M as NodeMapping<R>>::map_node(&self.0, rebuilt)
    }
}

/// Keeps every rebuilt node as it is.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityTransformation;

impl<S, R> NodeTransformation<S, R> for IdentityTransformation {
    type Output = R;

    fn map_node(&self, _source: &S, rebuilt: R) -> R {
        rebuilt
    }
}

impl<R> NodeMapping<R> for IdentityTransformation {
    type Output = R;

    fn map_node(&self, rebuilt: R) -> R {
        rebuilt
    }
}

/// The implementing tree transformed by `M`.
pub trait TransformTree<M>: TreeNode {
    type Output;

    fn transformed(&self, transformation: &M) -> Self::Output;
}

impl<N, M> TransformTree<M> for N
where
    N: TreeNode + RebuildChildren<M>,
    M: NodeTransformation<N, <N as RebuildChildren<M>>::Rebuilt>,
{
    type Output = <M as NodeTransformation<N, <N as RebuildChildren<M>>::Rebuilt>>::Output;

    fn transformed(&self, transformation: &M) -> Self::Output {
        let rebuilt = <N as RebuildChildren<M>>::rebuild_children(self, transformation);
        let kind = const { <N as TreeNode>::KIND };
        trace!(?kind, "map node");
        <M as NodeTransformation<N, _>>::map_node(transformation, self, rebuilt)
    }
}

/// Transforms `tree` with a transformation that sees source and rebuilt nodes.
pub fn transformed_tree<T, M>(tree: &T, transformation: &M) -> <T as TransformTree<M>>::Output
where
    T: TransformTree<M>,
{
    tree.transformed(transformation)
}

/// Transforms `tree` with a mapping that only sees rebuilt nodes.
pub fn transform_tree<'m, T, M>(
    tree: &T,
    mapping: &'m M,
) -> <T as TransformTree<IgnoreSource<&'m M>>>::Output
where
    T: TransformTree<IgnoreSource<&'m M>>,
{
    tree.transformed(&IgnoreSource(mapping))
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;
