use core::marker::PhantomData;

use crate::node::{NodeView, TreeNode};
use crate::path::Locate;

use super::wrap::delegate_tree_node;
use super::{IgnoreSource, NodeMapping, TransformTree};

/// A node decorated with a datum of type `D`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DataNode<N, D> {
    node: N,
    data: D,
}

impl<N, D> DataNode<N, D> {
    pub fn new(node: N, data: D) -> Self {
        Self { node, data }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    /// Replaces the datum, returning the old one.
    pub fn set_data(&mut self, data: D) -> D {
        core::mem::replace(&mut self.data, data)
    }

    pub fn into_parts(self) -> (N, D) {
        (self.node, self.data)
    }
}

impl<N: TreeNode, D> DataNode<N, D> {
    /// The datum of the node at `path`, relative to this one.
    pub fn data_at<P>(&self, path: &P) -> &<<P as Locate<Self>>::Target as HasData>::Data
    where
        P: Locate<Self>,
        <P as Locate<Self>>::Target: HasData,
    {
        HasData::data(path.locate(self))
    }

    pub fn data_at_mut<P>(
        &mut self,
        path: &P,
    ) -> &mut <<P as Locate<Self>>::Target as HasData>::Data
    where
        P: Locate<Self>,
        <P as Locate<Self>>::Target: HasData,
    {
        HasData::data_mut(path.locate_mut(self))
    }
}

delegate_tree_node!(DataNode<N, D>);

/// Nodes carrying a datum.
pub trait HasData {
    type Data;

    fn data(&self) -> &Self::Data;

    fn data_mut(&mut self) -> &mut Self::Data;
}

impl<N, D> HasData for DataNode<N, D> {
    type Data = D;

    fn data(&self) -> &D {
        &self.data
    }

    fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }
}

/// Attaches `D::default()` to every node.
pub struct DefaultData<D>(PhantomData<fn() -> D>);

impl<D> DefaultData<D> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D> Default for DefaultData<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TreeNode, D: Default> NodeMapping<R> for DefaultData<D> {
    type Output = DataNode<R, D>;

    fn map_node(&self, rebuilt: R) -> DataNode<R, D> {
        DataNode::new(rebuilt, D::default())
    }
}

/// Attaches the datum computed by `F` from the node's structural view.
///
/// The view passed to `F` is the rebuilt node, whose children are already
/// decorated.
pub struct DataFromFn<F>(pub F);

impl<R, F, D> NodeMapping<R> for DataFromFn<F>
where
    R: TreeNode,
    F: Fn(&dyn NodeView) -> D,
{
    type Output = DataNode<R, D>;

    fn map_node(&self, rebuilt: R) -> DataNode<R, D> {
        let data = (self.0)(&rebuilt as &dyn NodeView);
        DataNode::new(rebuilt, data)
    }
}

/// A copy of `tree` where every node carries `D::default()`.
///
/// ```
/// use typetree_core::prelude::*;
///
/// let tree = CompositeNode::new((LeafNode::<()>::default(), LeafNode::<()>::default()));
/// let mut data = make_data_tree::<u32, _>(&tree);
/// *data.data_at_mut(&tree_path![idx::<1>()]) = 5;
/// assert_eq!(*data.data_at(&tree_path![idx::<1>()]), 5);
/// assert_eq!(*data.data(), 0);
/// ```
pub fn make_data_tree<D, T>(tree: &T) -> <T as TransformTree<IgnoreSource<DefaultData<D>>>>::Output
where
    T: TransformTree<IgnoreSource<DefaultData<D>>>,
{
    tree.transformed(&IgnoreSource(DefaultData::new()))
}

/// A copy of `tree` where every node carries `f(node)`.
pub fn make_data_tree_with<T, F, D>(
    tree: &T,
    f: F,
) -> <T as TransformTree<IgnoreSource<DataFromFn<F>>>>::Output
where
    F: Fn(&dyn NodeView) -> D,
    T: TransformTree<IgnoreSource<DataFromFn<F>>>,
{
    tree.transformed(&IgnoreSource(DataFromFn(f)))
}
