//! Tree containers: a value per leaf, shaped like the tree.

use core::marker::PhantomData;

use tracing::debug;

use crate::error::PathError;
use crate::node::{InnerTag, Leaf, LeafNodeTag, NodeView, TreeNode};
use crate::nodes::{
    CompositeNode, DynamicPowerNode, DynamicUniformPowerNode, StaticPowerNode,
    StaticUniformPowerNode, for_each_composite_arity,
};
use crate::path::{Locate, TreePath};

use super::{NodeTransformation, TransformTree};

/// A leaf replaced by the value stored for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValueLeaf<V> {
    value: V,
}

impl<V> ValueLeaf<V> {
    pub const fn new(value: V) -> Self {
        Self { value }
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> Leaf for ValueLeaf<V> {}

/// Nodes holding a single value.
pub trait HasValue {
    type Value;

    fn value(&self) -> &Self::Value;

    fn value_mut(&mut self) -> &mut Self::Value;
}

impl<V> HasValue for ValueLeaf<V> {
    type Value = V;

    fn value(&self) -> &V {
        &self.value
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

/// Produces the container value for leaves of type `L`.
///
/// Closures over the structural view implement it for every leaf type.
/// Typed mappings implement it per leaf type:
///
/// ```
/// use typetree_core::prelude::*;
///
/// struct Payload;
///
/// impl<T: Clone> LeafToValue<LeafNode<T>> for Payload {
///     type Value = T;
///
///     fn leaf_value(&self, leaf: &LeafNode<T>) -> T {
///         leaf.value().clone()
///     }
/// }
///
/// let tree = StaticPowerNode::<LeafNode<i32>, 2>::new([LeafNode::new(3), LeafNode::new(4)]);
/// let container = make_tree_container(&tree, Payload);
/// assert_eq!(container.value_at::<i32>(&TreePath::from([1])), Ok(&4));
/// ```
pub trait LeafToValue<L> {
    type Value;

    fn leaf_value(&self, leaf: &L) -> Self::Value;
}

impl<F, L, V> LeafToValue<L> for F
where
    L: NodeView,
    F: Fn(&dyn NodeView) -> V,
{
    type Value = V;

    fn leaf_value(&self, leaf: &L) -> V {
        self(leaf as &dyn NodeView)
    }
}

/// Stores `V::default()` for every leaf.
pub struct DefaultValue<V>(PhantomData<fn() -> V>);

impl<V> DefaultValue<V> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<V> Default for DefaultValue<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L, V: Default> LeafToValue<L> for DefaultValue<V> {
    type Value = V;

    fn leaf_value(&self, _leaf: &L) -> V {
        V::default()
    }
}

/// Replaces leaves by [`ValueLeaf`]s and keeps inner nodes as rebuilt.
pub struct ContainerMapping<F>(pub F);

/// [`ContainerMapping`] dispatch on the source node's tag.
pub trait ContainerByTag<Tag, S, R> {
    type Output;

    fn map_by_tag(&self, source: &S, rebuilt: R) -> Self::Output;
}

impl<F, S, R> ContainerByTag<LeafNodeTag, S, R> for ContainerMapping<F>
where
    F: LeafToValue<S>,
{
    type Output = ValueLeaf<F::Value>;

    fn map_by_tag(&self, source: &S, _rebuilt: R) -> Self::Output {
        ValueLeaf::new(self.0.leaf_value(source))
    }
}

impl<Tag: InnerTag, F, S, R> ContainerByTag<Tag, S, R> for ContainerMapping<F> {
    type Output = R;

    fn map_by_tag(&self, _source: &S, rebuilt: R) -> R {
        rebuilt
    }
}

impl<F, S, R> NodeTransformation<S, R> for ContainerMapping<F>
where
    S: TreeNode,
    Self: ContainerByTag<<S as TreeNode>::Tag, S, R>,
{
    type Output = <Self as ContainerByTag<<S as TreeNode>::Tag, S, R>>::Output;

    fn map_node(&self, source: &S, rebuilt: R) -> Self::Output {
        <Self as ContainerByTag<<S as TreeNode>::Tag, S, R>>::map_by_tag(self, source, rebuilt)
    }
}

// ============================================================================
// Runtime lookup
// ============================================================================

/// Fallible lookup of a leaf value along a runtime path.
pub trait ValueLookup<V> {
    /// `depth` is the depth of the implementing node, used in errors.
    fn lookup(&self, path: &[usize], depth: usize) -> Result<&V, PathError>;

    fn lookup_mut(&mut self, path: &[usize], depth: usize) -> Result<&mut V, PathError>;
}

fn split_path(path: &[usize], degree: usize, depth: usize) -> Result<(usize, &[usize]), PathError> {
    match path.split_first() {
        None => Err(PathError::NotALeaf { depth }),
        Some((&index, rest)) if index < degree => Ok((index, rest)),
        Some((&index, _)) => Err(PathError::IndexOutOfRange {
            index,
            degree,
            depth,
        }),
    }
}

impl<V> ValueLookup<V> for ValueLeaf<V> {
    fn lookup(&self, path: &[usize], depth: usize) -> Result<&V, PathError> {
        if path.is_empty() {
            Ok(&self.value)
        } else {
            Err(PathError::PastLeaf { depth })
        }
    }

    fn lookup_mut(&mut self, path: &[usize], depth: usize) -> Result<&mut V, PathError> {
        if path.is_empty() {
            Ok(&mut self.value)
        } else {
            Err(PathError::PastLeaf { depth })
        }
    }
}

impl<C: ValueLookup<V>, V, const N: usize> ValueLookup<V> for StaticPowerNode<C, N> {
    fn lookup(&self, path: &[usize], depth: usize) -> Result<&V, PathError> {
        let (index, rest) = split_path(path, N, depth)?;
        self.children()[index].lookup(rest, depth + 1)
    }

    fn lookup_mut(&mut self, path: &[usize], depth: usize) -> Result<&mut V, PathError> {
        let (index, rest) = split_path(path, N, depth)?;
        self.children_mut()[index].lookup_mut(rest, depth + 1)
    }
}

impl<C: ValueLookup<V>, V> ValueLookup<V> for DynamicPowerNode<C> {
    fn lookup(&self, path: &[usize], depth: usize) -> Result<&V, PathError> {
        let (index, rest) = split_path(path, self.degree(), depth)?;
        self.children()[index].lookup(rest, depth + 1)
    }

    fn lookup_mut(&mut self, path: &[usize], depth: usize) -> Result<&mut V, PathError> {
        let (index, rest) = split_path(path, self.degree(), depth)?;
        self.children_mut()[index].lookup_mut(rest, depth + 1)
    }
}

impl<C: ValueLookup<V>, V, const N: usize> ValueLookup<V> for StaticUniformPowerNode<C, N> {
    fn lookup(&self, path: &[usize], depth: usize) -> Result<&V, PathError> {
        let (_, rest) = split_path(path, N, depth)?;
        self.shared_child().lookup(rest, depth + 1)
    }

    fn lookup_mut(&mut self, path: &[usize], depth: usize) -> Result<&mut V, PathError> {
        let (_, rest) = split_path(path, N, depth)?;
        self.shared_child_mut().lookup_mut(rest, depth + 1)
    }
}

impl<C: ValueLookup<V>, V> ValueLookup<V> for DynamicUniformPowerNode<C> {
    fn lookup(&self, path: &[usize], depth: usize) -> Result<&V, PathError> {
        let (_, rest) = split_path(path, self.degree(), depth)?;
        self.shared_child().lookup(rest, depth + 1)
    }

    fn lookup_mut(&mut self, path: &[usize], depth: usize) -> Result<&mut V, PathError> {
        let (_, rest) = split_path(path, self.degree(), depth)?;
        self.shared_child_mut().lookup_mut(rest, depth + 1)
    }
}

macro_rules! impl_composite_lookup {
    ($degree:ty, $len:literal; $($idx:tt : $T:ident @ $nat:ty),+) => {
        impl<$($T: ValueLookup<Value>,)+ Value> ValueLookup<Value> for CompositeNode<($($T,)+)> {
            fn lookup(&self, path: &[usize], depth: usize) -> Result<&Value, PathError> {
                let (index, rest) = split_path(path, $len, depth)?;
                let children = self.children();
                match index {
                    $($idx => children.$idx.lookup(rest, depth + 1),)+
                    _ => unreachable!("index checked against the degree"),
                }
            }

            fn lookup_mut(&mut self, path: &[usize], depth: usize) -> Result<&mut Value, PathError> {
                let (index, rest) = split_path(path, $len, depth)?;
                let children = self.children_mut();
                match index {
                    $($idx => children.$idx.lookup_mut(rest, depth + 1),)+
                    _ => unreachable!("index checked against the degree"),
                }
            }
        }
    };
}

for_each_composite_arity!(impl_composite_lookup);

// ============================================================================
// Containers
// ============================================================================

/// A tree of leaf values, shaped like the tree it was made from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TreeContainer<N> {
    root: N,
}

impl<N> TreeContainer<N> {
    pub fn new(root: N) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut N {
        &mut self.root
    }

    pub fn into_root(self) -> N {
        self.root
    }

    /// The value stored at the leaf `path` points to.
    pub fn get<P>(&self, path: &P) -> &<<P as Locate<N>>::Target as HasValue>::Value
    where
        P: Locate<N>,
        <P as Locate<N>>::Target: HasValue,
    {
        HasValue::value(path.locate(&self.root))
    }

    pub fn get_mut<P>(&mut self, path: &P) -> &mut <<P as Locate<N>>::Target as HasValue>::Value
    where
        P: Locate<N>,
        <P as Locate<N>>::Target: HasValue,
    {
        HasValue::value_mut(path.locate_mut(&mut self.root))
    }

    /// The node `path` points to.
    pub fn node<P: Locate<N>>(&self, path: &P) -> &<P as Locate<N>>::Target {
        path.locate(&self.root)
    }

    /// Mutable access to a node, e.g. to resize a dynamic power node.
    pub fn node_mut<P: Locate<N>>(&mut self, path: &P) -> &mut <P as Locate<N>>::Target {
        path.locate_mut(&mut self.root)
    }

    /// Runtime lookup; every leaf must hold the same value type.
    pub fn value_at<V>(&self, path: &TreePath) -> Result<&V, PathError>
    where
        N: ValueLookup<V>,
    {
        self.root
            .lookup(path.as_slice(), 0)
            .inspect_err(|err| debug!(%path, %err, "tree container lookup failed"))
    }

    pub fn value_at_mut<V>(&mut self, path: &TreePath) -> Result<&mut V, PathError>
    where
        N: ValueLookup<V>,
    {
        self.root
            .lookup_mut(path.as_slice(), 0)
            .inspect_err(|err| debug!(%path, %err, "tree container lookup failed"))
    }
}

/// A container with one value per leaf of `tree`, produced by `leaf_to_value`.
pub fn make_tree_container<T, F>(
    tree: &T,
    leaf_to_value: F,
) -> TreeContainer<<T as TransformTree<ContainerMapping<F>>>::Output>
where
    T: TransformTree<ContainerMapping<F>>,
{
    TreeContainer::new(tree.transformed(&ContainerMapping(leaf_to_value)))
}

/// A container holding `V::default()` at every leaf of `tree`.
pub fn make_uniform_tree_container<V, T>(
    tree: &T,
) -> TreeContainer<<T as TransformTree<ContainerMapping<DefaultValue<V>>>>::Output>
where
    T: TransformTree<ContainerMapping<DefaultValue<V>>>,
{
    make_tree_container(tree, DefaultValue::new())
}
