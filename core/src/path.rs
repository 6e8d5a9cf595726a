//! Tree paths.
//!
//! A hybrid path is built from types: [`Root`] extended by [`Branch`] links,
//! each holding either a compile-time index (a [`Nat`] ZST) or a runtime
//! `usize`. Paths are immutable; [`HybridPath::push_back`] returns a new path.
//! A path of compile-time indices is zero-sized.
//!
//! [`TreePath`] is the flattened runtime form, used by callbacks and lookups.

use core::fmt;

use smallvec::SmallVec;
use static_assertions::assert_eq_size;

use crate::node::{Child, TreeNode};
use crate::typelevel::{Nat, S, Z};

/// A single path entry: a compile-time [`Nat`] or a runtime `usize`.
pub trait PathIndex: Copy + fmt::Debug + 'static {
    const IS_STATIC: bool;

    fn value(self) -> usize;
}

impl<N: Nat> PathIndex for N {
    const IS_STATIC: bool = true;

    fn value(self) -> usize {
        N::VALUE
    }
}

impl PathIndex for usize {
    const IS_STATIC: bool = false;

    fn value(self) -> usize {
        self
    }
}

/// A path from the root of a tree to one of its nodes.
pub trait HybridPath: Clone + fmt::Debug + 'static {
    /// Number of indices in the path.
    const DEPTH: usize;

    /// The last index, `None` for the root.
    fn back(&self) -> Option<usize>;

    /// Appends the indices of this path to `out`, root first.
    fn write_indices(&self, out: &mut TreePath);

    fn to_tree_path(&self) -> TreePath {
        let mut path = TreePath::new();
        self.write_indices(&mut path);
        path
    }

    fn push_back<I: PathIndex>(self, index: I) -> Branch<Self, I>
    where
        Self: Sized,
    {
        Branch {
            parent: self,
            index,
        }
    }
}

/// The empty path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Root;

/// `parent` extended by `index`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Branch<P, I> {
    parent: P,
    index: I,
}

impl<P, I> Branch<P, I> {
    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub fn index(&self) -> I
    where
        I: Copy,
    {
        self.index
    }
}

impl HybridPath for Root {
    const DEPTH: usize = 0;

    fn back(&self) -> Option<usize> {
        None
    }

    fn write_indices(&self, _out: &mut TreePath) {}
}

impl<P: HybridPath, I: PathIndex> HybridPath for Branch<P, I> {
    const DEPTH: usize = P::DEPTH + 1;

    fn back(&self) -> Option<usize> {
        Some(self.index.value())
    }

    fn write_indices(&self, out: &mut TreePath) {
        self.parent.write_indices(out);
        out.indices.push(self.index.value());
    }
}

assert_eq_size!(Branch<Branch<Root, Z>, S<Z>>, ());

/// Resolves a whole hybrid path against the implementing node.
///
/// `Target` is the node type at the end of the path, so deep access stays
/// fully typed:
///
/// ```
/// use typetree_core::prelude::*;
///
/// let tree = CompositeNode::new((
///     StaticPowerNode::<LeafNode<u8>, 2>::new([LeafNode::new(7), LeafNode::new(8)]),
///     LeafNode::new("last"),
/// ));
/// assert_eq!(*tree.descend(&tree_path![idx::<0>(), 1usize]).value(), 8);
/// assert_eq!(*tree.descend(&tree_path![idx::<1>()]).value(), "last");
/// ```
pub trait Descend<P>: TreeNode {
    type Target: TreeNode;

    fn descend(&self, path: &P) -> &Self::Target;

    fn descend_mut(&mut self, path: &P) -> &mut Self::Target;
}

impl<N: TreeNode> Descend<Root> for N {
    type Target = N;

    fn descend(&self, _path: &Root) -> &N {
        self
    }

    fn descend_mut(&mut self, _path: &Root) -> &mut N {
        self
    }
}

impl<N, P, I> Descend<Branch<P, I>> for N
where
    N: Descend<P>,
    <N as Descend<P>>::Target: Child<I>,
    P: 'static,
    I: Copy + 'static,
{
    type Target = <<N as Descend<P>>::Target as Child<I>>::Output;

    fn descend(&self, path: &Branch<P, I>) -> &Self::Target {
        let parent = <N as Descend<P>>::descend(self, &path.parent);
        <<N as Descend<P>>::Target as Child<I>>::child(parent, path.index)
    }

    fn descend_mut(&mut self, path: &Branch<P, I>) -> &mut Self::Target {
        let parent = <N as Descend<P>>::descend_mut(self, &path.parent);
        <<N as Descend<P>>::Target as Child<I>>::child_mut(parent, path.index)
    }
}

/// [`Descend`] keyed on the path: `P: Locate<N>` holds whenever `N: Descend<P>`.
///
/// Accessors generic over the path bound on this trait, so the path type is
/// settled before the target node type is looked up.
pub trait Locate<N>: HybridPath {
    type Target: TreeNode;

    fn locate<'a>(&self, node: &'a N) -> &'a Self::Target;

    fn locate_mut<'a>(&self, node: &'a mut N) -> &'a mut Self::Target;
}

impl<P, N> Locate<N> for P
where
    P: HybridPath,
    N: Descend<P>,
{
    type Target = <N as Descend<P>>::Target;

    fn locate<'a>(&self, node: &'a N) -> &'a Self::Target {
        <N as Descend<P>>::descend(node, self)
    }

    fn locate_mut<'a>(&self, node: &'a mut N) -> &'a mut Self::Target {
        <N as Descend<P>>::descend_mut(node, self)
    }
}

/// Builds a hybrid path: `tree_path![idx::<0>(), 2usize]`.
#[macro_export]
macro_rules! tree_path {
    () => { $crate::path::Root };
    ($($index:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::path::HybridPath as _;
        $crate::path::Root$(.push_back($index))+
    }};
}

// ============================================================================
// Runtime paths
// ============================================================================

/// A runtime sequence of child indices.
///
/// Extending a path returns a new one; the original is left untouched.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TreePath {
    indices: SmallVec<[usize; 8]>,
}

impl TreePath {
    pub const fn new() -> Self {
        Self {
            indices: SmallVec::new_const(),
        }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn back(&self) -> Option<usize> {
        self.indices.last().copied()
    }

    #[must_use]
    pub fn push_back(&self, index: usize) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    /// The path without its last index; the root stays the root.
    #[must_use]
    pub fn parent(&self) -> Self {
        let end = self.indices.len().saturating_sub(1);
        Self::from(&self.indices[..end])
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, usize>> {
        self.indices.iter().copied()
    }
}

impl From<&[usize]> for TreePath {
    fn from(indices: &[usize]) -> Self {
        Self {
            indices: SmallVec::from_slice(indices),
        }
    }
}

impl<const N: usize> From<[usize; N]> for TreePath {
    fn from(indices: [usize; N]) -> Self {
        Self::from(&indices[..])
    }
}

impl FromIterator<usize> for TreePath {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, index) in self.indices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TreePath{}", self)
    }
}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
