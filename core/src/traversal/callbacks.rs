//! Closure-based traversals.
//!
//! Callbacks see each node through [`NodeView`] together with its runtime
//! [`TreePath`], so one closure can handle every node type in the tree.

use crate::node::{NodeView, TreeNode};
use crate::path::{HybridPath, Root, TreePath};

use super::apply::ApplyToTree;
use super::visitor::{DynamicTraversal, Homogeneous, HybridVisitor, TreeVisitor};

/// Signature of a no-op callback slot.
pub type NodeFn = fn(&dyn NodeView, &TreePath);

fn ignore(_node: &dyn NodeView, _path: &TreePath) {}

/// Runs `pre` on entering inner nodes, `leaf` on leaves and `post` on
/// leaving inner nodes.
pub struct ClosureVisitor<Pre, Leaf, Post> {
    pre: Pre,
    leaf: Leaf,
    post: Post,
}

impl<Pre, Leaf, Post> ClosureVisitor<Pre, Leaf, Post>
where
    Pre: FnMut(&dyn NodeView, &TreePath),
    Leaf: FnMut(&dyn NodeView, &TreePath),
    Post: FnMut(&dyn NodeView, &TreePath),
{
    pub fn new(pre: Pre, leaf: Leaf, post: Post) -> Self {
        Self { pre, leaf, post }
    }
}

impl<Pre, Leaf, Post> TreeVisitor for ClosureVisitor<Pre, Leaf, Post> {
    type Traversal = DynamicTraversal;
}

impl<Pre, Leaf, Post> HybridVisitor<()> for ClosureVisitor<Pre, Leaf, Post>
where
    Pre: FnMut(&dyn NodeView, &TreePath),
    Leaf: FnMut(&dyn NodeView, &TreePath),
    Post: FnMut(&dyn NodeView, &TreePath),
{
    fn pre<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, _acc: ()) {
        (self.pre)(node as &dyn NodeView, &path.to_tree_path());
    }

    fn leaf<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, _acc: ()) {
        (self.leaf)(node as &dyn NodeView, &path.to_tree_path());
    }

    fn post<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, _acc: ()) {
        (self.post)(node as &dyn NodeView, &path.to_tree_path());
    }
}

/// Runs one closure on entering inner nodes and on leaves.
pub struct NodeCallback<F> {
    f: F,
}

impl<F> NodeCallback<F>
where
    F: FnMut(&dyn NodeView, &TreePath),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> TreeVisitor for NodeCallback<F> {
    type Traversal = DynamicTraversal;
}

impl<F> HybridVisitor<()> for NodeCallback<F>
where
    F: FnMut(&dyn NodeView, &TreePath),
{
    fn pre<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, _acc: ()) {
        (self.f)(node as &dyn NodeView, &path.to_tree_path());
    }

    fn leaf<N: TreeNode, P: HybridPath>(&mut self, node: &N, path: &P, _acc: ()) {
        (self.f)(node as &dyn NodeView, &path.to_tree_path());
    }
}

/// Runs `f` once per node, parents before their children.
pub fn for_each_node<T, F>(tree: &T, f: F)
where
    F: FnMut(&dyn NodeView, &TreePath),
    T: ApplyToTree<Homogeneous<NodeCallback<F>>, Root, (), Output = ()>,
{
    let mut visitor = Homogeneous::new(NodeCallback::new(f));
    <T as ApplyToTree<_, Root, ()>>::apply_to_tree(tree, &Root, &mut visitor, ());
}

/// Runs `pre`/`post` around inner nodes and `leaf` on leaves.
pub fn for_each_node_with<T, Pre, Leaf, Post>(tree: &T, pre: Pre, leaf: Leaf, post: Post)
where
    Pre: FnMut(&dyn NodeView, &TreePath),
    Leaf: FnMut(&dyn NodeView, &TreePath),
    Post: FnMut(&dyn NodeView, &TreePath),
    T: ApplyToTree<Homogeneous<ClosureVisitor<Pre, Leaf, Post>>, Root, (), Output = ()>,
{
    let mut visitor = Homogeneous::new(ClosureVisitor::new(pre, leaf, post));
    <T as ApplyToTree<_, Root, ()>>::apply_to_tree(tree, &Root, &mut visitor, ());
}

/// Runs `f` on every leaf, left to right.
pub fn for_each_leaf_node<T, F>(tree: &T, f: F)
where
    F: FnMut(&dyn NodeView, &TreePath),
    T: ApplyToTree<Homogeneous<ClosureVisitor<NodeFn, F, NodeFn>>, Root, (), Output = ()>,
{
    for_each_node_with(tree, ignore as NodeFn, f, ignore as NodeFn);
}
