//! Stock value functors for structural facts known at compile time.

use crate::node::TreeNode;
use crate::path::HybridPath;

use super::reduction::{ConstUsize, Max, Plus};
use super::value::{AccumulateValue, StaticFunctor, VisitNode};

/// Contributes 1 for every node.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountNodes;

/// Contributes 1 for every leaf.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountLeaves;

/// Contributes 1 for every inner node.
#[derive(Clone, Copy, Debug, Default)]
pub struct CountInnerNodes;

/// Contributes the number of nodes on the path to the visited node.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeDepth;

impl StaticFunctor for CountNodes {
    type Result = usize;
}

impl StaticFunctor for CountLeaves {
    type Result = usize;
}

impl StaticFunctor for CountInnerNodes {
    type Result = usize;
}

impl StaticFunctor for TreeDepth {
    type Result = usize;
}

impl<N: TreeNode, P> VisitNode<N, P> for CountNodes {
    const VALUE: usize = 1;
}

impl<N: TreeNode, P> VisitNode<N, P> for CountLeaves {
    const DO_VISIT: bool = N::IS_LEAF;
    const VALUE: usize = 1;
}

impl<N: TreeNode, P> VisitNode<N, P> for CountInnerNodes {
    const DO_VISIT: bool = !N::IS_LEAF;
    const VALUE: usize = 1;
}

impl<N: TreeNode, P: HybridPath> VisitNode<N, P> for TreeDepth {
    const VALUE: usize = P::DEPTH + 1;
}

pub type StaticNodeCount<T> = AccumulateValue<T, CountNodes, Plus, ConstUsize<0>>;
pub type StaticLeafCount<T> = AccumulateValue<T, CountLeaves, Plus, ConstUsize<0>>;
pub type StaticInnerNodeCount<T> = AccumulateValue<T, CountInnerNodes, Plus, ConstUsize<0>>;
pub type StaticDepth<T> = AccumulateValue<T, TreeDepth, Max, ConstUsize<0>>;
