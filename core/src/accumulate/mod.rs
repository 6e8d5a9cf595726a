//! Compile-time accumulation over a tree.
//!
//! Both engines fold over the tree depth first, children left to right,
//! each child fully reduced before its next sibling:
//!
//! - [`AccumulateValue`] folds into a constant. The result is an associated
//!   `const`, computed during constant evaluation.
//! - [`AccumulateType`] folds into a type.
//!
//! At a leaf the visited contribution is combined with the running value by
//! the sibling reduction. At an inner node the children are folded first,
//! seeded with the running value, and the node's own contribution is then
//! combined with the children's result by the parent-child reduction.
//! Nodes the functor declines to visit pass the running value through.
//!
//! Only statically sized nodes take part; a dynamic node anywhere in the
//! tree is a build failure.
//!
//! ```
//! use typetree_core::prelude::*;
//!
//! type Tree = CompositeNode<(StaticPowerNode<LeafNode, 3>, LeafNode)>;
//!
//! assert_eq!(StaticNodeCount::<Tree>::RESULT, 6);
//! assert_eq!(StaticLeafCount::<Tree>::RESULT, 4);
//! assert_eq!(StaticDepth::<Tree>::RESULT, 3);
//! ```

mod functors;
mod reduction;
mod ty;
mod value;

pub use functors::{
    CountInnerNodes, CountLeaves, CountNodes, StaticDepth, StaticInnerNodeCount,
    StaticLeafCount, StaticNodeCount, TreeDepth,
};
pub use reduction::{
    And, ConstBool, ConstI64, ConstU64, ConstUsize, ConstValue, Max, Min, Minus, Multiply, Or,
    Plus, StaticReduction,
};
pub use ty::{
    AccumulateType, AccumulateTypeByTag, AccumulateTypeChildren, AccumulatedType,
    BottomUpReduction, FlattenedReduction, Propagate, SelectReduce, TypeAccumulationPolicy,
    TypeFunctor, TypePolicy, TypeReduction,
};
pub use value::{
    AccumulateByTag, AccumulateChildren, AccumulateValue, ChildrenValue, StaticFunctor,
    SubtreeValue, VisitNode, Visited,
};

#[cfg(test)]
#[path = "accumulate_test.rs"]
mod accumulate_test;
