//! Runtime-capable depth-first traversal.
//!
//! An accumulator is threaded through the visitor hooks. At an inner node
//! the sequence is:
//!
//! ```text
//! pre
//! for each child i:
//!     before_child
//!     infix            (i > 0 only)
//!     <child subtree>  (unless filtered out)
//!     after_child
//! post
//! ```
//!
//! and a leaf gets a single `leaf` call.
//!
//! Recursion depth equals tree depth; there is no explicit limit.

mod apply;
mod callbacks;
mod visitor;

pub use apply::{
    ApplyByTag, ApplyDynamic, ApplyDynamicChild, ApplyPreferred, ApplyStatic, ApplyStaticChild,
    ApplyToTree, ApplyWithMode, Infix, SelectMode, UnrollChildren, VisitChildIf, apply_to_tree,
    hybrid_apply_to_tree,
};
pub use callbacks::{
    ClosureVisitor, NodeCallback, NodeFn, for_each_leaf_node, for_each_node, for_each_node_with,
};
pub use visitor::{
    AfterChild, BeforeChild, ChildFilter, DynamicTraversal, Homogeneous, HybridVisitor,
    StaticTraversal, TraversalMode, TraversalPreference, TreeVisitor, VisitIn, VisitLeaf,
    VisitPost, VisitPre,
};
