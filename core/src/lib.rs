#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Typed trees whose shape is known to the compiler.
//!
//! A tree is built from five node kinds: leaves, static and dynamic power
//! nodes, their uniform variants, and composites of heterogeneous children.
//! Every node states its kind and properties as associated constants and a
//! tag type, which lets the rest of the crate work on the shape at compile
//! time:
//!
//! - [`path`]: hybrid paths that mix type-level and runtime indices.
//! - [`traversal`]: visitor traversal, unrolled over static children.
//! - [`accumulate`]: compile-time reductions of values and types.
//! - [`transform`]: shape-preserving rebuilding, with size trees, data trees
//!   and tree containers on top.
//! - [`view`]: a runtime, object-safe look at the same trees.

extern crate alloc;

#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod accumulate;
pub mod error;
pub mod node;
pub mod nodes;
pub mod path;
pub mod transform;
pub mod traversal;
pub mod typelevel;
pub mod view;

pub use error::PathError;

/// Everything needed to build, walk and transform trees.
pub mod prelude {
    pub use crate::accumulate::*;
    pub use crate::error::PathError;
    pub use crate::node::*;
    pub use crate::nodes::*;
    pub use crate::path::*;
    pub use crate::transform::*;
    pub use crate::traversal::*;
    pub use crate::typelevel::*;
    pub use crate::view::{count_inner_nodes, count_leaves, count_nodes, node_at, tree_depth};
    pub use crate::{child, tree_path};
}
