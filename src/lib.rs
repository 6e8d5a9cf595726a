//! Typetree - trees whose shape lives in the type system
//!
//! # Overview
//!
//! A typetree is built from a handful of node containers whose kind, degree
//! and child types are known to the compiler. Algorithms over the tree
//! (traversal, accumulation, transformation) are resolved through trait
//! dispatch on the node types, so the static parts of a tree are unrolled
//! at compile time and the dynamic parts are looped over at runtime.
//!
//! Common uses include:
//!
//! - Describing nested function spaces or data layouts
//! - Attaching per-node data to an existing tree
//! - Storing one value per leaf, addressed by a tree path
//!
//! # Quick Start
//!
//! ```
//! use typetree::prelude::*;
//!
//! // A composite of a three-leaf power node and a single leaf.
//! type Tree = CompositeNode<(StaticPowerNode<LeafNode, 3>, LeafNode)>;
//!
//! // Structural facts are constants.
//! assert_eq!(StaticNodeCount::<Tree>::RESULT, 6);
//! assert_eq!(StaticLeafCount::<Tree>::RESULT, 4);
//!
//! // The runtime walk agrees.
//! let tree = Tree::default();
//! let mut leaves = Vec::new();
//! for_each_leaf_node(&tree, |_, path| leaves.push(path.to_string()));
//! assert_eq!(leaves, ["[0, 0]", "[0, 1]", "[0, 2]", "[1]"]);
//!
//! // One value per leaf, addressed by typed or runtime paths.
//! let mut values = make_uniform_tree_container::<f64, _>(&tree);
//! *values.get_mut(&tree_path![idx::<0>(), 2usize]) = 1.5;
//! assert_eq!(values.value_at::<f64>(&TreePath::from([0, 2])), Ok(&1.5));
//! ```
//!
//! # Modules
//!
//! - [`node`] and [`nodes`]: the node taxonomy and the containers
//! - [`path`]: hybrid and runtime tree paths
//! - [`traversal`]: visitors and closure callbacks
//! - [`accumulate`]: compile-time reductions over values and types
//! - [`transform`]: size trees, data trees and tree containers

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

pub use typetree_core::*;
