//! Concrete node containers.
//!
//! | Container                    | Kind                | Degree       |
//! |------------------------------|---------------------|--------------|
//! | [`LeafNode`]                 | leaf                | 0            |
//! | [`StaticPowerNode`]          | static power        | `N`          |
//! | [`DynamicPowerNode`]         | dynamic power       | runtime      |
//! | [`StaticUniformPowerNode`]   | static uniform      | `N`          |
//! | [`DynamicUniformPowerNode`]  | dynamic uniform     | runtime      |
//! | [`CompositeNode`]            | composite           | tuple arity  |
//!
//! Every container owns its children by value. Replacing a child moves the
//! new one in and hands the previous one back to the caller.

mod composite;
mod leaf;
mod power;
mod uniform;

pub use composite::CompositeNode;
pub(crate) use composite::for_each_composite_arity;
pub use leaf::LeafNode;
pub use power::{DynamicPowerNode, StaticPowerNode};
pub use uniform::{DynamicUniformPowerNode, StaticUniformPowerNode};

#[cfg(test)]
#[path = "nodes_test.rs"]
mod nodes_test;
