//! Node kind taxonomy and the traits every tree node implements.
//!
//! A node type is described by four static flags ([`NodeProperties`]). The
//! flags resolve to exactly one [`NodeKind`], and each kind has a tag type
//! (e.g. [`CompositeNodeTag`]) that the engines dispatch on through trait
//! resolution. No virtual dispatch is involved in traversal.
//!
//! Adding a new node shape means implementing:
//!
//! - [`TreeNode`] with consistent `PROPERTIES` and `Tag`,
//! - [`NodeView`] for the type-erased structural view,
//! - [`StaticDegree`] + [`ChildAt`] for statically sized shapes, and/or
//!   [`DynamicChildren`] for runtime-indexed shapes.
//!
//! Payload leaves only need the [`Leaf`] marker.

use bitflags::bitflags;
use static_assertions::const_assert;

use crate::typelevel::{Bool, Nat, Z};

bitflags! {
    /// Static classification flags of a node type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeProperties: u8 {
        /// Degree is always zero.
        const IS_LEAF = 1;
        /// All children are one repeated child.
        const IS_UNIFORM = 1 << 1;
        /// All children share a single type.
        const IS_TYPE_UNIFORM = 1 << 2;
        /// Degree is a compile-time constant.
        const HAS_STATIC_SIZE = 1 << 3;
    }
}

impl NodeProperties {
    pub const LEAF: Self = Self::IS_LEAF.union(Self::HAS_STATIC_SIZE);
    pub const STATIC_POWER: Self = Self::IS_TYPE_UNIFORM.union(Self::HAS_STATIC_SIZE);
    pub const DYNAMIC_POWER: Self = Self::IS_TYPE_UNIFORM;
    pub const STATIC_UNIFORM_POWER: Self = Self::IS_UNIFORM
        .union(Self::IS_TYPE_UNIFORM)
        .union(Self::HAS_STATIC_SIZE);
    pub const DYNAMIC_UNIFORM_POWER: Self = Self::IS_UNIFORM.union(Self::IS_TYPE_UNIFORM);
    pub const COMPOSITE: Self = Self::HAS_STATIC_SIZE;

    pub const fn is_leaf(self) -> bool {
        self.contains(Self::IS_LEAF)
    }

    pub const fn is_uniform(self) -> bool {
        self.contains(Self::IS_UNIFORM)
    }

    pub const fn is_type_uniform(self) -> bool {
        self.contains(Self::IS_TYPE_UNIFORM)
    }

    pub const fn has_static_size(self) -> bool {
        self.contains(Self::HAS_STATIC_SIZE)
    }

    /// Children share a type but are addressed individually.
    pub const fn is_power(self) -> bool {
        !self.is_leaf() && self.is_type_uniform() && !self.is_uniform()
    }

    /// Children are heterogeneous and statically counted.
    pub const fn is_composite(self) -> bool {
        !self.is_leaf() && !self.is_type_uniform() && !self.is_uniform() && self.has_static_size()
    }
}

/// The single shape a consistent set of [`NodeProperties`] resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Leaf,
    StaticPower,
    DynamicPower,
    StaticUniformPower,
    DynamicUniformPower,
    Composite,
}

impl NodeKind {
    /// Resolves flags to a kind, or `None` if they are contradictory.
    pub const fn classify(props: NodeProperties) -> Option<NodeKind> {
        let uniform = props.is_uniform();
        let type_uniform = props.is_type_uniform();
        let static_size = props.has_static_size();

        if props.is_leaf() {
            return if !uniform && !type_uniform && static_size {
                Some(NodeKind::Leaf)
            } else {
                None
            };
        }

        match (uniform, type_uniform, static_size) {
            (false, true, true) => Some(NodeKind::StaticPower),
            (false, true, false) => Some(NodeKind::DynamicPower),
            (true, true, true) => Some(NodeKind::StaticUniformPower),
            (true, true, false) => Some(NodeKind::DynamicUniformPower),
            (false, false, true) => Some(NodeKind::Composite),
            // Uniform without a shared type, or heterogeneous without a static size.
            _ => None,
        }
    }

    /// Like [`NodeKind::classify`], but panics on contradictory flags.
    ///
    /// Used in constant context, where the panic becomes a build failure.
    pub const fn expect(props: NodeProperties) -> NodeKind {
        match Self::classify(props) {
            Some(kind) => kind,
            None => panic!("node properties do not resolve to a single node kind"),
        }
    }

    pub const fn properties(self) -> NodeProperties {
        match self {
            NodeKind::Leaf => NodeProperties::LEAF,
            NodeKind::StaticPower => NodeProperties::STATIC_POWER,
            NodeKind::DynamicPower => NodeProperties::DYNAMIC_POWER,
            NodeKind::StaticUniformPower => NodeProperties::STATIC_UNIFORM_POWER,
            NodeKind::DynamicUniformPower => NodeProperties::DYNAMIC_UNIFORM_POWER,
            NodeKind::Composite => NodeProperties::COMPOSITE,
        }
    }

    pub const fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }

    pub const fn has_static_size(self) -> bool {
        self.properties().has_static_size()
    }
}

const_assert!(matches!(NodeKind::classify(NodeProperties::LEAF), Some(NodeKind::Leaf)));
const_assert!(matches!(
    NodeKind::classify(NodeProperties::COMPOSITE),
    Some(NodeKind::Composite)
));
const_assert!(NodeProperties::STATIC_POWER.is_power());
const_assert!(NodeProperties::DYNAMIC_POWER.is_power());
const_assert!(!NodeProperties::STATIC_UNIFORM_POWER.is_power());
const_assert!(NodeProperties::COMPOSITE.is_composite());
const_assert!(NodeKind::classify(NodeProperties::IS_LEAF).is_none());
const_assert!(NodeKind::classify(NodeProperties::IS_UNIFORM).is_none());

// ============================================================================
// Tags
// ============================================================================

/// Type-level name of a [`NodeKind`].
pub trait NodeTag: 'static {
    const KIND: NodeKind;
}

/// Tags of nodes with children that can be unrolled at compile time.
pub trait StaticInnerTag: NodeTag {}

/// Tags of every non-leaf kind.
pub trait InnerTag: NodeTag {}

macro_rules! node_tags {
    ($($(#[$meta:meta])* $tag:ident => $kind:ident $(, $extra:ident)*;)+) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub struct $tag;

            impl NodeTag for $tag {
                const KIND: NodeKind = NodeKind::$kind;
            }

            $(impl $extra for $tag {})*
        )+
    };
}

node_tags! {
    LeafNodeTag => Leaf;
    /// Static, individually addressed children of one type.
    PowerNodeTag => StaticPower, InnerTag, StaticInnerTag;
    DynamicPowerNodeTag => DynamicPower, InnerTag;
    /// Static degree, one repeated child.
    UniformPowerNodeTag => StaticUniformPower, InnerTag, StaticInnerTag;
    DynamicUniformPowerNodeTag => DynamicUniformPower, InnerTag;
    CompositeNodeTag => Composite, InnerTag, StaticInnerTag;
}

/// Resolves `props` and checks it agrees with the kind named by the tag.
pub const fn checked_kind(props: NodeProperties, tag: NodeKind) -> NodeKind {
    let kind = NodeKind::expect(props);
    assert!(
        kind as u8 == tag as u8,
        "node tag disagrees with node properties"
    );
    kind
}

// ============================================================================
// Node traits
// ============================================================================

/// Type-erased structural view of a node.
///
/// Object safe, so runtime helpers can walk any tree without knowing its
/// type. The engines never go through this trait.
pub trait NodeView {
    fn kind(&self) -> NodeKind;

    fn degree(&self) -> usize;

    /// The `index`-th child, or `None` past the degree.
    fn child_view(&self, index: usize) -> Option<&dyn NodeView>;
}

/// A node in a type tree.
pub trait TreeNode: NodeView {
    const PROPERTIES: NodeProperties;

    type Tag: NodeTag;

    /// `Some(degree)` when the degree is a compile-time constant.
    const STATIC_DEGREE: Option<usize>;

    /// Evaluating this constant rejects inconsistent flag/tag pairs.
    const KIND: NodeKind = checked_kind(Self::PROPERTIES, <Self::Tag as NodeTag>::KIND);

    const IS_LEAF: bool = Self::PROPERTIES.is_leaf();
    const IS_UNIFORM: bool = Self::PROPERTIES.is_uniform();
    const IS_TYPE_UNIFORM: bool = Self::PROPERTIES.is_type_uniform();
    const HAS_STATIC_SIZE: bool = Self::PROPERTIES.has_static_size();
    const IS_POWER: bool = Self::PROPERTIES.is_power();
    const IS_COMPOSITE: bool = Self::PROPERTIES.is_composite();
}

/// Nodes whose degree is a compile-time natural.
pub trait StaticDegree: TreeNode {
    type Degree: Nat;
}

/// Which traversal modes a static power node supports.
///
/// Every such node can be looped over at runtime. `Unrollable` is [`True`]
/// when the node also has a [`StaticDegree`]; otherwise the hybrid engine
/// loops over it whatever the visitor prefers.
///
/// [`True`]: crate::typelevel::True
pub trait TraversalSupport: TreeNode {
    type Unrollable: Bool;
}

/// Compile-time indexed access to child `I`.
///
/// Out-of-range indices fail to compile, either because no impl exists
/// (composites) or through a constant assertion (static power nodes).
pub trait ChildAt<I: Nat>: TreeNode {
    type Child: TreeNode;

    fn child_at(&self) -> &Self::Child;

    fn child_at_mut(&mut self) -> &mut Self::Child;
}

/// Runtime indexed access for nodes whose children share one type.
///
/// `index < degree()` is a precondition, checked in debug builds.
pub trait DynamicChildren: TreeNode {
    type Child: TreeNode;

    fn child_dyn(&self, index: usize) -> &Self::Child;

    fn child_dyn_mut(&mut self, index: usize) -> &mut Self::Child;
}

/// Single-level child access with either index flavour.
///
/// ```
/// use typetree_core::prelude::*;
///
/// let power = StaticPowerNode::<LeafNode<u8>, 2>::new([LeafNode::new(1), LeafNode::new(2)]);
/// assert_eq!(*power.child(idx::<1>()).value(), 2);
/// assert_eq!(*power.child(0usize).value(), 1);
/// ```
pub trait Child<I>: TreeNode {
    type Output: TreeNode;

    fn child(&self, index: I) -> &Self::Output;

    fn child_mut(&mut self, index: I) -> &mut Self::Output;
}

impl<N, I> Child<I> for N
where
    N: ChildAt<I>,
    I: Nat,
{
    type Output = <N as ChildAt<I>>::Child;

    fn child(&self, _index: I) -> &Self::Output {
        self.child_at()
    }

    fn child_mut(&mut self, _index: I) -> &mut Self::Output {
        self.child_at_mut()
    }
}

impl<N: DynamicChildren> Child<usize> for N {
    type Output = <N as DynamicChildren>::Child;

    fn child(&self, index: usize) -> &Self::Output {
        self.child_dyn(index)
    }

    fn child_mut(&mut self, index: usize) -> &mut Self::Output {
        self.child_dyn_mut(index)
    }
}

/// Deep child access: `child!(tree, i, j, k)` is `tree.child(i).child(j).child(k)`.
#[macro_export]
macro_rules! child {
    ($node:expr $(,)?) => { &$node };
    ($node:expr, $($index:expr),+ $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::node::Child as _;
        let node = &$node;
        $(let node = node.child($index);)+
        node
    }};
}

// ============================================================================
// Leaves
// ============================================================================

/// Marker for payload types that are leaves of a tree.
pub trait Leaf {}

impl<T: Leaf> TreeNode for T {
    const PROPERTIES: NodeProperties = NodeProperties::LEAF;
    type Tag = LeafNodeTag;
    const STATIC_DEGREE: Option<usize> = Some(0);
}

impl<T: Leaf> NodeView for T {
    fn kind(&self) -> NodeKind {
        NodeKind::Leaf
    }

    fn degree(&self) -> usize {
        0
    }

    fn child_view(&self, _index: usize) -> Option<&dyn NodeView> {
        None
    }
}

impl<T: Leaf> StaticDegree for T {
    type Degree = Z;
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
