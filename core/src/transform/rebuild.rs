//! Shape-preserving reconstruction of children.

use crate::node::Leaf;
use crate::nodes::{
    CompositeNode, DynamicPowerNode, DynamicUniformPowerNode, StaticPowerNode,
    StaticUniformPowerNode, for_each_composite_arity,
};

use super::TransformTree;

/// The implementing node with every child transformed by `M`, held in a
/// container of the same shape.
///
/// A leaf has no children; its rebuilt form is a copy of itself.
pub trait RebuildChildren<M> {
    type Rebuilt;

    fn rebuild_children(&self, transformation: &M) -> Self::Rebuilt;
}

impl<L: Leaf + Clone, M> RebuildChildren<M> for L {
    type Rebuilt = L;

    fn rebuild_children(&self, _transformation: &M) -> L {
        self.clone()
    }
}

impl<C, const N: usize, M> RebuildChildren<M> for StaticPowerNode<C, N>
where
    C: TransformTree<M>,
{
    type Rebuilt = StaticPowerNode<<C as TransformTree<M>>::Output, N>;

    fn rebuild_children(&self, transformation: &M) -> Self::Rebuilt {
        let children = self.children();
        StaticPowerNode::from_fn(|i| children[i].transformed(transformation))
    }
}

impl<C, M> RebuildChildren<M> for DynamicPowerNode<C>
where
    C: TransformTree<M>,
{
    type Rebuilt = DynamicPowerNode<<C as TransformTree<M>>::Output>;

    fn rebuild_children(&self, transformation: &M) -> Self::Rebuilt {
        self.iter()
            .map(|child| child.transformed(transformation))
            .collect()
    }
}

impl<C, const N: usize, M> RebuildChildren<M> for StaticUniformPowerNode<C, N>
where
    C: TransformTree<M>,
{
    type Rebuilt = StaticUniformPowerNode<<C as TransformTree<M>>::Output, N>;

    fn rebuild_children(&self, transformation: &M) -> Self::Rebuilt {
        StaticUniformPowerNode::new(self.shared_child().transformed(transformation))
    }
}

impl<C, M> RebuildChildren<M> for DynamicUniformPowerNode<C>
where
    C: TransformTree<M>,
{
    type Rebuilt = DynamicUniformPowerNode<<C as TransformTree<M>>::Output>;

    fn rebuild_children(&self, transformation: &M) -> Self::Rebuilt {
        DynamicUniformPowerNode::new(
            self.degree(),
            self.shared_child().transformed(transformation),
        )
    }
}

macro_rules! impl_composite_rebuild {
    ($degree:ty, $len:literal; $($idx:tt : $T:ident @ $nat:ty),+) => {
        impl<$($T,)+ Map> RebuildChildren<Map> for CompositeNode<($($T,)+)>
        where
            $($T: TransformTree<Map>,)+
        {
            type Rebuilt = CompositeNode<($(<$T as TransformTree<Map>>::Output,)+)>;

            fn rebuild_children(&self, transformation: &Map) -> Self::Rebuilt {
                let children = self.children();
                CompositeNode::new(($(children.$idx.transformed(transformation),)+))
            }
        }
    };
}

for_each_composite_arity!(impl_composite_rebuild);
