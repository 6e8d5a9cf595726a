use crate::node::Leaf;

/// A leaf carrying a payload of type `T`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LeafNode<T = ()> {
    value: T,
}

impl<T> LeafNode<T> {
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the payload, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T> Leaf for LeafNode<T> {}
