//! Errors of runtime path lookups.
//!
//! Structural mistakes (inconsistent node flags, out-of-range compile-time
//! indices, visitors lacking a hook) are build failures and never reach this
//! type. Runtime child indices on the typed API are preconditions checked
//! with `debug_assert!`. Only the fallible lookups that walk a tree along a
//! [`TreePath`](crate::path::TreePath) report errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("child index {index} out of range for node of degree {degree} at depth {depth}")]
    IndexOutOfRange {
        index: usize,
        degree: usize,
        depth: usize,
    },

    #[error("path continues past a leaf at depth {depth}")]
    PastLeaf { depth: usize },

    #[error("path ends at an inner node at depth {depth}, expected a leaf")]
    NotALeaf { depth: usize },
}
