//! Runtime walks over the type-erased [`NodeView`].
//!
//! These helpers work on any tree without naming its type, at the cost of
//! dynamic dispatch. They are the runtime counterpart of the compile-time
//! counts in [`accumulate`](crate::accumulate).

use tracing::debug;

use crate::error::PathError;
use crate::node::NodeView;
use crate::path::TreePath;

/// Leaves plus inner nodes.
pub fn count_nodes(node: &dyn NodeView) -> usize {
    1 + children(node).map(count_nodes).sum::<usize>()
}

pub fn count_leaves(node: &dyn NodeView) -> usize {
    if node.kind().is_leaf() {
        return 1;
    }
    children(node).map(count_leaves).sum()
}

pub fn count_inner_nodes(node: &dyn NodeView) -> usize {
    if node.kind().is_leaf() {
        return 0;
    }
    1 + children(node).map(count_inner_nodes).sum::<usize>()
}

/// Number of nodes on the longest root-to-leaf path. A lone leaf has depth 1.
pub fn tree_depth(node: &dyn NodeView) -> usize {
    1 + children(node).map(tree_depth).max().unwrap_or(0)
}

/// The node found by following `path` from `root`.
pub fn node_at<'a>(root: &'a dyn NodeView, path: &TreePath) -> Result<&'a dyn NodeView, PathError> {
    let mut node = root;
    for (depth, index) in path.iter().enumerate() {
        if node.kind().is_leaf() {
            debug!(%path, depth, "path continues past a leaf");
            return Err(PathError::PastLeaf { depth });
        }
        let degree = node.degree();
        node = node.child_view(index).ok_or_else(|| {
            debug!(%path, depth, index, degree, "child index out of range");
            PathError::IndexOutOfRange {
                index,
                degree,
                depth,
            }
        })?;
    }
    Ok(node)
}

/// Children of `node`, left to right.
pub fn children(node: &dyn NodeView) -> impl Iterator<Item = &dyn NodeView> {
    (0..node.degree()).filter_map(move |i| node.child_view(i))
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
