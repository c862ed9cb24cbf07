//! Index-path addressing into a menu tree.
//!
//! Resolution walks the tree once, one level per selector. All results borrow from the tree,
//! so callers only ever hold shared references into the configuration.

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::Node;

/// Resolve the node addressed by the whole of `path`.
pub fn resolve<'t>(tree: &'t Node, path: &[usize]) -> DomainResult<&'t Node> {
    resolve_at(tree, path, path.len())
}

/// Resolve the node addressed by the first `depth` selectors of `path`.
///
/// `depth == 0` yields the tree itself.
///
/// # Errors
/// * [`DomainError::DepthOutOfRange`] if `depth > path.len()`
/// * [`DomainError::IndexOutOfRange`] if a selector exceeds the entry count at its level
/// * [`DomainError::InvalidPath`] if a selector is applied to a leaf
#[instrument(level = "debug", skip(tree))]
pub fn resolve_at<'t>(tree: &'t Node, path: &[usize], depth: usize) -> DomainResult<&'t Node> {
    if depth > path.len() {
        return Err(DomainError::DepthOutOfRange {
            depth,
            len: path.len(),
        });
    }

    let node = path[..depth]
        .iter()
        .enumerate()
        .try_fold(tree, |node, (level, &index)| node.child(index, level))?;

    debug!(leaf = node.is_leaf(), "resolved");
    Ok(node)
}

/// Labels of the entries selected along `path`, root first.
pub fn resolve_labels<'t>(tree: &'t Node, path: &[usize]) -> DomainResult<Vec<&'t str>> {
    let mut labels = Vec::with_capacity(path.len());
    let mut node = tree;
    for (level, &index) in path.iter().enumerate() {
        let branch = node
            .as_branch()
            .ok_or(DomainError::InvalidPath { depth: level })?;
        let (label, child) = branch.get(index).ok_or(DomainError::IndexOutOfRange {
            depth: level,
            index,
            len: branch.len(),
        })?;
        labels.push(label);
        node = child;
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BranchBuilder;

    fn sample() -> Node {
        BranchBuilder::new()
            .leaf("a", "1")
            .branch(
                "b",
                BranchBuilder::new()
                    .leaf("c", 2i64)
                    .branch("d", BranchBuilder::new().leaf("e", "deep")),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_depth_zero_returns_tree() {
        let tree = sample();
        assert!(std::ptr::eq(resolve_at(&tree, &[7, 7], 0).unwrap(), &tree));
    }

    #[test]
    fn test_partial_depth() {
        let tree = sample();
        let node = resolve_at(&tree, &[1, 1, 0], 2).unwrap();
        assert_eq!(node.as_branch().unwrap().labels().collect::<Vec<_>>(), vec!["e"]);
    }

    #[test]
    fn test_full_path_to_leaf() {
        let tree = sample();
        let node = resolve(&tree, &[1, 1, 0]).unwrap();
        assert_eq!(node, &Node::from("deep"));
    }

    #[test]
    fn test_depth_beyond_path() {
        let tree = sample();
        assert_eq!(
            resolve_at(&tree, &[1], 2),
            Err(DomainError::DepthOutOfRange { depth: 2, len: 1 })
        );
    }

    #[test]
    fn test_errors_only_checked_up_to_depth() {
        let tree = sample();
        // the trailing selector would be out of range but is never applied
        assert!(resolve_at(&tree, &[1, 9], 1).is_ok());
    }

    #[test]
    fn test_resolve_labels() {
        let tree = sample();
        assert_eq!(resolve_labels(&tree, &[1, 1, 0]).unwrap(), vec!["b", "d", "e"]);
        assert_eq!(
            resolve_labels(&tree, &[0, 0]),
            Err(DomainError::InvalidPath { depth: 1 })
        );
    }
}
