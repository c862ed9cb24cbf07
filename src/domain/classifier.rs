//! Leaf classification for menu paths.

use crate::domain::error::DomainResult;
use crate::domain::node::Node;
use crate::domain::resolver::resolve;

/// Whether `path` ends in a setting rather than a submenu of the shipped menu.
///
/// Encodes the shipped menu's shape: categories before "Time control" are one level deep,
/// and "Time control" holds plain entries up to index 5 followed by nested groups.
/// Must change together with [`crate::domain::menu`].
pub fn is_leaf(path: &[usize]) -> bool {
    match path {
        [_, _, _] => true,
        [category, entry] => *category < 3 || *entry < 6,
        _ => false,
    }
}

/// Whether `path` resolves to a leaf of `tree`, by inspecting the resolved node.
pub fn is_leaf_node(tree: &Node, path: &[usize]) -> DomainResult<bool> {
    resolve(tree, path).map(Node::is_leaf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&[0, 0, 0], true)]
    #[case(&[2, 5], true)]
    #[case(&[3, 7], false)]
    #[case(&[3, 5], true)]
    #[case(&[3, 6], false)]
    #[case(&[1, 3], true)]
    #[case(&[3], false)]
    #[case(&[], false)]
    #[case(&[3, 6, 0, 1], false)]
    fn test_is_leaf(#[case] path: &[usize], #[case] expected: bool) {
        assert_eq!(is_leaf(path), expected);
    }
}
