use termtree::Tree;
use tracing::instrument;

use crate::domain::Node;

/// Render a menu tree for terminal display.
pub trait TreeNodeConvert {
    fn to_tree_string(&self, root: &str) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self, root: &str) -> Tree<String> {
        match self {
            Node::Leaf(value) => Tree::new(format!("{} = {}", root, value)),
            Node::Branch(branch) => {
                // Children are prefixed with their selector digit
                let leaves: Vec<_> = branch
                    .iter()
                    .enumerate()
                    .map(|(i, (label, child))| child.to_tree_string(&format!("[{}] {}", i, label)))
                    .collect();
                Tree::new(root.to_string()).with_leaves(leaves)
            }
        }
    }
}
