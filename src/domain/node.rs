//! Menu tree model: ordered branches and scalar leaves

use std::fmt;

use crate::domain::error::{DomainError, DomainResult};

/// Maximum number of entries in one branch; paths select entries with a single decimal digit.
pub const MAX_BRANCH_ENTRIES: usize = 10;

/// Final configuration setting stored in a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Text(String),
    Number(i64),
}

impl Scalar {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            Scalar::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{:?}", s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value)
    }
}

/// Ordered mapping from unique labels to child nodes.
///
/// Entry order is the insertion order and defines which index selects which child.
/// Instances are only created through [`BranchBuilder`](crate::domain::BranchBuilder),
/// which enforces the entry limit and label uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Branch {
    entries: Vec<(String, Node)>,
}

impl Branch {
    pub(crate) fn from_entries(entries: Vec<(String, Node)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in insertion order.
    pub fn get(&self, index: usize) -> Option<(&str, &Node)> {
        self.entries
            .get(index)
            .map(|(label, node)| (label.as_str(), node))
    }

    pub fn get_by_label(&self, label: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, node)| node)
    }

    /// Index of `label`, usable as a path selector.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(l, _)| l == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries
            .iter()
            .map(|(label, node)| (label.as_str(), node))
    }
}

/// Node of a menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Branch(Branch),
    Leaf(Scalar),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn as_branch(&self) -> Option<&Branch> {
        match self {
            Node::Branch(b) => Some(b),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Scalar> {
        match self {
            Node::Leaf(s) => Some(s),
            Node::Branch(_) => None,
        }
    }

    /// Select the child at `index`.
    ///
    /// `depth` is only used to report where the selection failed.
    pub fn child(&self, index: usize, depth: usize) -> DomainResult<&Node> {
        match self {
            Node::Leaf(_) => Err(DomainError::InvalidPath { depth }),
            Node::Branch(branch) => branch
                .get(index)
                .map(|(_, node)| node)
                .ok_or(DomainError::IndexOutOfRange {
                    depth,
                    index,
                    len: branch.len(),
                }),
        }
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Leaf(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Leaf(value.into())
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Leaf(value.into())
    }
}
