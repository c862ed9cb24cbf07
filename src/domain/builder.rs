//! Builder for menu trees, validating branch shape on construction.

use std::collections::HashSet;

use tracing::{instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Branch, Node, Scalar, MAX_BRANCH_ENTRIES};

enum Pending {
    Ready(Node),
    Nested(BranchBuilder),
}

/// Accumulates the entries of one branch in insertion order.
///
/// Nothing is checked until [`build`](Self::build); nested builders are built depth-first
/// so the first shape violation anywhere in the subtree is reported.
#[derive(Default)]
pub struct BranchBuilder {
    entries: Vec<(String, Pending)>,
}

impl BranchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leaf(mut self, label: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.entries
            .push((label.into(), Pending::Ready(Node::Leaf(value.into()))));
        self
    }

    pub fn branch(mut self, label: impl Into<String>, child: BranchBuilder) -> Self {
        self.entries.push((label.into(), Pending::Nested(child)));
        self
    }

    /// Add an already constructed node.
    pub fn node(mut self, label: impl Into<String>, node: Node) -> Self {
        self.entries.push((label.into(), Pending::Ready(node)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[instrument(level = "trace", skip(self), fields(entries = self.entries.len()))]
    pub fn build_branch(self) -> DomainResult<Branch> {
        if self.entries.len() > MAX_BRANCH_ENTRIES {
            let label = self.entries[MAX_BRANCH_ENTRIES].0.clone();
            return Err(DomainError::TooManyEntries {
                label,
                count: self.entries.len(),
            });
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(self.entries.len());
        for (label, pending) in self.entries {
            if !seen.insert(label.clone()) {
                return Err(DomainError::DuplicateLabel(label));
            }
            let node = match pending {
                Pending::Ready(node) => node,
                Pending::Nested(child) => child.build()?,
            };
            trace!(label = %label, leaf = node.is_leaf(), "entry");
            entries.push((label, node));
        }

        Ok(Branch::from_entries(entries))
    }

    pub fn build(self) -> DomainResult<Node> {
        self.build_branch().map(Node::Branch)
    }
}
