//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the menu tree and time control rules.
/// These are independent of configuration and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("index {index} out of range at depth {depth}: branch has {len} entries")]
    IndexOutOfRange {
        depth: usize,
        index: usize,
        len: usize,
    },

    #[error("invalid path: cannot select into a leaf at depth {depth}")]
    InvalidPath { depth: usize },

    #[error("depth {depth} exceeds path length {len}")]
    DepthOutOfRange { depth: usize, len: usize },

    #[error("invalid path syntax: {0}")]
    InvalidPathSyntax(String),

    #[error("malformed time control field '{field}': {reason}")]
    MalformedTimeField { field: String, reason: String },

    #[error("branch has {count} entries (max {max}), overflowing at '{label}'", max = crate::domain::MAX_BRANCH_ENTRIES)]
    TooManyEntries { label: String, count: usize },

    #[error("duplicate label in branch: {0}")]
    DuplicateLabel(String),

    #[error("label not found: {0}")]
    LabelNotFound(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
