//! Domain layer: menu tree model, path addressing and time control parsing
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod assets;
pub mod builder;
pub mod classifier;
pub mod error;
pub mod menu;
pub mod node;
pub mod path;
pub mod resolver;
pub mod time_control;

pub use builder::BranchBuilder;
pub use classifier::{is_leaf, is_leaf_node};
pub use error::{DomainError, DomainResult};
pub use menu::{menu, pawn_promotion_index, MenuCategory};
pub use node::{Branch, Node, Scalar, MAX_BRANCH_ENTRIES};
pub use path::MenuPath;
pub use resolver::{resolve, resolve_at, resolve_labels};
pub use time_control::{parse as parse_time_control, InitialTime, TimeControl, TimePeriod};
