//! Application layer: menu sources and error context
//!
//! This layer connects the pure domain logic to files and configuration.

pub mod error;
pub mod menu_loader;
pub mod toml_file;

pub use error::{ApplicationError, ApplicationResult};
pub use menu_loader::{load_menu, parse_menu, MenuSource};
pub use toml_file::TomlFile;
