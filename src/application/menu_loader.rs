//! Loading menu trees from TOML files.
//!
//! Tables become branches in document order, strings and integers become leaves:
//!
//! ```toml
//! [Opponent]
//! "Vs self" = -1
//! "Vs CPU black" = 1
//!
//! [Clock.Blitz]
//! "G/5" = "300"
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, TomlFile};
use crate::domain::{menu, BranchBuilder, Node};

/// Where the menu tree comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuSource {
    /// The menu compiled into the crate.
    #[default]
    Shipped,
    /// A TOML menu file.
    File(PathBuf),
}

impl MenuSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(MenuSource::Shipped, MenuSource::File)
    }

    /// Load the tree; the shipped menu is borrowed, files are owned.
    pub fn load(&self) -> ApplicationResult<Cow<'static, Node>> {
        match self {
            MenuSource::Shipped => Ok(Cow::Borrowed(menu()?)),
            MenuSource::File(path) => load_menu(path).map(Cow::Owned),
        }
    }
}

/// Read and convert a TOML menu file.
#[instrument(level = "debug")]
pub fn load_menu(path: &Path) -> ApplicationResult<Node> {
    let content = TomlFile::Menu.read(path)?;
    parse_menu(&content, path)
}

/// Convert TOML menu text; `path` is only used in error messages.
pub fn parse_menu(content: &str, path: &Path) -> ApplicationResult<Node> {
    let table: toml::Table = TomlFile::Menu.parse(content, path)?;
    let node = table_to_builder(&table, path, "")?.build()?;
    debug!(entries = table.len(), "menu loaded");
    Ok(node)
}

fn table_to_builder(table: &toml::Table, path: &Path, prefix: &str) -> ApplicationResult<BranchBuilder> {
    let mut builder = BranchBuilder::new();
    for (key, value) in table {
        let qualified = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        builder = match value {
            toml::Value::String(s) => builder.leaf(key.as_str(), s.as_str()),
            toml::Value::Integer(n) => builder.leaf(key.as_str(), *n),
            toml::Value::Table(t) => builder.branch(key.as_str(), table_to_builder(t, path, &qualified)?),
            other => {
                return Err(ApplicationError::MenuFormat {
                    path: path.to_path_buf(),
                    message: format!(
                        "'{}' has unsupported {} value",
                        qualified,
                        other.type_str()
                    ),
                })
            }
        };
    }
    Ok(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{resolve, DomainError};

    #[test]
    fn test_parse_menu_keeps_document_order() {
        let content = r#"
zeta = "z"
alpha = 1

[mid]
b = "2"
a = "1"
"#;
        let node = parse_menu(content, Path::new("menu.toml")).unwrap();
        let labels: Vec<_> = node.as_branch().unwrap().labels().collect();
        assert_eq!(labels, vec!["zeta", "alpha", "mid"]);
        assert_eq!(resolve(&node, &[2, 1]).unwrap(), &Node::from("1"));
    }

    #[test]
    fn test_parse_menu_rejects_float() {
        let result = parse_menu("[a]\nb = 1.5\n", Path::new("menu.toml"));
        match result {
            Err(ApplicationError::MenuFormat { message, .. }) => {
                assert!(message.contains("a.b"), "{}", message)
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_parse_menu_rejects_oversized_branch() {
        let content: String = (0..11).map(|i| format!("k{} = {}\n", i, i)).collect();
        let result = parse_menu(&content, Path::new("menu.toml"));
        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::TooManyEntries { count: 11, .. }))
        ));
    }

    #[test]
    fn test_shipped_source_borrows_static_menu() {
        let tree = MenuSource::Shipped.load().unwrap();
        assert!(matches!(tree, Cow::Borrowed(_)));
    }
}
