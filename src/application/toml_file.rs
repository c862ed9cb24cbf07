//! Reading TOML files for settings and menus.
//!
//! Both file kinds go through the same read-then-parse steps; they only differ in the
//! error each step reports.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::trace;

use crate::application::{ApplicationError, ApplicationResult};

/// What a TOML file holds, deciding how its failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TomlFile {
    /// Layered settings; every failure is a config error.
    Settings,
    /// A menu tree; unreadable files are I/O failures, bad content is a menu format error.
    Menu,
}

impl TomlFile {
    /// Read and deserialize `path`.
    pub fn load<T: DeserializeOwned>(self, path: &Path) -> ApplicationResult<T> {
        let content = self.read(path)?;
        self.parse(&content, path)
    }

    pub fn read(self, path: &Path) -> ApplicationResult<String> {
        trace!(kind = ?self, path = %path.display(), "read");
        std::fs::read_to_string(path).map_err(|e| match self {
            TomlFile::Settings => ApplicationError::Config {
                message: format!("read {}: {}", path.display(), e),
            },
            TomlFile::Menu => ApplicationError::OperationFailed {
                context: format!("read menu: {}", path.display()),
                source: Box::new(e),
            },
        })
    }

    /// Deserialize `content`; `path` is only used in error messages.
    pub fn parse<T: DeserializeOwned>(self, content: &str, path: &Path) -> ApplicationResult<T> {
        toml::from_str(content).map_err(|e| match self {
            TomlFile::Settings => ApplicationError::Config {
                message: format!("parse {}: {}", path.display(), e),
            },
            TomlFile::Menu => ApplicationError::MenuFormat {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_settings_file_is_config_error() {
        let result: ApplicationResult<toml::Table> =
            TomlFile::Settings.load(Path::new("/nonexistent/chessmenu.toml"));
        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn test_missing_menu_file_is_operation_failed() {
        let result: ApplicationResult<toml::Table> =
            TomlFile::Menu.load(Path::new("/nonexistent/menu.toml"));
        match result {
            Err(ApplicationError::OperationFailed { context, .. }) => {
                assert_eq!(context, "read menu: /nonexistent/menu.toml")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_bad_menu_content_is_menu_format_error() {
        let result: ApplicationResult<toml::Table> =
            TomlFile::Menu.parse("= broken", Path::new("menu.toml"));
        assert!(matches!(result, Err(ApplicationError::MenuFormat { .. })));
    }
}
