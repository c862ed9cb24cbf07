//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/chessmenu/chessmenu.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `CHESSMENU_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, MenuSource, TomlFile};
use crate::domain::{DomainResult, TimeControl};

pub const DEFAULT_TIME_CONTROL: &str = "900+10";

/// Unified configuration for chessmenu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// TOML menu file replacing the shipped menu
    pub menu_file: Option<PathBuf>,
    /// Tag used when `tc` is run without one
    pub default_time_control: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            menu_file: None,
            default_time_control: DEFAULT_TIME_CONTROL.into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub menu_file: Option<PathBuf>,
    pub default_time_control: Option<String>,
}

/// Get the XDG config directory for chessmenu.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "chessmenu").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("chessmenu.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}`; unresolvable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    TomlFile::Settings.load(path)
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional config file given on the command line; must exist
    pub fn load(local: Option<&Path>) -> ApplicationResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config, if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        // 3. Explicit config file
        if let Some(path) = local {
            debug!("local config: {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        current.expand_paths();
        current.validate()?;
        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            menu_file: overlay
                .menu_file
                .clone()
                .or_else(|| self.menu_file.clone()),
            default_time_control: overlay
                .default_time_control
                .clone()
                .unwrap_or_else(|| self.default_time_control.clone()),
        }
    }

    /// Apply CHESSMENU_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("CHESSMENU"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("menu_file") {
            settings.menu_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("default_time_control") {
            settings.default_time_control = val;
        }

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        if let Some(menu_file) = &self.menu_file {
            let expanded = expand_env_vars(menu_file.to_string_lossy().as_ref());
            self.menu_file = Some(PathBuf::from(expanded));
        }
    }

    /// Reject a default tag that would fail at use time.
    fn validate(&self) -> ApplicationResult<()> {
        self.time_control().map_err(|e| ApplicationError::Config {
            message: format!("default_time_control: {}", e),
        })?;
        Ok(())
    }

    pub fn time_control(&self) -> DomainResult<TimeControl> {
        self.default_time_control.parse()
    }

    pub fn menu_source(&self) -> MenuSource {
        MenuSource::from_option(self.menu_file.clone())
    }

    /// Serialize the merged settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_with_overlay_wins() {
        let base = Settings::default();
        let overlay = RawSettings {
            menu_file: Some(PathBuf::from("/tmp/menu.toml")),
            default_time_control: None,
        };
        let merged = base.merge_with(&overlay);
        assert_eq!(merged.menu_file, Some(PathBuf::from("/tmp/menu.toml")));
        assert_eq!(merged.default_time_control, DEFAULT_TIME_CONTROL);
    }

    #[test]
    fn test_validate_rejects_malformed_default() {
        let settings = Settings {
            default_time_control: "fast".into(),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ApplicationError::Config { .. })
        ));
    }

    #[test]
    fn test_expand_env_vars() {
        std::env::set_var("CHESSMENU_TEST_DIR", "/opt/chess");
        assert_eq!(
            expand_env_vars("$CHESSMENU_TEST_DIR/menu.toml"),
            "/opt/chess/menu.toml"
        );
        std::env::remove_var("CHESSMENU_TEST_DIR");
    }
}
