//! Integration tests for Settings loading and menu file sources.
//!
//! These tests only use explicit config files in temp directories; they do not set
//! CHESSMENU_* variables, so they are unaffected by parallel test execution.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use chessmenu::application::{ApplicationError, MenuSource};
use chessmenu::config::{Settings, DEFAULT_TIME_CONTROL};
use chessmenu::domain::{resolve, Node, TimePeriod};

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write file");
    path
}

// ============================================================
// Settings::load()
// ============================================================

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let settings = Settings::load(None).expect("load settings");
    assert_eq!(settings.menu_source(), MenuSource::Shipped);
    assert_eq!(settings.default_time_control, DEFAULT_TIME_CONTROL);
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = write_file(
        &dir,
        "chessmenu.toml",
        r#"
default_time_control = "40/7200:1800"
menu_file = "/srv/menus/club.toml"
"#,
    );

    let settings = Settings::load(Some(config.as_path())).expect("load settings");

    assert_eq!(
        settings.time_control().unwrap().periods(),
        &[TimePeriod::new(7200, 0, 40), TimePeriod::new(1800, 0, 0)]
    );
    assert_eq!(
        settings.menu_source(),
        MenuSource::File(PathBuf::from("/srv/menus/club.toml"))
    );
}

#[test]
fn given_malformed_default_tag_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "chessmenu.toml", "default_time_control = \"blitz\"\n");

    let result = Settings::load(Some(config.as_path()));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_missing_local_config_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load(Some(dir.path().join("absent.toml").as_path()));
    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_settings_when_serializing_then_toml_reloads_equal() {
    let dir = TempDir::new().unwrap();
    let settings = Settings {
        menu_file: Some(PathBuf::from("/srv/menu.toml")),
        default_time_control: "300+3".into(),
    };
    let config = write_file(&dir, "out.toml", &settings.to_toml().unwrap());

    assert_eq!(Settings::load(Some(config.as_path())).unwrap(), settings);
}

// ============================================================
// MenuSource::File
// ============================================================

#[test]
fn given_menu_file_when_loading_source_then_resolves_in_document_order() {
    let dir = TempDir::new().unwrap();
    let menu = write_file(
        &dir,
        "menu.toml",
        r#"
["Board theme"]
Walnut = "walnut"

["Time control"]
"G/10" = "600"
Bullet = { "G/1" = "60", "G/2+1" = "120+1" }
"#,
    );

    let tree = MenuSource::File(menu).load().expect("load menu");

    assert_eq!(resolve(&tree, &[1, 1, 1]).unwrap(), &Node::from("120+1"));
    assert_eq!(resolve(&tree, &[0, 0]).unwrap(), &Node::from("walnut"));
}

#[test]
fn given_missing_menu_file_when_loading_source_then_operation_failed() {
    let dir = TempDir::new().unwrap();
    let result = MenuSource::File(dir.path().join("nope.toml")).load();
    assert!(matches!(
        result,
        Err(ApplicationError::OperationFailed { .. })
    ));
}

#[test]
fn given_invalid_toml_when_loading_source_then_menu_format_error() {
    let dir = TempDir::new().unwrap();
    let menu = write_file(&dir, "menu.toml", "[unterminated\n");
    let result = MenuSource::File(menu).load();
    assert!(matches!(result, Err(ApplicationError::MenuFormat { .. })));
}
