//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use tess4d::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("T4D_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("T4D_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_numeric_section() {
    std::env::set_var("T4D_VIEW__INITIAL_SCALE", "250.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.view.initial_scale, 250.0);
    std::env::remove_var("T4D_VIEW__INITIAL_SCALE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("T4D_WINDOW__TITLE");

    // config/default.toml ships with the repository and mirrors the
    // built-in defaults
    let config = AppConfig::load().unwrap();
    assert_eq!(config.view.zoom_step, 1.1);
    assert_eq!(config.view.fov_factor, 7.0);
}
