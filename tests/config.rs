//! Configuration system tests
//!
//! Tests for config paths and loading/saving the YAML config.

use devbyte::config::AppConfig;
use devbyte::config_paths;
use devbyte::model::AppModel;
use devbyte::resizable::{Axis, PanelSpec};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("devbyte"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

#[test]
fn test_log_file_uses_prefix() {
    if let Some(path) = config_paths::log_file() {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with(config_paths::LOG_FILE_PREFIX));
    }
}

// ========================================================================
// App Config Tests
// ========================================================================

#[test]
fn test_defaults_match_chat_layout() {
    let config = AppConfig::default();
    assert_eq!(config.response_delay_ms, 1000);
    assert_eq!(config.split_axis, Axis::Horizontal);
    assert_eq!(config.chat_panel, PanelSpec::new(30.0, 30.0, 90.0));
    assert_eq!(config.preview_panel, PanelSpec::new(70.0, 30.0, 90.0));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = AppConfig {
        response_delay_ms: 20,
        split_axis: Axis::Vertical,
        preview_panel: PanelSpec::new(70.0, 25.0, 75.0),
        accent: "#FF8800".to_string(),
        ..AppConfig::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(AppConfig::load_from(&path), config);
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "split_axis: [not, an, axis").unwrap();

    assert_eq!(AppConfig::load_from(&path), AppConfig::default());
}

#[test]
fn test_loaded_values_are_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "handle_thickness: -4\nwindow_height: 0\n").unwrap();

    let config = AppConfig::load_from(&path);
    assert_eq!(config.handle_thickness, AppConfig::default().handle_thickness);
    assert_eq!(config.window_height, 1);
}

#[test]
fn test_loaded_panel_specs_drive_the_split() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "chat_panel:\n  default_size: 40\n  min_size: 20\npreview_panel:\n  default_size: 60\n",
    )
    .unwrap();

    let mut model = AppModel::new(AppConfig::load_from(&path), 1000, 800);
    model.set_preview_visible(true);
    assert_eq!(model.layout.sizes(), vec![40.0, 60.0]);
    assert_eq!(model.layout.panel(0).unwrap().min_size(), 20.0);
}

#[test]
fn test_partial_chat_panel_keeps_split_whole() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "chat_panel:\n  default_size: 50\n").unwrap();

    let config = AppConfig::load_from(&path);
    assert_eq!(config.chat_panel, PanelSpec::new(50.0, 30.0, 90.0));

    let mut model = AppModel::new(config, 1256, 800);
    model.set_preview_visible(true);
    assert!(model.layout.is_partitioned());
    assert_eq!(model.layout.sizes(), vec![50.0, 50.0]);

    let bounds = model.layout.bounds();
    let right = model
        .layout
        .layout()
        .last()
        .map(|child| child.rect.x + child.rect.width)
        .unwrap();
    assert!((right - (bounds.x + bounds.width)).abs() < 1e-6);
}

#[test]
fn test_font_path_is_optional() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");

    AppConfig::default().save_to(&path).unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(!saved.contains("font_path"));

    std::fs::write(&path, "font_path: /tmp/Mono.ttf\n").unwrap();
    let config = AppConfig::load_from(&path);
    assert_eq!(config.font_path.as_deref(), Some(std::path::Path::new("/tmp/Mono.ttf")));
}
