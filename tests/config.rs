use std::time::Duration;

use kanbanist::config::Config;
use kanbanist::constants::{DOUBLE_TAP_DELAY_MS, DRAG_THRESHOLD, LONG_PRESS_DELAY_MS};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_view, "boards");
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.drag.threshold, DRAG_THRESHOLD);
    assert_eq!(config.drag.double_tap_ms, DOUBLE_TAP_DELAY_MS);
    assert_eq!(config.drag.long_press_ms, LONG_PRESS_DELAY_MS);
    assert!(config.storage.path.is_empty());
    assert!(!config.logging.enabled);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid column width should fail
    config.ui.column_width = 10;
    assert!(config.validate().is_err());

    // Reset and test unknown view
    config = Config::default();
    config.ui.default_view = "timeline".to_string();
    assert!(config.validate().is_err());

    // Long-press must outlast the double-tap window
    config = Config::default();
    config.drag.long_press_ms = config.drag.double_tap_ms;
    assert!(config.validate().is_err());

    config = Config::default();
    config.drag.threshold = -1.0;
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_view = \"boards\""));
    assert!(toml_str.contains("double_tap_ms = 300"));
    assert!(toml_str.contains("long_press_ms = 500"));
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[drag]
threshold = 2.0

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.drag.threshold, 2.0);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert_eq!(config.drag.double_tap_ms, DOUBLE_TAP_DELAY_MS);
    assert_eq!(config.ui.default_view, "boards");
    assert!(config.ui.mouse_enabled);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_view, default_config.ui.default_view);
    assert_eq!(config.ui.column_width, default_config.ui.column_width);
    assert_eq!(config.drag.long_press_ms, default_config.drag.long_press_ms);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_gesture_config_from_drag_settings() {
    let mut config = Config::default();
    config.drag.threshold = 4.0;
    config.drag.double_tap_ms = 250;
    config.drag.long_press_ms = 700;

    let gestures = config.drag.gesture_config();
    assert_eq!(gestures.drag_threshold, 4.0);
    assert_eq!(gestures.double_tap_window, Duration::from_millis(250));
    assert_eq!(gestures.long_press_delay, Duration::from_millis(700));
}

#[test]
fn test_storage_path_override() {
    let mut config = Config::default();
    config.storage.path = "/tmp/boards.json".to_string();
    assert_eq!(
        config.storage.resolve_path().unwrap(),
        std::path::PathBuf::from("/tmp/boards.json")
    );
}

#[test]
fn test_generate_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Kanbanist Configuration File"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.ui.default_view, "boards");
    assert_eq!(loaded.drag.long_press_ms, LONG_PRESS_DELAY_MS);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ncolumn_width = 200\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());
}
