//! Configuration management for Kanbanist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_DIR_NAME, COLUMN_DEFAULT_WIDTH, COLUMN_MAX_WIDTH, COLUMN_MIN_WIDTH, CONFIG_GENERATED, DOUBLE_TAP_DELAY_MS,
    DRAG_THRESHOLD, LONG_PRESS_DELAY_MS, STORAGE_FILE_NAME,
};
use crate::drag::GestureConfig;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub drag: DragConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// View to open on startup: "boards" or "calendar"
    pub default_view: String,
    /// Enable mouse support (required for drag-and-drop)
    pub mouse_enabled: bool,
    /// Column width in terminal cells
    pub column_width: u16,
}

/// Gesture recognition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Movement (cells) before a press becomes a drag
    pub threshold: f32,
    /// Double-tap window in milliseconds
    pub double_tap_ms: u64,
    /// Hold time in milliseconds before a press starts reordering
    pub long_press_ms: u64,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON store; empty means the platform data directory
    pub path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging to a file
    pub enabled: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_view: "boards".to_string(),
            mouse_enabled: true,
            column_width: COLUMN_DEFAULT_WIDTH,
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold: DRAG_THRESHOLD,
            double_tap_ms: DOUBLE_TAP_DELAY_MS,
            long_press_ms: LONG_PRESS_DELAY_MS,
        }
    }
}

impl DragConfig {
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            drag_threshold: self.threshold,
            double_tap_window: Duration::from_millis(self.double_tap_ms),
            long_press_delay: Duration::from_millis(self.long_press_ms),
        }
    }
}

impl StorageConfig {
    /// Configured store path, or `<data_dir>/kanbanist/storage.json`
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if !self.path.trim().is_empty() {
            return Ok(PathBuf::from(self.path.trim()));
        }
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(STORAGE_FILE_NAME))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("kanbanist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join(APP_DIR_NAME).join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.column_width < COLUMN_MIN_WIDTH || self.ui.column_width > COLUMN_MAX_WIDTH {
            anyhow::bail!(
                "column_width must be between {} and {} columns, got {}",
                COLUMN_MIN_WIDTH,
                COLUMN_MAX_WIDTH,
                self.ui.column_width
            );
        }

        let valid_views = ["boards", "calendar"];
        if !valid_views.contains(&self.ui.default_view.as_str()) {
            anyhow::bail!(
                "default_view must be one of {}, got '{}'",
                valid_views.join(", "),
                self.ui.default_view
            );
        }

        if !self.drag.threshold.is_finite() || self.drag.threshold < 0.0 {
            anyhow::bail!("drag threshold must be a non-negative number, got {}", self.drag.threshold);
        }

        if self.drag.double_tap_ms == 0 || self.drag.double_tap_ms > 2000 {
            anyhow::bail!("double_tap_ms must be between 1 and 2000, got {}", self.drag.double_tap_ms);
        }

        if self.drag.long_press_ms <= self.drag.double_tap_ms {
            anyhow::bail!(
                "long_press_ms ({}) must be longer than double_tap_ms ({})",
                self.drag.long_press_ms,
                self.drag.double_tap_ms
            );
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Kanbanist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DATE_KEY_FORMAT)
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_DIR_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
