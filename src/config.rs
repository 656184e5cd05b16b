//! Configuration management for gridline
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_CELL_WIDTH_PX, DRAG_ACTIVATION_DISTANCE_PX, LAYOUT_SCHEMA_VERSION, MAX_CELL_WIDTH_PX,
    MAX_COLUMN_WIDTH_PX, MIN_COLUMN_WIDTH_PX,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub layout: LayoutConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (drag, resize and click handling)
    pub mouse_enabled: bool,
    /// How many pixels one terminal cell stands for
    pub cell_width_px: u32,
    /// Glyph theme for grips, eyes and checkboxes
    pub icon_theme: IconTheme,
}

/// Column layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Columns are never narrower than this
    pub min_column_width_px: u32,
    /// Pointer travel needed before a header press becomes a drag
    pub drag_activation_px: u32,
    /// Suffix of the persistence keys; bump it to discard old layouts
    pub schema_version: String,
}

/// Preference storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the layout slots (defaults to the XDG data dir)
    pub directory: Option<PathBuf>,
    /// Flush writes from a background task instead of inline
    pub write_behind: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-app log panel
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
            icon_theme: IconTheme::default(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_column_width_px: MIN_COLUMN_WIDTH_PX,
            drag_activation_px: DRAG_ACTIVATION_DISTANCE_PX,
            schema_version: LAYOUT_SCHEMA_VERSION.to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: None,
            write_behind: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level, falling back to `Info` for unknown values
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
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
        let current_dir_config = PathBuf::from("gridline.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("gridline").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.cell_width_px == 0 || self.ui.cell_width_px > MAX_CELL_WIDTH_PX {
            anyhow::bail!(
                "cell_width_px must be between 1 and {}, got {}",
                MAX_CELL_WIDTH_PX,
                self.ui.cell_width_px
            );
        }

        if self.layout.min_column_width_px == 0 || self.layout.min_column_width_px > MAX_COLUMN_WIDTH_PX {
            anyhow::bail!(
                "min_column_width_px must be between 1 and {}, got {}",
                MAX_COLUMN_WIDTH_PX,
                self.layout.min_column_width_px
            );
        }

        if self.layout.schema_version.trim().is_empty() {
            anyhow::bail!("schema_version cannot be empty");
        }

        if self
            .layout
            .schema_version
            .chars()
            .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '-'))
        {
            anyhow::bail!(
                "schema_version '{}' may only contain letters, digits, '-' and '_'",
                self.layout.schema_version
            );
        }

        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("Invalid logging level '{}'", self.logging.level);
        }

        Ok(())
    }

    /// Directory holding the persisted layout slots
    pub fn storage_dir(&self) -> Result<PathBuf> {
        match &self.storage.directory {
            Some(dir) => Ok(dir.clone()),
            None => Self::get_data_dir(),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# gridline configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("gridline"))
    }

    /// Get the XDG data directory path
    pub fn get_data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("gridline"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
