//! Configuration management for flex-spacer.
//!
//! Configuration lives in `~/.flex-spacer/config.toml` and covers the
//! ellipsis row defaults, the pixel-to-cell scale, the UI theme and logging.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ellipsis::{BETWEEN_ITEMS_GAP, MAX_VISIBLE_ITEMS};
use crate::style::{CellScale, Gap, DEFAULT_PX_PER_CELL};
use crate::ui::theme::{Theme, ThemeColors, ThemePreset};

/// Main configuration structure.
///
/// Every option falls back to a default when missing from the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ellipsis_row: EllipsisRowConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults for ellipsis rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipsisRowConfig {
    /// Gap between items: a number, a length string, `[vertical, horizontal]`
    /// or `{ horizontal, vertical }`
    #[serde(default = "default_gap")]
    pub gap: Gap,

    /// Maximum visible items, capped at 50
    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Pixels per terminal cell, used for numeric gaps and `px` lengths
    #[serde(default = "default_px_per_cell")]
    pub px_per_cell: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Options: "dark", "light", "custom"
    #[serde(default)]
    pub theme: ThemePreset,

    /// Color overrides, used by the "custom" theme
    #[serde(default)]
    pub colors: Option<ThemeColors>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Log file name inside the config directory
    #[serde(default = "default_log_file")]
    pub file: String,
}

// Default value functions for serde
fn default_gap() -> Gap {
    Gap::from(BETWEEN_ITEMS_GAP)
}

fn default_max_items() -> usize {
    MAX_VISIBLE_ITEMS
}

fn default_px_per_cell() -> f64 {
    DEFAULT_PX_PER_CELL
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "flex-spacer.log".to_string()
}

impl Default for EllipsisRowConfig {
    fn default() -> Self {
        Self {
            gap: default_gap(),
            max_items: default_max_items(),
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            px_per_cell: default_px_per_cell(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: default_log_file(),
        }
    }
}

const DEFAULT_CONFIG_TOML: &str = r#"# flex-spacer configuration file
# This file is automatically generated with default values.

[ellipsis_row]
# Gap between items. Accepts a number of pixels (8), a length ("1ch"),
# a [vertical, horizontal] pair or { horizontal = 8, vertical = 0 }
gap = 8

# Maximum number of visible items before the rest move into the popover.
# Values above 50 are treated as 50.
max_items = 50

[layout]
# Pixels per terminal cell, used to convert numeric gaps into cells
px_per_cell = 8.0

[ui]
# Color theme
# Options: "dark", "light", "custom"
theme = "dark"

# Colors used by the "custom" theme
# [ui.colors]
# primary = "cyan"
# background = "black"
# foreground = "white"
# border = "white"
# muted = "darkgray"

[logging]
# Log filter, overridden by RUST_LOG
filter = "info"

# Log file, relative to the configuration directory
file = "flex-spacer.log"
"#;

impl Config {
    /// Returns the path to the configuration directory (~/.flex-spacer/)
    pub fn config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;
        Ok(home_dir.join(".flex-spacer"))
    }

    /// Returns the path to the configuration file (~/.flex-spacer/config.toml)
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path of the log file
    pub fn log_file_path(&self) -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.file))
    }

    /// Loads configuration from the default location, creating it if missing.
    ///
    /// # Errors
    /// This function will return an error if:
    /// - Home directory cannot be determined
    /// - File I/O operations fail
    /// - TOML parsing fails
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from `path`, writing a commented default file if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or created.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path:?}"))?;

            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {path:?}"))?;

            Ok(config)
        } else {
            Self::create_default_config(path)?;
            Ok(Config::default())
        }
    }

    /// Writes the commented default configuration to `path`.
    ///
    /// # Errors
    /// Returns an error if directory creation or the write fails.
    pub fn create_default_config(path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        fs::write(path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write config file: {path:?}"))?;
        Ok(())
    }

    /// Saves the current configuration to the default location.
    ///
    /// # Errors
    /// Returns an error if the home directory is unknown or the write fails.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Serializes the configuration to TOML and writes it to `path`.
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation or the write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;

        let toml_string =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config to TOML")?;

        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file: {path:?}"))?;

        Ok(())
    }

    pub fn scale(&self) -> CellScale {
        CellScale::new(self.layout.px_per_cell)
    }

    /// The configured theme. Custom themes take their colors from `[ui.colors]`.
    pub fn theme(&self) -> Theme {
        match (self.ui.theme, &self.ui.colors) {
            (ThemePreset::Custom, Some(colors)) => Theme::custom(colors.clone()),
            (preset, _) => Theme::from_preset(preset),
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {dir:?}"))?;
        }
    }
    Ok(())
}
