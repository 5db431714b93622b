//! Configuration loading and management
//!
//! Handles parsing of `.weekflow.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::layout::{self, LayoutMetrics};
use crate::window::WeekStart;

pub const CONFIG_FILE: &str = ".weekflow.toml";
const USER_CONFIG_FILE: &str = "config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Row metrics in pixels
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
}

/// Layout-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_task_bar_height")]
    pub task_bar_height: u32,

    #[serde(default = "default_task_spacing")]
    pub task_spacing: u32,

    #[serde(default = "default_header_height")]
    pub header_height: u32,

    #[serde(default = "default_project_padding")]
    pub project_padding: u32,

    #[serde(default = "default_project_border")]
    pub project_border: u32,

    #[serde(default = "default_project_gap")]
    pub project_gap: u32,

    #[serde(default = "default_task_container_padding")]
    pub task_container_padding: u32,

    /// Height of a row with nothing in it
    #[serde(default = "default_empty_row_height")]
    pub empty_row_height: u32,

    /// Projects past this many are dropped from a row
    #[serde(default = "default_max_projects_per_row")]
    pub max_projects_per_row: usize,
}

fn default_task_bar_height() -> u32 {
    layout::TASK_BAR_HEIGHT
}

fn default_task_spacing() -> u32 {
    layout::TASK_SPACING
}

fn default_header_height() -> u32 {
    layout::HEADER_HEIGHT
}

fn default_project_padding() -> u32 {
    layout::PROJECT_PADDING
}

fn default_project_border() -> u32 {
    layout::PROJECT_BORDER
}

fn default_project_gap() -> u32 {
    layout::PROJECT_GAP
}

fn default_task_container_padding() -> u32 {
    layout::TASK_CONTAINER_PADDING
}

fn default_empty_row_height() -> u32 {
    layout::EMPTY_ROW_HEIGHT
}

fn default_max_projects_per_row() -> usize {
    layout::MAX_PROJECTS_PER_ROW
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            task_bar_height: default_task_bar_height(),
            task_spacing: default_task_spacing(),
            header_height: default_header_height(),
            project_padding: default_project_padding(),
            project_border: default_project_border(),
            project_gap: default_project_gap(),
            task_container_padding: default_task_container_padding(),
            empty_row_height: default_empty_row_height(),
            max_projects_per_row: default_max_projects_per_row(),
        }
    }
}

impl LayoutConfig {
    pub fn metrics(&self) -> LayoutMetrics {
        LayoutMetrics {
            task_bar_height: self.task_bar_height,
            task_spacing: self.task_spacing,
            header_height: self.header_height,
            project_padding: self.project_padding,
            project_border: self.project_border,
            project_gap: self.project_gap,
            task_container_padding: self.task_container_padding,
            empty_row_height: self.empty_row_height,
            max_projects_per_row: self.max_projects_per_row,
        }
    }

    fn validate(&self) -> crate::error::Result<()> {
        for (field, value) in [
            ("layout.task_bar_height", self.task_bar_height),
            ("layout.header_height", self.header_height),
            ("layout.empty_row_height", self.empty_row_height),
        ] {
            if value == 0 {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "{field} must be > 0"
                )));
            }
        }
        if self.max_projects_per_row == 0 {
            return Err(crate::error::Error::InvalidConfig(
                "layout.max_projects_per_row must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// First day of the displayed week
    #[serde(default)]
    pub week_starts_on: WeekStart,
}

impl Config {
    /// Load configuration from a `.weekflow.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_else(|err| {
                tracing::warn!(path = %config_path.display(), error = %err, "using default config");
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Directory config first, then the per-user config, then defaults
    pub fn discover(dir: &Path) -> Self {
        if dir.join(CONFIG_FILE).exists() {
            return Self::load_from_dir(dir);
        }
        match user_config_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), error = %err, "using default config");
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.layout.validate()?;
        Ok(())
    }
}

/// Per-user config file location, e.g. `~/.config/weekflow/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "weekflow")
        .map(|dirs| dirs.config_dir().join(USER_CONFIG_FILE))
}
