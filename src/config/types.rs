//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BoxpickResult;

use super::loader::{self, ConfigWarning};

/// Data source locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding `orders.json` and `catalog.json`
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Pick-list defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickConfig {
    /// Date shown when none is selected, "YYYY-MM-DD"
    #[serde(default = "default_date")]
    pub default_date: String,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            default_date: default_date(),
        }
    }
}

fn default_date() -> String {
    "2024-01-15".to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure (`boxpick.toml`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub pick: PickConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BoxpickResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> BoxpickResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the project config if present, else defaults, with
    /// `BOXPICK_*` environment overrides applied either way.
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Like [`Config::load_or_default`], but also surfaces unknown-key
    /// warnings from the project config.
    pub fn load_or_default_with_warnings(
        project_root: Option<&Path>,
    ) -> (Self, Vec<ConfigWarning>) {
        loader::load_or_default_with_warnings(project_root)
    }
}
