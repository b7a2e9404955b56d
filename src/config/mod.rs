//! Configuration module for Boxpick
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BOXPICK_*)
//! 3. Project config (boxpick.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE};
pub use types::{ColorMode, Config, DataConfig, OutputConfig, PickConfig};
