//! Error types for Boxpick
//!
//! Uses `thiserror` for library errors. The aggregation core itself never
//! fails; every variant here belongs to the edges (data loading, config,
//! argument validation).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Boxpick operations
pub type BoxpickResult<T> = Result<T, BoxpickError>;

/// Main error type for Boxpick operations
#[derive(Error, Debug)]
pub enum BoxpickError {
    /// Data file could not be found
    #[error("data file not found: {path}")]
    DataFileNotFound { path: PathBuf },

    /// Data file exists but is not valid JSON for the expected shape
    #[error("invalid JSON in {file}: {message}")]
    InvalidJson { file: PathBuf, message: String },

    /// Config file exists but is not valid TOML for the expected shape
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A date argument that is not in YYYY-MM-DD form
    #[error("invalid date '{value}' - expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
