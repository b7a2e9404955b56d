//! JSON-file order source
//!
//! Reads the order feed from an `orders.json` file: a top-level array of
//! orders in the upstream camelCase shape.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Order;
use crate::domain::ports::OrderSource;
use crate::error::{BoxpickError, BoxpickResult};

/// Order source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonOrderSource {
    path: PathBuf,
}

impl JsonOrderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional location inside a data directory.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("orders.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderSource for JsonOrderSource {
    fn load(&self) -> BoxpickResult<Vec<Order>> {
        if !self.path.exists() {
            return Err(BoxpickError::DataFileNotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| BoxpickError::InvalidJson {
            file: self.path.clone(),
            message: e.to_string(),
        })
    }
}
