//! JSON-file catalog source
//!
//! Reads the gift-box catalog from a `catalog.json` file: a top-level
//! object keyed by product id, each value an array of catalog items.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Catalog;
use crate::domain::ports::CatalogSource;
use crate::error::{BoxpickError, BoxpickResult};

/// Catalog source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    path: PathBuf,
}

impl JsonCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Conventional location inside a data directory.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join("catalog.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> BoxpickResult<Catalog> {
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
