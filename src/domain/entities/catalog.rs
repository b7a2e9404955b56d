//! Catalog entity - maps each sellable gift box to its physical contents
//!
//! A product id that is not in the catalog is a valid, non-error outcome;
//! callers must treat a missing entry as "contributes nothing".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One physical item inside a gift box, with how many units one box holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub product_name: String,
    pub quantity: u32,
}

impl CatalogItem {
    pub fn new(product_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
        }
    }
}

/// Mapping from product id to the ordered list of items one box contains.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(HashMap<String, Vec<CatalogItem>>);

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents of one unit of `product_id`, or `None` if the catalog has
    /// no entry for it.
    pub fn contents(&self, product_id: &str) -> Option<&[CatalogItem]> {
        self.0.get(product_id).map(Vec::as_slice)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.0.contains_key(product_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<CatalogItem>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<CatalogItem>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
