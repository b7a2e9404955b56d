//! CatalogSource port - abstraction for loading the product catalog

use crate::domain::entities::Catalog;
use crate::error::BoxpickResult;

/// Abstract source of the gift-box catalog.
///
/// Loaded once at process start; the domain only needs `O(1)` key lookup
/// with "not found" as a valid outcome.
pub trait CatalogSource {
    fn load(&self) -> BoxpickResult<Catalog>;
}
