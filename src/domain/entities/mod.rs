//! Domain entities
//!
//! - `Order` / `LineItem`: one customer order and its product references
//! - `Catalog` / `CatalogItem`: gift box contents by product id

mod catalog;
mod order;

pub use catalog::{Catalog, CatalogItem};
pub use order::{LineItem, Order};
