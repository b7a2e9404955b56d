//! Boxpick - warehouse pick-list aggregator for gift-box orders
//!
//! Boxpick consolidates per-customer gift-box orders into the list of
//! physical items warehouse staff must retrieve for a given date. Orders and
//! the box catalog are loaded from JSON files once at startup; the
//! aggregation itself is a pure, deterministic function.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Catalog, CatalogItem, LineItem, Order};
pub use domain::ports::{CatalogSource, OrderSource};
pub use domain::services::{build_pick_list, order_dates, PickList, PickListEntry};
pub use error::{BoxpickError, BoxpickResult};
pub use infrastructure::{JsonCatalogSource, JsonOrderSource};
