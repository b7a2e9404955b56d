//! Domain ports - abstractions over the external data collaborators

mod catalog_source;
mod order_source;

pub use catalog_source::CatalogSource;
pub use order_source::OrderSource;
