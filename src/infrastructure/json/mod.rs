//! JSON-file implementations of the data source ports

mod catalog;
mod orders;

pub use catalog::JsonCatalogSource;
pub use orders::JsonOrderSource;
