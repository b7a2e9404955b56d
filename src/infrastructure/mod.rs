//! Infrastructure layer - concrete implementations of the domain ports

pub mod json;

pub use json::{JsonCatalogSource, JsonOrderSource};
