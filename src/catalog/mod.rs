//! Food catalog module
//!
//! Static, read-only reference foods.

pub mod store;

pub use store::{CatalogError, CatalogResult, CatalogSource, FoodCatalog};
