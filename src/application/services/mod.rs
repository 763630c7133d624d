//! Application services.

pub mod catalog_service;
pub mod embed_service;

pub use catalog_service::{CatalogEntry, CatalogService};
