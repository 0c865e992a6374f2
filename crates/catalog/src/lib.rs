//! `stallfront-catalog` — product list and preview selection.

pub mod catalog;

pub use catalog::CatalogStore;
