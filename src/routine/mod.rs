// Routine domain: products, catalog, clock rules, completion tracking

pub mod catalog;
pub mod clock;
pub mod product;
pub mod tracker;

pub use catalog::{Catalog, CatalogError};
pub use product::{Category, Period, Product};
pub use tracker::CompletionTracker;
