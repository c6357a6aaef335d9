//! Products domain module.
//!
//! This crate contains the catalog's business rules (submission validation,
//! search and sort semantics, listing outcomes), implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod listing;
pub mod product;
pub mod query;

pub use listing::Listing;
pub use product::{
    NewProduct, Product, MAX_DESCRIPTION_LEN, MAX_IMAGE_LEN, MAX_NAME_LEN, MAX_URL_LEN,
};
pub use query::{sort_by_name, CatalogQuery, SearchTerm};
