//! Catalog adapter.
//!
//! Turns a raw, loosely-typed product snapshot into canonical [`Product`]
//! values sorted by name. All knowledge of the raw record shape lives in
//! [`raw`]; nothing downstream inspects raw fields.

pub mod catalog;
pub mod error;
pub mod product;
pub mod raw;

pub use catalog::{Catalog, load_catalog, load_catalog_str};
pub use error::CatalogLoadError;
pub use product::{DEFAULT_CATEGORY, Product};
pub use raw::RawSource;
