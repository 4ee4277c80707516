#![warn(rust_2024_compatibility, clippy::all)]

//! File-backed product catalog.
//!
//! [`CatalogStore`] keeps an ordered list of [`Product`]s in memory and
//! rewrites a JSON backing file after every accepted mutation. Candidates
//! pass through [`ProductDraft::check`] and a unique-code check first.

pub mod config;
pub mod error;
pub mod product;
pub mod store;

pub use config::{CatalogConfig, ConfigError, StoreSettings};
pub use error::{CatalogError, Result};
pub use product::{Product, ProductDraft};
pub use store::CatalogStore;
