//! Catalog layer backing the data source worker.
//!
//! # Modules
//!
//! - `backend`: [`Catalog`] trait abstraction
//! - `json`: JSON catalog implementation (built-in or file-backed)
//! - `search`: title matching shared by all backends
//! - `models`: on-disk record types separate from domain models

pub mod backend;
pub mod json;
pub mod models;
pub mod search;

pub use backend::Catalog;
pub use json::JsonCatalog;
pub use models::{CatalogFile, IdeRecord};
