//! Domain layer for the JetCatalog plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or infrastructure concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`ide`]: Catalog entry and favorite models
//!
//! # Examples
//!
//! ```
//! use jetcatalog::domain::{Favorite, Ide, Result};
//!
//! fn first_favorite() -> Result<Favorite> {
//!     Ok(Favorite::from(Ide::new(1, "GoLand", "Go IDE", "ide_goland", "IDE")))
//! }
//! # assert_eq!(first_favorite().unwrap().id(), 1);
//! ```

pub mod error;
pub mod ide;

pub use error::{CatalogError, Result};
pub use ide::{Favorite, Ide};
