//! Catalog backend abstraction.
//!
//! This module defines the [`Catalog`] trait that abstracts over where catalog
//! entries come from. The worker only talks to this trait, so the built-in
//! catalog and a user-supplied file are interchangeable.

use crate::domain::error::Result;
use crate::domain::Ide;

/// Read-only source of catalog entries.
///
/// Implementations must return entries in a stable display order; both
/// [`Catalog::all`] and [`Catalog::search`] preserve that order.
///
/// # Implementations
///
/// - [`JsonCatalog`](crate::storage::JsonCatalog): built-in or file-backed JSON catalog
///
/// # Examples
///
/// ```
/// use jetcatalog::storage::{Catalog, JsonCatalog};
///
/// let catalog = JsonCatalog::builtin()?;
/// let everything = catalog.all()?;
/// assert!(!everything.is_empty());
/// # Ok::<(), jetcatalog::CatalogError>(())
/// ```
pub trait Catalog: Send {
    /// Returns every entry in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read.
    fn all(&self) -> Result<Vec<Ide>>;

    /// Returns the entries whose title matches `query`.
    ///
    /// A blank query matches everything. See [`crate::storage::search`] for the
    /// matching rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read.
    fn search(&self, query: &str) -> Result<Vec<Ide>> {
        Ok(super::search::filter_by_query(self.all()?, query))
    }

    /// Returns the distinct categories of the whole catalog in first-appearance order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing data cannot be read.
    fn categories(&self) -> Result<Vec<String>> {
        let mut seen: Vec<String> = Vec::new();
        for ide in self.all()? {
            if !seen.contains(&ide.category) {
                seen.push(ide.category);
            }
        }
        Ok(seen)
    }
}
