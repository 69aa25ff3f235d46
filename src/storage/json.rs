//! JSON catalog backend.
//!
//! The catalog is parsed once and kept in memory. It is either the built-in
//! catalog compiled into the plugin or a user-supplied file configured through
//! `catalog_file`.

use crate::domain::error::{CatalogError, Result};
use crate::domain::Ide;
use crate::storage::backend::Catalog;
use crate::storage::models::{CatalogFile, CATALOG_VERSION};
use std::collections::HashSet;
use std::path::Path;

/// Built-in catalog shipped with the plugin.
const BUILTIN_CATALOG: &str = include_str!("../../catalog/ides.json");

/// In-memory JSON catalog.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`. It lives on the worker thread only.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    items: Vec<Ide>,
}

impl JsonCatalog {
    /// Loads the catalog compiled into the plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded document is malformed.
    pub fn builtin() -> Result<Self> {
        tracing::debug!("loading built-in catalog");
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not a valid catalog document (see [`JsonCatalog::from_json`])
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading catalog file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Catalog`] if:
    /// - The document is not valid JSON or is missing required fields
    /// - The format version is not supported
    /// - Two entries share an id
    /// - An entry has a blank title or category
    ///
    /// # Examples
    ///
    /// ```
    /// use jetcatalog::storage::{Catalog, JsonCatalog};
    ///
    /// let json = r#"{ "version": 1, "items": [
    ///     { "id": 1, "title": "Aqua", "category": "IDE" }
    /// ] }"#;
    /// let catalog = JsonCatalog::from_json(json)?;
    /// assert_eq!(catalog.all()?.len(), 1);
    /// # Ok::<(), jetcatalog::CatalogError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)
            .map_err(|e| CatalogError::Catalog(format!("failed to parse JSON: {e}")))?;

        if file.version != CATALOG_VERSION {
            return Err(CatalogError::Catalog(format!(
                "unsupported catalog version {} (expected {CATALOG_VERSION})",
                file.version
            )));
        }

        let mut seen = HashSet::with_capacity(file.items.len());
        let mut items = Vec::with_capacity(file.items.len());

        for record in file.items {
            if !seen.insert(record.id) {
                return Err(CatalogError::Catalog(format!("duplicate id {}", record.id)));
            }
            if record.title.trim().is_empty() || record.category.trim().is_empty() {
                return Err(CatalogError::Catalog(format!(
                    "entry {} needs a title and a category",
                    record.id
                )));
            }
            items.push(Ide::from(record));
        }

        tracing::debug!(item_count = items.len(), "catalog parsed");
        Ok(Self { items })
    }
}

impl Catalog for JsonCatalog {
    fn all(&self) -> Result<Vec<Ide>> {
        let _span = tracing::debug_span!("json_catalog_all").entered();
        Ok(self.items.clone())
    }
}
