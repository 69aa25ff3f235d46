//! Storage record models for the catalog file.
//!
//! These types mirror the on-disk JSON layout and are kept separate from the
//! domain models so the file format can evolve without touching the UI layer.

use crate::domain::Ide;
use serde::{Deserialize, Serialize};

/// Catalog format version understood by this build.
pub const CATALOG_VERSION: u32 = 1;

/// Top-level catalog document.
///
/// ```json
/// {
///   "version": 1,
///   "items": [
///     { "id": 1, "title": "Aqua", "subtitle": "...", "image": "ide_aqua", "category": "IDE" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Version of the catalog format.
    pub version: u32,

    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<IdeRecord>,
}

/// One catalog entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeRecord {
    pub id: i64,
    pub title: String,

    #[serde(default)]
    pub subtitle: String,

    /// Logo resource reference. Missing images render with the title badge only.
    #[serde(default)]
    pub image: String,

    pub category: String,
}

impl From<IdeRecord> for Ide {
    fn from(record: IdeRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            subtitle: record.subtitle,
            image: record.image,
            category: record.category.trim().to_string(),
        }
    }
}
