//! IDE catalog domain model.
//!
//! An [`Ide`] is one immutable catalog entry. A [`Favorite`] wraps an entry as it
//! appears in the browsable list; it carries no extra fields today but keeps the
//! list type distinct from the raw catalog type.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Stable identifier, unique within a catalog
/// - `title`: Product name (e.g. "IntelliJ IDEA")
/// - `subtitle`: One-line description
/// - `image`: Resource reference for the product logo (e.g. `"ide_intellij"`)
/// - `category`: Filter label (e.g. "IDE", "Tool")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ide {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub category: String,
}

impl Ide {
    /// Creates a catalog entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use jetcatalog::domain::Ide;
    ///
    /// let ide = Ide::new(1, "Aqua", "Test automation IDE", "ide_aqua", "IDE");
    /// assert_eq!(ide.category, "IDE");
    /// ```
    #[must_use]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: subtitle.into(),
            image: image.into(),
            category: category.into(),
        }
    }

    /// Returns a two-letter badge used in place of the product logo.
    ///
    /// Takes the initials of the first two words of the title, or the first
    /// two characters for single-word titles. Always uppercase.
    ///
    /// # Examples
    ///
    /// ```
    /// use jetcatalog::domain::Ide;
    ///
    /// let idea = Ide::new(1, "IntelliJ IDEA", "", "", "IDE");
    /// assert_eq!(idea.badge(), "II");
    ///
    /// let aqua = Ide::new(2, "Aqua", "", "", "IDE");
    /// assert_eq!(aqua.badge(), "AQ");
    /// ```
    #[must_use]
    pub fn badge(&self) -> String {
        let words: Vec<&str> = self.title.split_whitespace().collect();
        let badge: String = match words.as_slice() {
            [] => "??".to_string(),
            [single] => single.chars().take(2).collect(),
            [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
        };
        badge.to_uppercase()
    }
}

/// A catalog entry as shown in the favorites list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub ide: Ide,
}

impl From<Ide> for Favorite {
    fn from(ide: Ide) -> Self {
        Self { ide }
    }
}

impl Favorite {
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.ide.id
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.ide.category
    }
}
