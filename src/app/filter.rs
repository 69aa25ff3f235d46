//! Category selection reducer and visible-item filter.
//!
//! The category bar is single-select: at most one category is active, and
//! `None` means every category is shown. Both functions here are pure; the
//! caller stores the result and re-renders.

use crate::domain::Favorite;

/// A click on one pill of the category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryClick {
    /// The leading "all" pill.
    All,
    /// A category pill with its label.
    Category(String),
}

/// Computes the next category selection after a pill click.
///
/// - `All` always clears the selection.
/// - Clicking the active category clears the selection.
/// - Clicking any other category selects only that category.
///
/// # Examples
///
/// ```
/// use jetcatalog::app::filter::{toggle_category, CategoryClick};
///
/// let ide = CategoryClick::Category("IDE".to_string());
/// let tool = CategoryClick::Category("Tool".to_string());
///
/// assert_eq!(toggle_category(None, &ide), Some("IDE".to_string()));
/// assert_eq!(toggle_category(Some("IDE"), &ide), None);
/// assert_eq!(toggle_category(Some("IDE"), &tool), Some("Tool".to_string()));
/// assert_eq!(toggle_category(Some("Tool"), &CategoryClick::All), None);
/// ```
#[must_use]
pub fn toggle_category(current: Option<&str>, clicked: &CategoryClick) -> Option<String> {
    match clicked {
        CategoryClick::All => None,
        CategoryClick::Category(label) if current == Some(label.as_str()) => None,
        CategoryClick::Category(label) => Some(label.clone()),
    }
}

/// Returns the favorites visible under `selection`, preserving order.
///
/// Identity when `selection` is `None`.
#[must_use]
pub fn filter_by_category(items: &[Favorite], selection: Option<&str>) -> Vec<Favorite> {
    match selection {
        None => items.to_vec(),
        Some(category) => items
            .iter()
            .filter(|favorite| favorite.category() == category)
            .cloned()
            .collect(),
    }
}
