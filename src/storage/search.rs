//! Title search used by the catalog backend.
//!
//! A query is split on whitespace into lowercase tokens. An entry matches when
//! every token fuzzy-matches its lowercased title using the skim algorithm.
//! Matching never reorders: results keep catalog order so the list does not
//! jump around while the user types.

use crate::domain::Ide;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Splits a query into lowercase search tokens.
///
/// # Examples
///
/// ```
/// use jetcatalog::storage::search::tokenize;
///
/// assert_eq!(tokenize("  Py  Charm "), vec!["py", "charm"]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Returns whether `title` matches every token of `query`.
///
/// Blank queries match everything.
#[must_use]
pub fn matches_query(matcher: &SkimMatcherV2, title: &str, tokens: &[String]) -> bool {
    let title_lower = title.to_lowercase();
    tokens
        .iter()
        .all(|token| matcher.fuzzy_match(&title_lower, token).is_some())
}

/// Keeps the entries whose title matches `query`, preserving order.
#[must_use]
pub fn filter_by_query(items: Vec<Ide>, query: &str) -> Vec<Ide> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return items;
    }

    let matcher = SkimMatcherV2::default();
    items
        .into_iter()
        .filter(|ide| matches_query(&matcher, &ide.title, &tokens))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Ide> {
        vec![
            Ide::new(1, "PyCharm", "", "", "IDE"),
            Ide::new(2, "DataGrip", "", "", "Data"),
            Ide::new(3, "PhpStorm", "", "", "IDE"),
            Ide::new(4, "WebStorm", "", "", "IDE"),
        ]
    }

    fn ids(items: &[Ide]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        assert_eq!(ids(&filter_by_query(catalog(), "")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_by_query(catalog(), "  \t")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn query_is_case_insensitive() {
        assert_eq!(ids(&filter_by_query(catalog(), "STORM")), vec![3, 4]);
    }

    #[test]
    fn every_token_must_match() {
        assert_eq!(ids(&filter_by_query(catalog(), "storm web")), vec![4]);
    }

    #[test]
    fn unmatched_query_returns_nothing() {
        assert!(filter_by_query(catalog(), "xyz").is_empty());
    }
}
