//! Path utilities for the Zellij sandbox.
//!
//! Inside the plugin sandbox the host filesystem is mounted under `/host`,
//! which usually maps to the directory Zellij was started from.

use std::path::PathBuf;

/// Returns the data directory for JetCatalog files.
///
/// Resolves to `/host/.local/share/zellij/jetcatalog`, which is
/// `~/.local/share/zellij/jetcatalog` when Zellij is started from the home
/// directory. The trace file lives here.
///
/// # Examples
///
/// ```
/// use jetcatalog::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/jetcatalog"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("jetcatalog")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// # Examples
///
/// ```
/// use jetcatalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/catalog.json"), "/host/catalog.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Resolves a configured catalog path to a sandbox path.
///
/// Blank values mean "use the built-in catalog" and yield `None`.
#[must_use]
pub fn resolve_catalog_path(configured: Option<&str>) -> Option<PathBuf> {
    configured
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| PathBuf::from(expand_tilde(p)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_inside_path_is_left_alone() {
        assert_eq!(expand_tilde("/data/~/x"), "/data/~/x");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }

    #[test]
    fn blank_catalog_path_means_builtin() {
        assert_eq!(resolve_catalog_path(None), None);
        assert_eq!(resolve_catalog_path(Some("   ")), None);
        assert_eq!(
            resolve_catalog_path(Some(" ~/ides.json ")),
            Some(PathBuf::from("/host/ides.json"))
        );
    }
}
