//! JetCatalog: a Zellij plugin for browsing a JetBrains IDE catalog.
//!
//! JetCatalog renders a home screen listing IDE catalog entries with:
//! - A search bar whose queries are answered by a background worker
//! - A single-select category filter bar
//! - A navigable two-line list and a detail screen per entry
//! - A `Loading` / `Success` / `Error` load state that requests data once

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, load dispatcher                  │
//! │  - Category toggle and visible-item filter          │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON catalog│   │ - load/search │
//! │ - Theming     │   │ - Fuzzy search│   │ - IPC bridge  │
//! │ - Components  │   │ - Catalog API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Ide and Favorite (domain/ide)                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/jetcatalog.wasm" {
//!         catalog_file "~/ides.json"
//!         theme "darcula"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Plugin Load** (`main.rs`): parse configuration, initialize tracing,
//!    create `AppState` in `Loading`, request permissions
//! 2. **Permissions Result**: configure the worker, then observe the load
//!    state; the dispatcher posts exactly one `LoadAll`
//! 3. **Worker**: open the catalog, answer with `Loaded` or `Error`
//! 4. **Rendering**: compute the view model from state and draw components
//!
//! # Example
//!
//! ```rust
//! use jetcatalog::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Observe)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), jetcatalog::CatalogError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadState, Route, SearchFocus};
pub use domain::{CatalogError, Favorite, Ide, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/jetcatalog.wasm" {
///     catalog_file "~/ides.json"
///     theme "intellij-light"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog to load instead of the built-in one.
    ///
    /// `~` expands to the sandbox home (`/host`). Default: built-in catalog.
    pub catalog_file: Option<String>,

    /// Built-in theme name: `darcula` (default) or `intellij-light`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values are treated as unset.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use jetcatalog::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("catalog_file".to_string(), "~/ides.json".to_string());
    /// map.insert("theme".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.catalog_file.as_deref(), Some("~/ides.json"));
    /// assert_eq!(config.theme_name, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            catalog_file: get("catalog_file"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    /// Resolves the configured theme, falling back to the default on errors.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let theme_file = self
            .theme_file
            .as_deref()
            .map(|file| PathBuf::from(infrastructure::expand_tilde(file)));
        Theme::resolve(self.theme_name.as_deref(), theme_file.as_deref())
    }
}

/// Creates the initial application state for `config`.
///
/// The state starts in `Loading` with an armed load latch; the first
/// observed event dispatches the `LoadAll` request.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing jetcatalog plugin");
    AppState::new(config.theme())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        assert_eq!(Config::default().theme(), Theme::default());
    }

    #[test]
    fn all_keys_are_parsed() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "/tmp/ides.json"),
            ("theme", "intellij-light"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
            ("unknown", "ignored"),
        ]));

        assert_eq!(config.catalog_file.as_deref(), Some("/tmp/ides.json"));
        assert_eq!(config.theme_name.as_deref(), Some("intellij-light"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn theme_name_selects_builtin_theme() {
        let config = Config::from_zellij(&map(&[("theme", "intellij-light")]));
        assert_eq!(config.theme().name, "intellij-light");
    }

    #[test]
    fn initialize_starts_loading() {
        let state = initialize(&Config::default());
        assert!(state.load_state.is_loading());
        assert!(!state.load_latch.has_fired());
        assert_eq!(state.route, Route::Home);
    }
}
