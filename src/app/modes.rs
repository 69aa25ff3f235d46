//! Input mode and route state types.
//!
//! # State Machine
//!
//! The home screen operates in one of two input modes:
//! - **Normal**: list and category bar navigation
//! - **Search**: editing the search query or navigating its results
//!
//! The route decides which screen is shown: the home list or the detail page
//! of a single entry.

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, enter to open, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation mode.
    ///
    /// Available keybindings: j/k (list), h/l (category), space (toggle
    /// category), / (search), enter (open), r (refresh), q (quit).
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Screen currently shown by the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// Search bar, category bar and favorites list.
    #[default]
    Home,

    /// Detail page of the entry with this id.
    Detail {
        /// Catalog id of the entry.
        id: i64,
    },
}
