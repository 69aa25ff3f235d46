//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data, which
//! makes every screen state testable without a terminal.

use crate::domain::Favorite;

/// Ellipsis appended to truncated text.
const ELLIPSIS: char = '…';

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information (title, count).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Search bar, shown only on the home screen once favorites are loaded.
    pub search_bar: Option<SearchBarInfo>,

    /// Main content area.
    pub body: Body,
}

/// Main content of the screen, one variant per load/route state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Data source has not answered yet.
    Loading(MessageView),

    /// Data source failed. The message is the error text verbatim.
    Error(MessageView),

    /// Category bar plus favorites list or the no-results view.
    Home(HomeView),

    /// Detail page of one entry.
    Detail(DetailView),
}

/// Centered single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub text: String,
}

/// Home screen content below the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    /// Category filter pills, "all" first.
    pub category_bar: CategoryBarInfo,

    /// Favorites list or the no-results state.
    pub content: ListContent,
}

/// Either the visible rows or the empty-result state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListContent {
    /// Rows within the visible window.
    Items {
        rows: Vec<ItemRow>,
        /// Index of the selected row within `rows`.
        selected_index: usize,
    },

    /// Filtering produced nothing. Not an error.
    NoResults(EmptyState),
}

/// Category filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBarInfo {
    pub pills: Vec<Pill>,
}

/// One pill of the category bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    /// Label shown on the pill ("all" for the leading pill).
    pub label: String,

    /// Whether this pill is the active filter. "all" is selected when no
    /// category is.
    pub is_selected: bool,

    /// Whether the pill cursor is on this pill.
    pub is_focused: bool,
}

/// Display information for one favorite in the list.
///
/// Each row occupies [`ItemRow::HEIGHT`] terminal lines: badge and title on
/// the first, subtitle on the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    /// Catalog id, used for navigation.
    pub id: i64,

    /// Two-letter stand-in for the product logo.
    pub badge: String,

    /// Title, truncated with an ellipsis to the available width.
    pub title: String,

    /// Subtitle, truncated with an ellipsis to the available width.
    pub subtitle: String,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges of `title` to highlight for search matches.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices,
    /// already clipped to the truncated title.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl ItemRow {
    /// Terminal lines per row.
    pub const HEIGHT: usize = 2;

    /// Columns taken by the badge cell, including its margins.
    pub const BADGE_WIDTH: usize = 5;

    /// Maps a favorite to a row.
    ///
    /// # Examples
    ///
    /// ```
    /// use jetcatalog::domain::{Favorite, Ide};
    /// use jetcatalog::ui::ItemRow;
    ///
    /// let fav = Favorite::from(Ide::new(7, "IntelliJ IDEA", "The leading Java and Kotlin IDE", "ide_intellij", "IDE"));
    /// let row = ItemRow::from_favorite(&fav, true, vec![(0, 3)], 12);
    ///
    /// assert_eq!(row.id, 7);
    /// assert_eq!(row.badge, "II");
    /// assert_eq!(row.title, "IntelliJ ID…");
    /// assert_eq!(row.subtitle, "The leading…");
    /// ```
    #[must_use]
    pub fn from_favorite(
        favorite: &Favorite,
        is_selected: bool,
        highlight_ranges: Vec<(usize, usize)>,
        text_width: usize,
    ) -> Self {
        let title = truncate(&favorite.ide.title, text_width);
        let title_len = title.chars().count();
        let highlight_ranges = highlight_ranges
            .into_iter()
            .filter(|&(start, _)| start < title_len)
            .map(|(start, end)| (start, end.min(title_len)))
            .collect();

        Self {
            id: favorite.id(),
            badge: favorite.ide.badge(),
            title,
            subtitle: truncate(&favorite.ide.subtitle, text_width),
            is_selected,
            highlight_ranges,
        }
    }
}

/// Detail page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// The entry is present in the loaded list.
    Found {
        id: i64,
        badge: String,
        title: String,
        subtitle: String,
        category: String,
        image: String,
    },

    /// The entry is no longer loaded (e.g. after a refresh).
    NotFound { id: i64 },
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g. "There is no xyz IDE").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Whether the cursor is in the search field.
    pub is_typing: bool,
}

/// Truncates `text` to at most `max_chars` characters, ending in an ellipsis
/// when shortened.
///
/// # Examples
///
/// ```
/// use jetcatalog::ui::viewmodel::truncate;
///
/// assert_eq!(truncate("PhpStorm", 20), "PhpStorm");
/// assert_eq!(truncate("PhpStorm", 4), "Php…");
/// assert_eq!(truncate("PhpStorm", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max_chars - 1).collect();
    out.push(ELLIPSIS);
    out
}
