//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the plugin,
//! along with the category filter, selection management, load dispatching and UI
//! view model generation. It is the single source of truth for all transient UI
//! state.
//!
//! # State Components
//!
//! - **Load State**: `Loading`, `Success(favorites)` or `Error(message)` as
//!   pushed by the worker
//! - **Load Latch**: guarantees one `load all` request per arming
//! - **Categories**: every category of the catalog, in first-appearance order
//! - **Category Selection**: `None` for all, or exactly one category
//! - **Visible**: loaded favorites after the category filter
//! - **Selection**: list cursor within `visible`, pill cursor within the bar
//! - **Input Mode / Route**: keybinding interpretation and current screen
//!
//! # Example
//!
//! ```rust
//! use jetcatalog::app::{AppState, LoadState};
//! use jetcatalog::domain::{Favorite, Ide};
//! use jetcatalog::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! assert!(state.dispatch_load().is_some());
//! assert!(state.dispatch_load().is_none());
//!
//! let favorites = vec![Favorite::from(Ide::new(1, "Aqua", "Test automation", "ide_aqua", "IDE"))];
//! state.apply_loaded("", favorites, vec!["IDE".to_string()]);
//! assert_eq!(state.visible.len(), 1);
//! ```

use super::actions::Action;
use super::filter::{filter_by_category, toggle_category, CategoryClick};
use super::load::{LoadRequestLatch, LoadState};
use super::modes::{InputMode, Route, SearchFocus};
use crate::domain::Favorite;
use crate::storage::search::tokenize;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CategoryBarInfo, DetailView, EmptyState, FooterInfo, HeaderInfo, HomeView, ItemRow,
    ListContent, MessageView, Pill, SearchBarInfo, UIViewModel,
};
use crate::worker::WorkerMessage;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Label of the leading pill that clears the category filter.
pub const ALL_PILL_LABEL: &str = "all";

/// Lines taken by the home screen around the list: blank, header, border,
/// search bar (3), category bar, spacer, border, footer.
const HOME_CHROME_ROWS: usize = 11;

/// Columns reserved right of the row text.
const SAFETY_MARGIN: usize = 2;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Latest load state pushed by the data source.
    pub load_state: LoadState,

    /// One-shot guard for the `load all` request.
    pub load_latch: LoadRequestLatch,

    /// Category labels offered by the filter bar.
    ///
    /// Taken from the whole catalog, so the bar does not shrink while a
    /// search narrows the list.
    pub categories: Vec<String>,

    /// Active category filter; `None` shows all categories.
    pub selected_category: Option<String>,

    /// Pill under the category cursor: `0` is "all", `n` is `categories[n - 1]`.
    pub category_cursor: usize,

    /// Loaded favorites after the category filter.
    ///
    /// Recomputed by `apply_category_filter()` after every change to the load
    /// state or the selection.
    pub visible: Vec<Favorite>,

    /// Zero-based index of the selected row within `visible`.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query string, sent verbatim to the worker.
    pub search_query: String,

    /// Screen currently shown.
    pub route: Route,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: `Loading`, nothing selected, latch armed.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            load_state: LoadState::Loading,
            load_latch: LoadRequestLatch::default(),
            categories: vec![],
            selected_category: None,
            category_cursor: 0,
            visible: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            route: Route::Home,
            theme,
        }
    }

    /// Observes the load state and returns the `load all` request if one is due.
    ///
    /// Called after every event. While the state is `Loading` the first call
    /// fires the latch and returns the request; every later call returns `None`
    /// until [`AppState::refresh`] re-arms the latch.
    pub fn dispatch_load(&mut self) -> Option<Action> {
        if self.load_state.is_loading() && self.load_latch.try_fire() {
            tracing::debug!("dispatching load all");
            return Some(Action::PostToWorker(WorkerMessage::load_all()));
        }
        None
    }

    /// Returns to `Loading` and re-arms the latch so the next
    /// [`AppState::dispatch_load`] issues a fresh `load all`.
    ///
    /// The search query is cleared: the reply to `load all` answers the empty
    /// query and would otherwise be discarded as stale.
    pub fn refresh(&mut self) {
        self.load_state = LoadState::Loading;
        self.load_latch.rearm();
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.apply_category_filter();
    }

    /// Applies a `Loaded` response from the worker.
    ///
    /// # Returns
    ///
    /// `false` if the response answers a query other than the current one and
    /// was dropped; `true` if it became the new `Success` state.
    pub fn apply_loaded(&mut self, query: &str, favorites: Vec<Favorite>, categories: Vec<String>) -> bool {
        if query != self.search_query {
            tracing::debug!(
                response_query = %query,
                current_query = %self.search_query,
                "dropping stale search response"
            );
            return false;
        }

        self.categories = categories;
        if let Some(selected) = &self.selected_category {
            if !self.categories.contains(selected) {
                tracing::debug!(category = %selected, "selected category no longer in catalog");
                self.selected_category = None;
            }
        }
        self.category_cursor = self.category_cursor.min(self.categories.len());

        self.load_state = LoadState::Success(favorites);
        self.apply_category_filter();
        true
    }

    /// Applies an `Error` response from the worker.
    ///
    /// Errors always replace the current state. Search mode is left because the
    /// error screen has no search bar.
    pub fn apply_load_error(&mut self, message: String) {
        self.load_state = LoadState::Error(message);
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.apply_category_filter();
    }

    /// Recomputes `visible` from the load state and the category selection,
    /// then clamps the list cursor.
    pub fn apply_category_filter(&mut self) {
        let _span = tracing::debug_span!("apply_category_filter",
            selected_category = ?self.selected_category
        )
        .entered();

        self.visible = self
            .load_state
            .favorites()
            .map(|items| filter_by_category(items, self.selected_category.as_deref()))
            .unwrap_or_default();

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }

        tracing::debug!(visible_count = self.visible.len(), "category filter applied");
    }

    /// Applies a pill click to the selection and re-filters.
    pub fn click_category(&mut self, click: &CategoryClick) {
        self.selected_category = toggle_category(self.selected_category.as_deref(), click);
        tracing::debug!(selected_category = ?self.selected_category, "category toggled");
        self.apply_category_filter();
    }

    /// Clicks the pill under the category cursor.
    pub fn click_focused_category(&mut self) {
        let click = self.focused_pill();
        self.click_category(&click);
    }

    /// Returns the click the pill under the cursor would produce.
    #[must_use]
    pub fn focused_pill(&self) -> CategoryClick {
        match self.category_cursor.checked_sub(1).and_then(|i| self.categories.get(i)) {
            Some(category) => CategoryClick::Category(category.clone()),
            None => CategoryClick::All,
        }
    }

    /// Moves the pill cursor right, wrapping to "all" after the last category.
    pub fn move_category_cursor_right(&mut self) {
        self.category_cursor = (self.category_cursor + 1) % (self.categories.len() + 1);
    }

    /// Moves the pill cursor left, wrapping to the last category before "all".
    pub fn move_category_cursor_left(&mut self) {
        if self.category_cursor == 0 {
            self.category_cursor = self.categories.len();
        } else {
            self.category_cursor -= 1;
        }
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    ///
    /// No-op if nothing is visible.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    ///
    /// No-op if nothing is visible.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the favorite under the list cursor, if any.
    #[must_use]
    pub fn selected_favorite(&self) -> Option<&Favorite> {
        self.visible.get(self.selected_index)
    }

    /// Shows the detail screen of `id`.
    pub fn open_detail(&mut self, id: i64) {
        tracing::debug!(id, "opening detail");
        self.route = Route::Detail { id };
    }

    /// Returns to the home screen. Filters and cursor are left untouched.
    pub fn close_detail(&mut self) {
        self.route = Route::Home;
    }

    /// Looks up a loaded favorite by catalog id.
    #[must_use]
    pub fn find_favorite(&self, id: i64) -> Option<&Favorite> {
        self.load_state
            .favorites()
            .and_then(|items| items.iter().find(|favorite| favorite.id() == id))
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate how many rows fit after subtracting UI chrome
    /// 2. Center the window around the selected index
    /// 3. Shift the window if near the end to maximize visible rows
    /// 4. Compute the selection index relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.route {
            Route::Detail { id } => Body::Detail(self.compute_detail(id)),
            Route::Home => match &self.load_state {
                LoadState::Loading => Body::Loading(MessageView {
                    text: "Loading IDEs…".to_string(),
                }),
                LoadState::Error(message) => Body::Error(MessageView {
                    text: message.clone(),
                }),
                LoadState::Success(_) => Body::Home(HomeView {
                    category_bar: self.compute_category_bar(),
                    content: self.compute_list(rows, cols),
                }),
            },
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            body,
        }
    }

    fn compute_list(&self, rows: usize, cols: usize) -> ListContent {
        if self.visible.is_empty() {
            return ListContent::NoResults(self.compute_empty_state());
        }

        let available = Self::calculate_available_items(rows);

        let mut visible_start = self.selected_index.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(self.visible.len());

        if visible_end - visible_start < available && self.visible.len() >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        let tokens = if matches!(self.input_mode, InputMode::Search(_)) {
            tokenize(&self.search_query)
        } else {
            vec![]
        };
        let matcher = SkimMatcherV2::default();
        let text_width = cols.saturating_sub(ItemRow::BADGE_WIDTH + SAFETY_MARGIN + 1);

        let rows = self.visible[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, favorite)| {
                let is_selected = visible_start + relative_idx == self.selected_index;
                let ranges = compute_highlight_ranges(&favorite.ide.title, &tokens, &matcher);
                ItemRow::from_favorite(favorite, is_selected, ranges, text_width)
            })
            .collect();

        ListContent::Items {
            rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let query = self.search_query.trim();
        let message = if query.is_empty() {
            "There is no IDE".to_string()
        } else {
            format!("There is no {query} IDE")
        };

        let subtitle = match &self.selected_category {
            Some(category) => format!("Nothing matches in {category}. Select \"all\" to widen the search."),
            None if query.is_empty() => "The catalog is empty.".to_string(),
            None => "Try a different search.".to_string(),
        };

        EmptyState { message, subtitle }
    }

    fn compute_category_bar(&self) -> CategoryBarInfo {
        let all = Pill {
            label: ALL_PILL_LABEL.to_string(),
            is_selected: self.selected_category.is_none(),
            is_focused: self.category_cursor == 0,
        };

        let pills = std::iter::once(all)
            .chain(self.categories.iter().enumerate().map(|(i, category)| Pill {
                label: category.clone(),
                is_selected: self.selected_category.as_deref() == Some(category.as_str()),
                is_focused: self.category_cursor == i + 1,
            }))
            .collect();

        CategoryBarInfo { pills }
    }

    fn compute_detail(&self, id: i64) -> DetailView {
        match self.find_favorite(id) {
            Some(favorite) => DetailView::Found {
                id,
                badge: favorite.ide.badge(),
                title: favorite.ide.title.clone(),
                subtitle: favorite.ide.subtitle.clone(),
                category: favorite.ide.category.clone(),
                image: favorite.ide.image.clone(),
            },
            None => DetailView::NotFound { id },
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match (&self.route, &self.load_state) {
            (Route::Detail { id }, _) => match self.find_favorite(*id) {
                Some(favorite) => format!(" {} ", favorite.ide.title),
                None => " JetBrains IDEs ".to_string(),
            },
            (Route::Home, LoadState::Success(_)) => match &self.selected_category {
                Some(category) => format!(" JetBrains IDEs · {category} ({}) ", self.visible.len()),
                None => format!(" JetBrains IDEs ({}) ", self.visible.len()),
            },
            (Route::Home, LoadState::Loading | LoadState::Error(_)) => " JetBrains IDEs ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.route, &self.load_state, self.input_mode) {
            (Route::Detail { .. }, _, _) => "ESC/Backspace/q: back",
            (Route::Home, LoadState::Loading, _) => "q: quit",
            (Route::Home, LoadState::Error(_), _) => "r: retry  q: quit",
            (Route::Home, LoadState::Success(_), InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: open  Ctrl+n/p: navigate  Type to filter"
            }
            (Route::Home, LoadState::Success(_), InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: open"
            }
            (Route::Home, LoadState::Success(_), InputMode::Normal) => {
                "j/k: navigate  h/l: category  Space: toggle  /: search  Enter: open  r: refresh  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if self.route != Route::Home || self.load_state.favorites().is_none() {
            return None;
        }
        Some(SearchBarInfo {
            query: self.search_query.clone(),
            is_typing: self.input_mode == InputMode::Search(SearchFocus::Typing),
        })
    }

    /// Number of two-line rows that fit in the list area, at least one.
    const fn calculate_available_items(total_rows: usize) -> usize {
        let items = total_rows.saturating_sub(HOME_CHROME_ROWS) / ItemRow::HEIGHT;
        if items == 0 {
            1
        } else {
            items
        }
    }
}

/// Computes character ranges of `text` matched by the search tokens.
///
/// Each token is matched independently with the skim matcher; the union of
/// matched character indices is coalesced into `(start, end)` ranges with an
/// exclusive end.
fn compute_highlight_ranges(text: &str, tokens: &[String], matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let mut indices: Vec<usize> = tokens
        .iter()
        .filter_map(|token| matcher.fuzzy_indices(text, token))
        .flat_map(|(_score, indices)| indices)
        .collect();
    indices.sort_unstable();
    indices.dedup();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ide;

    fn catalog() -> Vec<Favorite> {
        vec![
            Favorite::from(Ide::new(1, "IntelliJ IDEA", "Java and Kotlin", "ide_intellij", "IDE")),
            Favorite::from(Ide::new(2, "DataGrip", "Databases", "ide_datagrip", "Data")),
            Favorite::from(Ide::new(3, "PyCharm", "Python", "ide_pycharm", "IDE")),
            Favorite::from(Ide::new(4, "Fleet", "Editor", "ide_fleet", "Editor")),
        ]
    }

    fn categories() -> Vec<String> {
        vec!["IDE".to_string(), "Data".to_string(), "Editor".to_string()]
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Theme::default());
        assert!(state.apply_loaded("", catalog(), categories()));
        state
    }

    #[test]
    fn dispatch_load_is_silent_after_first_request() {
        let mut state = AppState::new(Theme::default());
        assert!(matches!(state.dispatch_load(), Some(Action::PostToWorker(WorkerMessage::LoadAll { .. }))));
        for _ in 0..5 {
            assert_eq!(state.dispatch_load(), None);
        }
    }

    #[test]
    fn refresh_rearms_latch_and_clears_query() {
        let mut state = loaded_state();
        state.dispatch_load();
        state.search_query = "py".to_string();
        state.input_mode = InputMode::Search(SearchFocus::Typing);

        state.refresh();

        assert!(state.load_state.is_loading());
        assert!(state.search_query.is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.dispatch_load().is_some());
        assert!(state.dispatch_load().is_none());
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = loaded_state();
        state.search_query = "py".to_string();

        assert!(!state.apply_loaded("p", vec![], categories()));
        assert_eq!(state.visible.len(), 4);

        assert!(state.apply_loaded("py", vec![catalog()[2].clone()], categories()));
        assert_eq!(state.visible.len(), 1);
    }

    #[test]
    fn selection_is_cleared_when_category_disappears() {
        let mut state = loaded_state();
        state.click_category(&CategoryClick::Category("Editor".to_string()));
        state.category_cursor = 3;

        state.apply_loaded("", catalog()[..2].to_vec(), vec!["IDE".to_string(), "Data".to_string()]);

        assert_eq!(state.selected_category, None);
        assert_eq!(state.category_cursor, 2);
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn category_filter_clamps_cursor() {
        let mut state = loaded_state();
        state.selected_index = 3;
        state.click_category(&CategoryClick::Category("IDE".to_string()));
        assert_eq!(state.visible.len(), 2);
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn pill_cursor_wraps_over_all_and_categories() {
        let mut state = loaded_state();
        assert_eq!(state.focused_pill(), CategoryClick::All);

        state.move_category_cursor_left();
        assert_eq!(state.focused_pill(), CategoryClick::Category("Editor".to_string()));

        state.move_category_cursor_right();
        assert_eq!(state.focused_pill(), CategoryClick::All);

        state.move_category_cursor_right();
        state.click_focused_category();
        assert_eq!(state.selected_category.as_deref(), Some("IDE"));

        state.click_focused_category();
        assert_eq!(state.selected_category, None);
    }

    #[test]
    fn selection_wraps() {
        let mut state = loaded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 3);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn error_body_shows_message_verbatim() {
        let mut state = AppState::new(Theme::default());
        state.apply_load_error("network down".to_string());

        let vm = state.compute_viewmodel(30, 80);
        assert_eq!(
            vm.body,
            Body::Error(MessageView {
                text: "network down".to_string()
            })
        );
        assert!(vm.search_bar.is_none());
        assert!(state.visible.is_empty());
    }

    #[test]
    fn empty_result_names_the_query() {
        let mut state = loaded_state();
        state.search_query = "xyz".to_string();
        state.apply_loaded("xyz", vec![], categories());

        match state.compute_viewmodel(30, 80).body {
            Body::Home(HomeView {
                content: ListContent::NoResults(empty),
                ..
            }) => assert_eq!(empty.message, "There is no xyz IDE"),
            other => panic!("expected no-results view, got {other:?}"),
        }
    }

    #[test]
    fn window_follows_selection() {
        let mut state = loaded_state();
        state.selected_index = 3;

        // 11 chrome rows + 2 items of 2 lines each
        match state.compute_viewmodel(15, 80).body {
            Body::Home(HomeView {
                content: ListContent::Items { rows, selected_index },
                ..
            }) => {
                assert_eq!(rows.len(), 2);
                assert_eq!(rows[selected_index].id, 4);
                assert!(rows[selected_index].is_selected);
            }
            other => panic!("expected items, got {other:?}"),
        }
    }

    #[test]
    fn category_bar_marks_selected_and_focused_pills() {
        let mut state = loaded_state();
        state.click_category(&CategoryClick::Category("Data".to_string()));
        state.category_cursor = 3;

        match state.compute_viewmodel(30, 80).body {
            Body::Home(home) => {
                let labels: Vec<&str> = home.category_bar.pills.iter().map(|p| p.label.as_str()).collect();
                assert_eq!(labels, vec!["all", "IDE", "Data", "Editor"]);
                assert!(!home.category_bar.pills[0].is_selected);
                assert!(home.category_bar.pills[2].is_selected);
                assert!(home.category_bar.pills[3].is_focused);
            }
            other => panic!("expected home, got {other:?}"),
        }
    }

    #[test]
    fn detail_view_survives_missing_item() {
        let mut state = loaded_state();
        state.open_detail(3);
        assert!(matches!(
            state.compute_viewmodel(30, 80).body,
            Body::Detail(DetailView::Found { ref title, .. }) if title == "PyCharm"
        ));

        state.refresh();
        assert_eq!(
            state.compute_viewmodel(30, 80).body,
            Body::Detail(DetailView::NotFound { id: 3 })
        );
    }

    #[test]
    fn highlight_ranges_merge_tokens() {
        let matcher = SkimMatcherV2::default();
        let tokens = vec!["py".to_string(), "charm".to_string()];
        assert_eq!(compute_highlight_ranges("PyCharm", &tokens, &matcher), vec![(0, 7)]);
        assert!(compute_highlight_ranges("PyCharm", &[], &matcher).is_empty());
    }
}
