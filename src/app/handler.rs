//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime or worker thread
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. The load dispatcher observes the resulting state
//! 5. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Observe`
//! - **Navigation**: `KeyDown`, `KeyUp`, `OpenSelected`, `Back`
//! - **Category bar**: `CategoryLeft`, `CategoryRight`, `ClickCategory`,
//!   `ClickFocusedCategory`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `Char`, `Backspace`, `Escape`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Example
//!
//! ```rust
//! use jetcatalog::app::{handle_event, Action, AppState, Event};
//! use jetcatalog::ui::Theme;
//!
//! let mut state = AppState::new(Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Observe)?;
//! assert!(should_render);
//! assert!(matches!(actions.as_slice(), [Action::PostToWorker(_)]));
//! # Ok::<(), jetcatalog::domain::CatalogError>(())
//! ```

use super::filter::CategoryClick;
use super::modes::{InputMode, Route, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, the plugin lifecycle, or worker responses.
///
/// The event handler processes these sequentially, so state transitions are
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The screen became active (plugin loaded, permissions granted).
    ///
    /// Only runs the load dispatcher.
    Observe,

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,

    /// Moves the category cursor one pill left.
    CategoryLeft,
    /// Moves the category cursor one pill right.
    CategoryRight,
    /// Clicks a specific pill of the category bar.
    ClickCategory(CategoryClick),
    /// Clicks the pill under the category cursor.
    ClickFocusedCategory,

    /// Opens the detail screen of the selected favorite.
    OpenSelected,
    /// Leaves the detail screen.
    Back,
    /// Reloads the catalog.
    Refresh,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,

    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results list (from typing mode).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. The load dispatcher runs after every event, so a
/// pending `load all` request is appended to whatever the event produced.
///
/// # Errors
///
/// Reserved for state transitions that can fail; none of the current ones do.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let (should_render, mut actions) = apply_event(state, event)?;

    if let Some(load) = state.dispatch_load() {
        actions.push(load);
        return Ok((true, actions));
    }

    Ok((should_render, actions))
}

/// Posts the current query to the worker.
fn search_action(state: &AppState) -> Action {
    Action::PostToWorker(WorkerMessage::search(state.search_query.clone()))
}

#[allow(clippy::too_many_lines)]
fn apply_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    if let Route::Detail { .. } = state.route {
        return Ok(apply_detail_event(state, event));
    }

    match event {
        Event::Observe => Ok((false, vec![])),
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CategoryLeft => {
            state.move_category_cursor_left();
            Ok((true, vec![]))
        }
        Event::CategoryRight => {
            state.move_category_cursor_right();
            Ok((true, vec![]))
        }
        Event::ClickCategory(click) => {
            state.click_category(click);
            Ok((true, vec![]))
        }
        Event::ClickFocusedCategory => {
            state.click_focused_category();
            Ok((true, vec![]))
        }
        Event::OpenSelected => {
            let Some(favorite) = state.selected_favorite() else {
                tracing::debug!("no favorite selected");
                return Ok((false, vec![]));
            };

            tracing::debug!(id = favorite.id(), title = %favorite.ide.title, "favorite selected");
            Ok((true, vec![Action::NavigateToDetail { id: favorite.id() }]))
        }
        Event::Back => Ok((false, vec![])),
        Event::Refresh => {
            tracing::debug!("refreshing catalog");
            state.refresh();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            if state.load_state.favorites().is_none() {
                tracing::debug!("search unavailable until favorites are loaded");
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            if state.search_query.is_empty() {
                return Ok((true, vec![]));
            }
            state.search_query.clear();
            Ok((true, vec![search_action(state)]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, char = %c, "search query updated");

            Ok((true, vec![search_action(state)]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) || state.search_query.pop().is_none() {
                return Ok((false, vec![]));
            }

            Ok((true, vec![search_action(state)]))
        }
        Event::WorkerResponse(response) => Ok(apply_worker_response(state, response)),
    }
}

/// Handles events while the detail screen is shown.
///
/// Only navigation back, closing and worker responses apply; everything else
/// is ignored so the home screen state stays as it was left.
fn apply_detail_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Back | Event::Escape | Event::ExitSearch => {
            state.close_detail();
            (true, vec![])
        }
        Event::CloseFocus => (false, vec![Action::CloseFocus]),
        Event::WorkerResponse(response) => apply_worker_response(state, response),
        _ => (false, vec![]),
    }
}

fn apply_worker_response(state: &mut AppState, response: &WorkerResponse) -> (bool, Vec<Action>) {
    match response {
        WorkerResponse::Loaded {
            query,
            favorites,
            categories,
        } => {
            tracing::debug!(query = %query, count = favorites.len(), "favorites loaded");
            let applied = state.apply_loaded(query, favorites.clone(), categories.clone());
            (applied, vec![])
        }
        WorkerResponse::Error { message } => {
            tracing::error!("Worker error: {}", message);
            state.apply_load_error(message.clone());
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::LoadState;
    use crate::domain::{Favorite, Ide};
    use crate::ui::Theme;

    fn favorites() -> Vec<Favorite> {
        vec![
            Favorite::from(Ide::new(1, "RustRover", "Rust", "ide_rustrover", "IDE")),
            Favorite::from(Ide::new(2, "DataSpell", "Data science", "ide_dataspell", "Data")),
        ]
    }

    fn loaded() -> AppState {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::Observe).unwrap();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Loaded {
                query: String::new(),
                favorites: favorites(),
                categories: vec!["IDE".to_string(), "Data".to_string()],
            }),
        )
        .unwrap();
        state
    }

    fn posted_queries(actions: &[Action]) -> Vec<String> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::PostToWorker(message) => Some(message.query().to_string()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn first_observe_requests_load_once() {
        let mut state = AppState::new(Theme::default());

        let (render, actions) = handle_event(&mut state, &Event::Observe).unwrap();
        assert!(render);
        assert!(matches!(actions.as_slice(), [Action::PostToWorker(WorkerMessage::LoadAll { .. })]));

        for event in [Event::Observe, Event::KeyDown, Event::Observe] {
            let (_, actions) = handle_event(&mut state, &event).unwrap();
            assert!(actions.is_empty(), "unexpected request after {event:?}");
        }
    }

    #[test]
    fn search_requires_loaded_favorites() {
        let mut state = AppState::new(Theme::default());
        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);

        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Typing));
    }

    #[test]
    fn typing_posts_each_query() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();

        let (_, first) = handle_event(&mut state, &Event::Char('r')).unwrap();
        let (_, second) = handle_event(&mut state, &Event::Char('u')).unwrap();
        let (_, third) = handle_event(&mut state, &Event::Backspace).unwrap();

        assert_eq!(posted_queries(&first), vec!["r"]);
        assert_eq!(posted_queries(&second), vec!["ru"]);
        assert_eq!(posted_queries(&third), vec!["r"]);
    }

    #[test]
    fn backspace_on_empty_query_posts_nothing() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn escape_clears_query_and_reloads_everything() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('x')).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.search_query.is_empty());
        assert_eq!(posted_queries(&actions), vec![""]);
    }

    #[test]
    fn focus_results_with_empty_query_returns_to_normal() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn stale_response_does_not_render() {
        let mut state = loaded();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('d')).unwrap();
        handle_event(&mut state, &Event::Char('a')).unwrap();

        let (render, _) = handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Loaded {
                query: "d".to_string(),
                favorites: vec![],
                categories: vec![],
            }),
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.visible.len(), 2);
    }

    #[test]
    fn error_response_replaces_state() {
        let mut state = loaded();
        handle_event(
            &mut state,
            &Event::WorkerResponse(WorkerResponse::Error {
                message: "network down".to_string(),
            }),
        )
        .unwrap();

        assert_eq!(state.load_state, LoadState::Error("network down".to_string()));
        assert!(state.visible.is_empty());
    }

    #[test]
    fn refresh_requests_exactly_one_load() {
        let mut state = loaded();
        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert!(matches!(actions.as_slice(), [Action::PostToWorker(WorkerMessage::LoadAll { .. })]));

        let (_, actions) = handle_event(&mut state, &Event::Observe).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn open_selected_navigates_and_back_returns_home() {
        let mut state = loaded();
        handle_event(&mut state, &Event::KeyDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert_eq!(actions, vec![Action::NavigateToDetail { id: 2 }]);

        state.open_detail(2);
        handle_event(&mut state, &Event::KeyDown).unwrap();
        assert_eq!(state.selected_index, 1);

        handle_event(&mut state, &Event::Back).unwrap();
        assert_eq!(state.route, Route::Home);
    }

    #[test]
    fn open_selected_with_nothing_visible_is_ignored() {
        let mut state = AppState::new(Theme::default());
        let (_, actions) = handle_event(&mut state, &Event::OpenSelected).unwrap();
        assert!(!actions.contains(&Action::NavigateToDetail { id: 0 }));
        assert!(actions.iter().all(|a| matches!(a, Action::PostToWorker(_))));
    }

    #[test]
    fn category_click_filters_visible() {
        let mut state = loaded();
        handle_event(&mut state, &Event::ClickCategory(CategoryClick::Category("Data".to_string()))).unwrap();
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.visible[0].id(), 2);

        handle_event(&mut state, &Event::CategoryRight).unwrap();
        handle_event(&mut state, &Event::CategoryRight).unwrap();
        handle_event(&mut state, &Event::ClickFocusedCategory).unwrap();
        assert_eq!(state.selected_category, None);
        assert_eq!(state.visible.len(), 2);
    }
}
