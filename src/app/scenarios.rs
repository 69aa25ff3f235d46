//! End-to-end runs of the home screen against the built-in catalog.
//!
//! Worker requests produced by `handle_event` are answered by a real
//! `CatalogWorker`, so these cover the full plugin/worker round trip without
//! Zellij.

use crate::app::filter::CategoryClick;
use crate::app::{handle_event, Action, AppState, Event, InputMode, LoadState, Route, SearchFocus};
use crate::domain::{Favorite, Ide};
use crate::storage::JsonCatalog;
use crate::ui::{Body, DetailView, ListContent, Theme};
use crate::worker::{CatalogWorker, WorkerMessage, WorkerResponse};

struct Harness {
    state: AppState,
    worker: CatalogWorker,
    pending: Vec<WorkerMessage>,
}

impl Harness {
    fn new() -> Self {
        let catalog = JsonCatalog::builtin().unwrap();
        Self {
            state: AppState::new(Theme::default()),
            worker: CatalogWorker::with_catalog(Box::new(catalog)),
            pending: vec![],
        }
    }

    /// Sends `event`, queuing worker requests without answering them.
    fn send(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in actions {
            match action {
                Action::PostToWorker(message) => self.pending.push(message),
                Action::NavigateToDetail { id } => self.state.open_detail(id),
                Action::CloseFocus => {}
            }
        }
        render
    }

    /// Answers every queued request in order.
    fn drain(&mut self) {
        while !self.pending.is_empty() {
            let message = self.pending.remove(0);
            let response = self.worker.handle_message(message);
            self.send(Event::WorkerResponse(response));
        }
    }

    fn loaded() -> Self {
        let mut harness = Self::new();
        harness.send(Event::Observe);
        harness.drain();
        harness
    }

    fn visible_titles(&self) -> Vec<&str> {
        self.state.visible.iter().map(|f| f.ide.title.as_str()).collect()
    }
}

fn two_items() -> AppState {
    let mut state = AppState::new(Theme::default());
    state.apply_loaded(
        "",
        vec![
            Favorite::from(Ide::new(1, "Aqua", "", "ide_aqua", "IDE")),
            Favorite::from(Ide::new(2, "Toolbox App", "", "ide_toolbox", "Tool")),
        ],
        vec!["IDE".to_string(), "Tool".to_string()],
    );
    state
}

fn visible_ids(state: &AppState) -> Vec<i64> {
    state.visible.iter().map(Favorite::id).collect()
}

#[test]
fn no_selection_shows_every_item_in_order() {
    let state = two_items();
    assert_eq!(state.selected_category, None);
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn clicking_a_category_narrows_the_list() {
    let mut state = two_items();
    handle_event(&mut state, &Event::ClickCategory(CategoryClick::Category("IDE".to_string()))).unwrap();
    assert_eq!(state.selected_category.as_deref(), Some("IDE"));
    assert_eq!(visible_ids(&state), vec![1]);
}

#[test]
fn clicking_the_selected_category_again_clears_it() {
    let mut state = two_items();
    let ide = Event::ClickCategory(CategoryClick::Category("IDE".to_string()));
    handle_event(&mut state, &ide).unwrap();
    handle_event(&mut state, &ide).unwrap();
    assert_eq!(state.selected_category, None);
    assert_eq!(visible_ids(&state), vec![1, 2]);
}

#[test]
fn clicking_another_category_replaces_the_selection() {
    let mut state = two_items();
    handle_event(&mut state, &Event::ClickCategory(CategoryClick::Category("IDE".to_string()))).unwrap();
    handle_event(&mut state, &Event::ClickCategory(CategoryClick::Category("Tool".to_string()))).unwrap();
    assert_eq!(state.selected_category.as_deref(), Some("Tool"));
    assert_eq!(visible_ids(&state), vec![2]);
}

#[test]
fn load_error_renders_only_the_message() {
    let mut state = AppState::new(Theme::default());
    handle_event(&mut state, &Event::Observe).unwrap();
    handle_event(
        &mut state,
        &Event::WorkerResponse(WorkerResponse::Error {
            message: "network down".to_string(),
        }),
    )
    .unwrap();

    let vm = state.compute_viewmodel(30, 80);
    assert_eq!(vm.body, Body::Error(crate::ui::MessageView { text: "network down".to_string() }));
    assert_eq!(vm.search_bar, None);
}

#[test]
fn unmatched_search_names_the_query() {
    let mut h = Harness::loaded();
    h.send(Event::SearchMode);
    for c in "xyz".chars() {
        h.send(Event::Char(c));
    }
    h.drain();

    assert!(h.state.visible.is_empty());
    let Body::Home(home) = h.state.compute_viewmodel(30, 80).body else {
        panic!("expected home body");
    };
    let ListContent::NoResults(empty) = home.content else {
        panic!("expected no-results view");
    };
    assert!(empty.message.contains("xyz"));
}

#[test]
fn builtin_catalog_loads_once() {
    let mut h = Harness::new();
    assert!(h.state.load_state.is_loading());

    h.send(Event::Observe);
    h.send(Event::Observe);
    assert_eq!(h.pending.len(), 1);

    h.drain();
    assert_eq!(h.state.visible.len(), 16);
    assert_eq!(h.state.categories, vec!["IDE", "Data", "Editor", "Tool"]);

    h.send(Event::Observe);
    h.send(Event::KeyDown);
    assert!(h.pending.is_empty());
}

#[test]
fn refresh_requests_a_new_load() {
    let mut h = Harness::loaded();
    h.send(Event::ClickCategory(CategoryClick::Category("Data".to_string())));

    h.send(Event::Refresh);
    assert!(h.state.load_state.is_loading());
    assert!(matches!(h.pending.as_slice(), [WorkerMessage::LoadAll { .. }]));

    h.drain();
    assert_eq!(h.visible_titles(), vec!["DataGrip", "DataSpell"]);
}

#[test]
fn category_filter_composes_with_search() {
    let mut h = Harness::loaded();
    h.send(Event::ClickCategory(CategoryClick::Category("IDE".to_string())));
    h.send(Event::SearchMode);
    for c in "data".chars() {
        h.send(Event::Char(c));
    }
    h.drain();

    // DataGrip and DataSpell match the query but live in "Data".
    assert!(h.visible_titles().is_empty());
    assert_eq!(h.state.categories.len(), 4);

    h.send(Event::ClickCategory(CategoryClick::All));
    assert_eq!(h.visible_titles(), vec!["DataGrip", "DataSpell"]);
}

#[test]
fn out_of_order_search_responses_keep_the_latest_query() {
    let mut h = Harness::loaded();
    h.send(Event::SearchMode);
    h.send(Event::Char('r'));
    h.send(Event::Char('u'));
    assert_eq!(h.pending.len(), 2);

    let latest = h.pending.pop().unwrap();
    let stale = h.pending.pop().unwrap();
    let latest = h.worker.handle_message(latest);
    let stale = h.worker.handle_message(stale);

    h.send(Event::WorkerResponse(latest));
    let rendered = h.send(Event::WorkerResponse(stale));

    assert!(!rendered);
    assert_eq!(h.visible_titles(), vec!["RubyMine", "RustRover"]);
}

#[test]
fn exit_search_restores_full_list() {
    let mut h = Harness::loaded();
    h.send(Event::SearchMode);
    h.send(Event::Char('g'));
    h.send(Event::Char('o'));
    h.drain();
    assert!(h.visible_titles().contains(&"GoLand"));

    h.send(Event::ExitSearch);
    h.drain();
    assert_eq!(h.state.input_mode, InputMode::Normal);
    assert!(h.state.search_query.is_empty());
    assert_eq!(h.state.visible.len(), 16);
}

#[test]
fn tab_moves_focus_to_results() {
    let mut h = Harness::loaded();
    h.send(Event::SearchMode);
    h.send(Event::Char('p'));
    h.drain();
    h.send(Event::FocusResults);
    assert_eq!(h.state.input_mode, InputMode::Search(SearchFocus::Navigating));

    h.send(Event::Char('x'));
    assert_eq!(h.state.search_query, "px");
}

#[test]
fn opening_an_item_shows_its_detail() {
    let mut h = Harness::loaded();
    h.send(Event::KeyDown);
    assert!(h.send(Event::OpenSelected));
    assert_eq!(h.state.route, Route::Detail { id: 2 });

    let Body::Detail(DetailView::Found { title, category, .. }) = h.state.compute_viewmodel(30, 80).body else {
        panic!("expected detail body");
    };
    assert_eq!(title, "CLion");
    assert_eq!(category, "IDE");

    h.send(Event::KeyDown);
    assert_eq!(h.state.selected_index, 1);

    h.send(Event::Back);
    assert_eq!(h.state.route, Route::Home);
    assert_eq!(h.state.selected_favorite().map(Favorite::id), Some(2));
}

#[test]
fn worker_failure_before_load_shows_error_and_allows_retry() {
    let mut state = AppState::new(Theme::default());
    handle_event(&mut state, &Event::Observe).unwrap();
    handle_event(
        &mut state,
        &Event::WorkerResponse(WorkerResponse::Error {
            message: "catalog missing".to_string(),
        }),
    )
    .unwrap();
    assert_eq!(state.load_state, LoadState::Error("catalog missing".to_string()));

    let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
    assert!(matches!(actions.as_slice(), [Action::PostToWorker(WorkerMessage::LoadAll { .. })]));
}
