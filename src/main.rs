//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the JetCatalog
//! library and the Zellij plugin system. It implements the `ZellijPlugin` and
//! `ZellijWorker` traits to handle Zellij events and lifecycle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │              │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  CatalogWorker   │   │  ← Catalog loading and search
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, `CustomMessage`, `PermissionRequestResult`
//! 3. **Permissions**: Configure the worker, then observe the load state so the
//!    dispatcher posts the single `LoadAll` request
//! 4. **Update**: Handle events, delegate to library layer
//! 5. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Home screen, normal mode:
//! - `j`/`Down`, `k`/`Up`, `Ctrl+n`/`Ctrl+p`: Move selection
//! - `h`/`Left`, `l`/`Right`: Move category cursor
//! - `Space`: Toggle the category under the cursor
//! - `Enter`: Open detail
//! - `/`: Search
//! - `r`: Reload catalog
//! - `q`: Close plugin
//!
//! Search mode:
//! - Typing: characters edit the query, `Tab` focuses results
//! - Navigating: `j`/`k` move, `/` returns to the query
//! - `Esc`: Exit search and clear the query
//!
//! Detail screen:
//! - `Esc`/`Backspace`/`q`: Back to the home screen

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use jetcatalog::worker::{CatalogWorker, WorkerMessage, WorkerResponse, CONFIGURE_MESSAGE};
use jetcatalog::{handle_event, Action, Config, Event, InputMode, Route, SearchFocus};

register_plugin!(State);
register_worker!(CatalogWorker, catalog_worker, CATALOG_WORKER);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like worker
/// communication.
struct State {
    /// Core application state from library layer.
    app: jetcatalog::AppState,

    /// Worker thread identifier for IPC messaging.
    worker_name: String,

    /// Raw plugin configuration, forwarded to the worker once permissions resolve.
    configuration: BTreeMap<String, String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: jetcatalog::initialize(&Config::default()),
            worker_name: "catalog".to_string(),
            configuration: BTreeMap::new(),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Parses configuration, initializes application state, requests
    /// permissions and subscribes to events. The catalog is requested once
    /// the permission result arrives.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        jetcatalog::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = jetcatalog::initialize(&config);
        self.configuration = configuration;

        request_permission(&[
            PermissionType::ReadApplicationState,
            PermissionType::ChangeApplicationState,
        ]);

        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match self.map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                Event::Observe
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        jetcatalog::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs `event` through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current route and mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if let Route::Detail { .. } = self.app.route {
            return match key.bare_key {
                BareKey::Esc | BareKey::Backspace | BareKey::Char('q') => Some(Event::Back),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key.bare_key),
            InputMode::Search(SearchFocus::Typing) => Self::map_typing_key(key.bare_key),
            InputMode::Search(SearchFocus::Navigating) => Self::map_navigating_key(key.bare_key),
        }
    }

    fn map_normal_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Left | BareKey::Char('h') => Event::CategoryLeft,
            BareKey::Right | BareKey::Char('l') => Event::CategoryRight,
            BareKey::Char(' ') => Event::ClickFocusedCategory,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Escape,
            _ => return None,
        })
    }

    fn map_typing_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Tab => Event::FocusResults,
            BareKey::Char('/') => Event::FocusSearchBar,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Esc => Event::ExitSearch,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn map_navigating_key(key: BareKey) -> Option<Event> {
        Some(match key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Char('/') => Event::FocusSearchBar,
            BareKey::Enter => Event::OpenSelected,
            BareKey::Esc => Event::ExitSearch,
            _ => return None,
        })
    }

    /// Forwards the configuration to the worker once permissions resolve.
    ///
    /// The catalog is readable either way, so a denial only limits hiding the
    /// plugin pane.
    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => tracing::debug!("permissions granted"),
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - plugin functionality limited");
            }
        }

        match serde_json::to_string(&self.configuration) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(self.worker_name.clone()),
                name: CONFIGURE_MESSAGE.to_string(),
                payload,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker configuration"),
        }
    }

    /// Maps custom message events to application events.
    fn map_custom_message_event(&self, message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != self.worker_name {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    /// Posts a message to the worker thread as JSON.
    ///
    /// Serialization errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(&message) {
            Ok(payload) => {
                tracing::debug!(query = ?message.query(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(self.worker_name.clone()),
                    name: self.worker_name.clone(),
                    payload,
                });
            }
            Err(e) => {
                tracing::debug!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Executes an action returned from event handling.
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `PostToWorker`: Send IPC message to worker thread
    /// - `NavigateToDetail`: Switch the route to the detail screen
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(ref message) => self.post_worker_message(message),
            Action::NavigateToDetail { id } => self.app.open_detail(*id),
        }
    }
}
