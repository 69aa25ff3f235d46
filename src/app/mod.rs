//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/storage/worker layers. It implements the event-driven state machine
//! behind the home and detail screens.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Category toggle reducer and visible-item filter
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`load`]: Load state and the one-shot load request latch
//! - [`modes`]: Input mode and route types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod filter;
pub mod handler;
pub mod load;
pub mod modes;
pub mod state;

#[cfg(test)]
mod scenarios;

pub use actions::Action;
pub use filter::{filter_by_category, toggle_category, CategoryClick};
pub use handler::{handle_event, Event};
pub use load::{LoadRequestLatch, LoadState};
pub use modes::{InputMode, Route, SearchFocus};
pub use state::AppState;
