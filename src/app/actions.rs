//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order, so a pure state transition never touches
//! Zellij APIs directly.
//!
//! # Example
//!
//! ```rust
//! use jetcatalog::app::Action;
//! use jetcatalog::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::PostToWorker(WorkerMessage::load_all()),
//!     Action::NavigateToDetail { id: 7 },
//! ];
//! # assert_eq!(actions.len(), 2);
//! ```

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Posts a request to the data source worker.
    ///
    /// Used for both `load all` and `search`; results come back as
    /// `Event::WorkerResponse`.
    PostToWorker(WorkerMessage),

    /// Opens the detail page of a catalog entry.
    NavigateToDetail {
        /// Catalog id of the selected entry.
        id: i64,
    },
}
