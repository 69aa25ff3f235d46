//! Data source worker for asynchronous catalog access.
//!
//! The worker owns the catalog and answers `load all` and `search` requests on a
//! Zellij worker thread, posting results back to the plugin thread where they
//! become `LoadState` transitions.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{CatalogWorker, CONFIGURE_MESSAGE};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
