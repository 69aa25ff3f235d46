//! Data source worker implementation.
//!
//! This module implements the Zellij worker thread that owns the catalog and
//! answers `load all` and `search` requests without blocking the plugin's
//! rendering loop. It includes distributed tracing support for cross-thread
//! observability.

use crate::domain::error::{CatalogError, Result};
use crate::domain::Favorite;
use crate::infrastructure::paths;
use crate::storage::{Catalog, JsonCatalog};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// This struct runs on a separate thread spawned by Zellij and processes
/// messages sent from the plugin thread. The catalog is initialized lazily on
/// first message receipt.
#[derive(Serialize, Deserialize, Default)]
pub struct CatalogWorker {
    /// Catalog backend, initialized lazily on first use.
    #[serde(skip)]
    catalog: Option<Box<dyn Catalog>>,

    /// Catalog file to load instead of the built-in catalog.
    ///
    /// Set by the [`CONFIGURE_MESSAGE`] the plugin sends on load.
    #[serde(skip)]
    catalog_path: Option<PathBuf>,
}

impl CatalogWorker {
    /// Creates a worker over an existing catalog.
    #[must_use]
    pub fn with_catalog(catalog: Box<dyn Catalog>) -> Self {
        Self {
            catalog: Some(catalog),
            catalog_path: None,
        }
    }

    /// Opens the configured catalog file, or the built-in catalog when none is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or parsed.
    fn open_catalog(path: Option<&PathBuf>) -> Result<Box<dyn Catalog>> {
        let catalog = match path {
            Some(path) => JsonCatalog::open(path)?,
            None => JsonCatalog::builtin()?,
        };
        Ok(Box::new(catalog))
    }

    /// Returns the catalog backend, failing if not initialized.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog has not been initialized yet.
    fn get_catalog(&self) -> Result<&dyn Catalog> {
        self.catalog
            .as_deref()
            .ok_or_else(|| CatalogError::Worker("Catalog not initialized".to_string()))
    }

    /// Runs a catalog query and converts the outcome into a response.
    ///
    /// Errors are logged and flattened into [`WorkerResponse::Error`].
    fn query_catalog(&self, query: &str) -> WorkerResponse {
        let result = self.get_catalog().and_then(|catalog| {
            let matches = catalog.search(query)?;
            let categories = catalog.categories()?;
            Ok((matches, categories))
        });

        match result {
            Ok((matches, categories)) => {
                tracing::debug!(
                    query = %query,
                    match_count = matches.len(),
                    category_count = categories.len(),
                    "catalog query successful"
                );
                WorkerResponse::Loaded {
                    query: query.to_string(),
                    favorites: matches.into_iter().map(Favorite::from).collect(),
                    categories,
                }
            }
            Err(e) => {
                tracing::debug!(query = %query, error = %e, "catalog query failed");
                WorkerResponse::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a context guard that must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a worker message and returns the appropriate response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadAll { .. } => self.query_catalog(""),
            WorkerMessage::Search { query, .. } => self.query_catalog(&query),
        }
    }

    /// Initializes the catalog on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be opened. The next message
    /// retries, so a fixed catalog file is picked up by a refresh.
    fn ensure_catalog(&mut self) -> Result<()> {
        if self.catalog.is_none() {
            self.catalog = Some(Self::open_catalog(self.catalog_path.as_ref())?);
        }
        Ok(())
    }
}

/// Initializes tracing for the worker thread.
///
/// Uses the same configuration as the plugin thread so both write to the same file.
fn init_worker_tracing(config: &crate::Config) {
    crate::observability::init_tracing(config);
}

/// Tracks whether worker tracing has been initialized.
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

/// Name prefix of the configuration message sent before any request.
pub const CONFIGURE_MESSAGE: &str = "jetcatalog::configure";

/// Sends a response back to the plugin thread under `name`.
fn post_response(name: String, response: &WorkerResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
    }
}

impl ZellijWorker<'_> for CatalogWorker {
    /// Handles incoming messages from the plugin thread.
    ///
    /// 1. A [`CONFIGURE_MESSAGE`] carries the plugin configuration as a JSON
    ///    map; it sets up tracing and the catalog path and produces no response
    /// 2. Any other message is a JSON-serialized [`WorkerMessage`]; the catalog is
    ///    opened lazily and the response is posted back under the same name
    fn on_message(&mut self, message: String, payload: String) {
        if message == CONFIGURE_MESSAGE {
            let map: std::collections::BTreeMap<String, String> =
                serde_json::from_str(&payload).unwrap_or_default();
            let config = crate::Config::from_zellij(&map);

            if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
                init_worker_tracing(&config);
            }

            let path = paths::resolve_catalog_path(config.catalog_file.as_deref());
            if path != self.catalog_path {
                self.catalog = None;
                self.catalog_path = path;
            }
            tracing::debug!(catalog_path = ?self.catalog_path, "worker configured");
            return;
        }

        if let Err(e) = self.ensure_catalog() {
            tracing::debug!(error = %e, "failed to initialize catalog");
            post_response(message, &WorkerResponse::Error { message: e.to_string() });
            return;
        }

        let worker_message: WorkerMessage = match serde_json::from_str(&payload) {
            Ok(msg) => msg,
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                return;
            }
        };

        let response = self.handle_message(worker_message);
        post_response(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ide;

    struct BrokenCatalog;

    impl Catalog for BrokenCatalog {
        fn all(&self) -> Result<Vec<Ide>> {
            Err(CatalogError::Catalog("disk on fire".to_string()))
        }
    }

    fn builtin_worker() -> CatalogWorker {
        CatalogWorker::with_catalog(Box::new(JsonCatalog::builtin().unwrap()))
    }

    #[test]
    fn load_all_returns_full_catalog() {
        let mut worker = builtin_worker();
        let expected = JsonCatalog::builtin().unwrap().all().unwrap().len();

        match worker.handle_message(WorkerMessage::load_all()) {
            WorkerResponse::Loaded { query, favorites, categories } => {
                assert!(query.is_empty());
                assert_eq!(favorites.len(), expected);
                assert!(categories.contains(&"IDE".to_string()));
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn search_echoes_query_and_keeps_all_categories() {
        let mut worker = builtin_worker();
        let all_categories = JsonCatalog::builtin().unwrap().categories().unwrap();

        match worker.handle_message(WorkerMessage::search("xyz".to_string())) {
            WorkerResponse::Loaded { query, favorites, categories } => {
                assert_eq!(query, "xyz");
                assert!(favorites.is_empty());
                assert_eq!(categories, all_categories);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn catalog_failure_becomes_error_response() {
        let mut worker = CatalogWorker::with_catalog(Box::new(BrokenCatalog));
        let response = worker.handle_message(WorkerMessage::load_all());
        assert_eq!(
            response,
            WorkerResponse::Error {
                message: "Catalog error: disk on fire".to_string()
            }
        );
    }

    #[test]
    fn uninitialized_worker_reports_error() {
        let mut worker = CatalogWorker::default();
        let response = worker.handle_message(WorkerMessage::load_all());
        assert!(matches!(response, WorkerResponse::Error { message } if message.contains("not initialized")));
    }

    #[test]
    fn ensure_catalog_opens_builtin_by_default() {
        let mut worker = CatalogWorker::default();
        worker.ensure_catalog().unwrap();
        assert!(matches!(
            worker.handle_message(WorkerMessage::load_all()),
            WorkerResponse::Loaded { .. }
        ));
    }

    #[test]
    fn ensure_catalog_fails_for_missing_file() {
        let mut worker = CatalogWorker {
            catalog: None,
            catalog_path: Some(PathBuf::from("/no/such/catalog.json")),
        };
        assert!(matches!(worker.ensure_catalog(), Err(CatalogError::Io(_))));
        assert!(worker.catalog.is_none());
    }
}
