//! OpenTelemetry-based observability with file-based trace export.
//!
//! Traces are written as OTLP JSON lines for offline analysis:
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Files
//! ```
//!
//! # Features
//!
//! - **File-Based Export**: `~/.local/share/zellij/jetcatalog/jetcatalog-otlp.json`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Cross-Thread Traces**: Worker spans join the plugin trace that sent the
//!   request (see [`crate::worker::TraceContext`])
//!
//! # Configuration
//!
//! The `trace_level` plugin option is an `EnvFilter` directive such as
//! `"debug"` or `"jetcatalog=trace"`. Default: `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: Custom OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;

/// Service and instrumentation scope name written to every trace batch.
pub const SERVICE_NAME: &str = "JetCatalog";

/// File name of the trace file inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "jetcatalog-otlp.json";
