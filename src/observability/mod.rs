//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → rotating OTLP JSON file
//! ```
//!
//! - Traces go to `~/.local/share/zellij/atomic-blog/atomic-blog-otlp.json`
//! - The file rotates at 10 MiB, keeping 3 timestamped backups
//! - The filter comes from the `trace_level` config option (default `"info"`)
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and tracer provider
//! - [`otlp`]: OTLP JSON encoding
//! - [`rotating_file`]: Size-rotated line file

pub mod exporter;
mod init;
pub mod otlp;
pub mod rotating_file;

pub use init::{init_tracing, SERVICE_NAME};
