//! File exporters for the commerce-fixtures datasets.
//!
//! Three formats, one module each:
//!
//! - [`jsonl`] - newline-delimited JSON, one record per line (orders)
//! - [`csv`] - CSV with a header row (inventory)
//! - [`json`] - pretty-printed JSON array (product catalog)
//!
//! All exporters overwrite the target path, stream through a buffered
//! writer, and return [`ExportMetrics`]. Writes are not atomic; a failure
//! mid-write propagates to the caller and can leave a truncated file,
//! which is acceptable for regenerable fixtures.
//!
//! # Example
//!
//! ```ignore
//! let metrics = fixture_export::jsonl::export(&orders, "orders_stream.jsonl")?;
//! println!("wrote {} records", metrics.records_written);
//! ```

pub mod csv;
pub mod json;
pub mod jsonl;

mod error;
mod metrics;

pub use error::ExportError;
pub use metrics::ExportMetrics;

/// Default buffer size for file writers.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;
