//! Error types for order report processing.

use thiserror::Error;

/// Errors that can occur while loading or processing an orders file.
#[derive(Error, Debug)]
pub enum ReportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line in the orders file was not a valid order object.
    #[error("invalid order on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}
