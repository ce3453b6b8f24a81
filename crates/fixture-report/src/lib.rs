//! Downstream processing of a generated orders fixture.
//!
//! Reads an `orders_stream.jsonl` file back in, computes order totals,
//! keeps only confirmed orders, and summarizes revenue per day and
//! channel plus the top-spending customers. Mirrors what a consumer of
//! the fixtures would do first, so the generated data can be sanity
//! checked end to end.

pub mod args;
pub mod orders;
pub mod report;

mod error;

// Re-exports for convenience
pub use args::ReportArgs;
pub use error::ReportError;
pub use orders::load_orders;
pub use report::{
    daily_report, process, top_customers, CustomerSpend, DailyChannelStats, ProcessedOrder,
};
