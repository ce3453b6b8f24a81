//! CLI argument definitions for the order report.

use clap::Args;
use fixture_core::{ORDERS_FILE, PROCESSED_ORDERS_FILE};
use std::path::PathBuf;

/// Arguments for the `report` command.
#[derive(Args, Clone, Debug)]
pub struct ReportArgs {
    /// Path to the generated orders JSONL file
    #[arg(long, default_value = ORDERS_FILE)]
    pub orders_file: PathBuf,

    /// Output path for the processed orders JSON file
    #[arg(long, default_value = PROCESSED_ORDERS_FILE)]
    pub output: PathBuf,

    /// Number of top customers to list
    #[arg(long, default_value = "10")]
    pub top: usize,
}
