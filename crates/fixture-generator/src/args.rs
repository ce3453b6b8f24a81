//! CLI argument definitions for fixture generation.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `generate` command. Defaults reproduce the canonical
/// fixture run: 50 products, 1000 orders, unseeded, written to the current
/// directory.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of products in the catalog
    #[arg(long, default_value = "50")]
    pub products: usize,

    /// Number of orders to generate
    #[arg(long, default_value = "1000")]
    pub orders: usize,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output directory for fixture files
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,
}
