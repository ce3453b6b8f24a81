//! Command-line interface for commerce-fixtures
//!
//! # Usage Examples
//!
//! ## Generate fixtures
//! ```bash
//! # Canonical run: 50 products, 1000 orders, written to the current directory
//! commerce-fixtures generate
//!
//! # Larger, reproducible run into a target directory
//! commerce-fixtures generate \
//!   --products 200 \
//!   --orders 10000 \
//!   --seed 42 \
//!   --output-dir fixtures/
//! ```
//!
//! ## Report on generated orders
//! ```bash
//! commerce-fixtures report \
//!   --orders-file fixtures/orders_stream.jsonl \
//!   --output fixtures/processed_orders.json \
//!   --top 10
//! ```
//!
//! Log verbosity is controlled through `RUST_LOG`
//! (e.g. `RUST_LOG=info commerce-fixtures generate`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use fixture_core::{FixtureSpec, CATALOG_FILE, INVENTORY_FILE, ORDERS_FILE};
use fixture_generator::{FixtureGenerator, GenerateArgs};
use fixture_report::ReportArgs;

#[derive(Parser)]
#[command(name = "commerce-fixtures")]
#[command(about = "A tool for synthesizing fake e-commerce datasets as test fixtures")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the orders, inventory, and product catalog fixtures
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Summarize a generated orders file and write processed orders
    Report {
        #[command(flatten)]
        args: ReportArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args),
        Commands::Report { args } => run_report(args),
    }
}

fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    tracing::info!(
        "Generating fixtures: {} products, {} orders (seed={:?})",
        args.products,
        args.orders,
        args.seed
    );

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", args.output_dir))?;

    let spec = FixtureSpec::with_product_count(args.products);
    let mut generator = FixtureGenerator::new(spec, args.seed);

    let orders = generator
        .generate_orders(args.orders)
        .context("Failed to generate orders")?;
    let orders_path = args.output_dir.join(ORDERS_FILE);
    let orders_metrics = fixture_export::jsonl::export(&orders, &orders_path)
        .with_context(|| format!("Failed to write {orders_path:?}"))?;

    let inventory = generator
        .generate_inventory()
        .context("Failed to generate inventory")?;
    let inventory_path = args.output_dir.join(INVENTORY_FILE);
    let inventory_metrics = fixture_export::csv::export(&inventory, &inventory_path)
        .with_context(|| format!("Failed to write {inventory_path:?}"))?;

    let catalog_path = args.output_dir.join(CATALOG_FILE);
    let catalog_metrics = fixture_export::json::export(generator.catalog(), &catalog_path)
        .with_context(|| format!("Failed to write {catalog_path:?}"))?;

    println!("Fixture generation complete!");
    println!("Files created:");
    println!(
        "- {} ({} orders)",
        orders_path.display(),
        orders_metrics.records_written
    );
    println!(
        "- {} ({} products)",
        inventory_path.display(),
        inventory_metrics.records_written
    );
    println!(
        "- {} ({} products)",
        catalog_path.display(),
        catalog_metrics.records_written
    );

    Ok(())
}

fn run_report(args: ReportArgs) -> anyhow::Result<()> {
    let orders = fixture_report::load_orders(&args.orders_file)
        .with_context(|| format!("Failed to load orders from {:?}", args.orders_file))?;
    tracing::info!(
        "Loaded {} orders from {:?}",
        orders.len(),
        args.orders_file
    );

    let processed = fixture_report::process(&orders, chrono::Utc::now());
    println!(
        "{} of {} orders confirmed",
        processed.len(),
        orders.len()
    );

    println!("\nDaily revenue by channel:");
    println!("{:<12} {:<8} {:>8} {:>12} {:>12} {:>10}", "date", "channel", "orders", "revenue", "avg value", "customers");
    for row in fixture_report::daily_report(&processed) {
        println!(
            "{:<12} {:<8} {:>8} {:>12.2} {:>12.2} {:>10}",
            row.date.to_string(),
            row.channel.as_str(),
            row.order_count,
            row.revenue,
            row.average_order_value,
            row.unique_customers
        );
    }

    println!("\nTop {} customers:", args.top);
    for entry in fixture_report::top_customers(&processed, args.top) {
        println!("{:<12} {:>12.2}", entry.customer_id, entry.total_spend);
    }

    let metrics = fixture_export::json::export(&processed, &args.output)
        .with_context(|| format!("Failed to write {:?}", args.output))?;
    println!(
        "\nWrote {} processed orders to {}",
        metrics.records_written,
        args.output.display()
    );

    Ok(())
}
