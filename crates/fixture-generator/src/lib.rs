//! Record generation for the commerce-fixtures datasets.
//!
//! This crate provides the [`FixtureGenerator`], which builds a product
//! catalog at construction time and then produces order and inventory
//! records that reference it.
//!
//! # Architecture
//!
//! ```text
//! FixtureSpec (counts + bounds)
//!        │
//!        ▼
//! ┌──────────────────┐
//! │ FixtureGenerator │
//! │                  │
//! │  - spec          │
//! │  - rng (StdRng)  │
//! │  - catalog       │──── generate_orders(count) ──▶ Vec<Order>
//! │  - anchor time   │──── generate_inventory()   ──▶ Vec<InventoryRecord>
//! └──────────────────┘
//! ```
//!
//! Every order line item and every inventory record references a
//! `product_id` from the catalog built at construction.
//!
//! # Example
//!
//! ```rust
//! use fixture_core::FixtureSpec;
//! use fixture_generator::FixtureGenerator;
//!
//! let mut generator = FixtureGenerator::new(FixtureSpec::default(), Some(42));
//! let orders = generator.generate_orders(100).unwrap();
//! assert_eq!(orders.len(), 100);
//! ```
//!
//! # Determinism
//!
//! Passing `Some(seed)` makes sampling deterministic; with `None` the RNG
//! is seeded from OS entropy and re-runs produce fresh data. Timestamps are
//! sampled backwards from an anchor instant (`Utc::now()` by default), so
//! fully reproducible output additionally requires pinning the anchor via
//! [`FixtureGenerator::anchored`].

pub mod args;
pub mod generator;
pub mod sampling;

mod error;

// Re-exports for convenience
pub use args::GenerateArgs;
pub use error::GeneratorError;
pub use generator::FixtureGenerator;
