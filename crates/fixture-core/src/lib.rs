//! Core types for the commerce-fixtures dataset generator.
//!
//! This crate defines the record types shared by the generator, the
//! exporters, and the report tooling:
//!
//! - [`Product`], [`Order`], [`LineItem`], [`InventoryRecord`] - the
//!   generated records
//! - [`Category`], [`Brand`], [`Channel`], [`OrderStatus`], [`Warehouse`] -
//!   the fixed reference enumerations the generator samples from
//! - [`FixtureSpec`] - the explicit configuration object holding catalog
//!   size and sampling bounds
//!
//! All timestamps are `chrono::DateTime<Utc>` serialized as ISO-8601 with
//! millisecond precision (see [`time`]).

pub mod reference;
pub mod spec;
pub mod time;
pub mod types;

// Re-exports for convenience
pub use reference::StateCities;
pub use spec::{
    FixtureSpec, CATALOG_FILE, INVENTORY_FILE, ORDERS_FILE, PROCESSED_ORDERS_FILE,
};
pub use types::{
    Brand, Category, Channel, InventoryRecord, LineItem, Order, OrderStatus, Product,
    ShippingAddress, Warehouse,
};
