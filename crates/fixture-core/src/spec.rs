//! Generation configuration.
//!
//! [`FixtureSpec`] is the explicit configuration object passed to the
//! generator; defaults reproduce the canonical fixture shape (50 products,
//! 5000-customer pool, and so on).

/// Default orders fixture file name.
pub const ORDERS_FILE: &str = "orders_stream.jsonl";

/// Default inventory fixture file name.
pub const INVENTORY_FILE: &str = "inventory_updates.csv";

/// Default product catalog fixture file name.
pub const CATALOG_FILE: &str = "product_catalog.json";

/// Default processed-orders report file name.
pub const PROCESSED_ORDERS_FILE: &str = "processed_orders.json";

/// Bounds and sizes for fixture generation.
///
/// Price bounds are half-open: generated prices lie in
/// `[min_price_cents, max_price_cents)` when expressed in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSpec {
    /// Number of products in the catalog.
    pub product_count: usize,
    /// Customer identifiers are drawn from `1..=customer_pool`.
    pub customer_pool: u32,
    /// Minimum product price, in cents (inclusive).
    pub min_price_cents: u32,
    /// Maximum product price, in cents (exclusive).
    pub max_price_cents: u32,
    /// Maximum line items per order (minimum is 1).
    pub max_items_per_order: u32,
    /// Maximum quantity per line item (minimum is 1).
    pub max_quantity: u32,
    /// Available quantity is drawn from `0..max_inventory`.
    pub max_inventory: u32,
    /// Product launch dates fall within this many days before the anchor.
    pub catalog_window_days: i64,
    /// Order timestamps fall within this many days before the anchor.
    pub order_window_days: i64,
    /// Inventory updates fall within this many days before the anchor.
    pub inventory_window_days: i64,
}

impl Default for FixtureSpec {
    fn default() -> Self {
        Self {
            product_count: 50,
            customer_pool: 5000,
            min_price_cents: 1_000,
            max_price_cents: 30_000,
            max_items_per_order: 5,
            max_quantity: 3,
            max_inventory: 500,
            catalog_window_days: 365,
            order_window_days: 30,
            inventory_window_days: 1,
        }
    }
}

impl FixtureSpec {
    /// Spec with a catalog of `product_count` products and default bounds.
    pub fn with_product_count(product_count: usize) -> Self {
        Self {
            product_count,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec() {
        let spec = FixtureSpec::default();
        assert_eq!(spec.product_count, 50);
        assert_eq!(spec.customer_pool, 5000);
        assert_eq!(spec.min_price_cents, 1_000);
        assert_eq!(spec.max_price_cents, 30_000);
    }

    #[test]
    fn test_with_product_count() {
        let spec = FixtureSpec::with_product_count(10);
        assert_eq!(spec.product_count, 10);
        assert_eq!(spec.max_inventory, FixtureSpec::default().max_inventory);
    }
}
