//! Main generator for producing fixture records.

use crate::error::GeneratorError;
use crate::sampling::{self, identifier, money, timestamp};
use chrono::{DateTime, Utc};
use fixture_core::reference::STATES;
use fixture_core::{
    Brand, Category, Channel, FixtureSpec, InventoryRecord, LineItem, Order, OrderStatus, Product,
    ShippingAddress, Warehouse,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixture generator holding the configuration, the RNG, and the product
/// catalog all sampling references.
///
/// The catalog is built at construction and immutable afterward; orders
/// and inventory generated from the same instance always reference it.
pub struct FixtureGenerator {
    spec: FixtureSpec,
    rng: StdRng,
    /// Anchor instant all sampled timestamps count back from.
    anchor: DateTime<Utc>,
    catalog: Vec<Product>,
}

impl FixtureGenerator {
    /// Create a generator anchored at the current instant.
    ///
    /// With `Some(seed)` the RNG is deterministic; with `None` it is seeded
    /// from OS entropy and re-runs produce fresh data.
    pub fn new(spec: FixtureSpec, seed: Option<u64>) -> Self {
        Self::anchored(spec, seed, Utc::now())
    }

    /// Create a generator with an explicit anchor instant.
    ///
    /// Pinning both the seed and the anchor makes generation fully
    /// reproducible, timestamps included.
    pub fn anchored(spec: FixtureSpec, seed: Option<u64>, anchor: DateTime<Utc>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let catalog = build_catalog(&spec, &mut rng, anchor);
        Self {
            spec,
            rng,
            anchor,
            catalog,
        }
    }

    /// The generated product catalog.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    /// The generation configuration.
    pub fn spec(&self) -> &FixtureSpec {
        &self.spec
    }

    /// The anchor instant timestamps are sampled back from.
    pub fn anchor(&self) -> DateTime<Utc> {
        self.anchor
    }

    /// Generate `count` orders with timestamps uniform over the order
    /// window and 1 to `max_items_per_order` line items each.
    ///
    /// Line items reference catalog products and freeze the product's
    /// price at generation time.
    pub fn generate_orders(&mut self, count: usize) -> Result<Vec<Order>, GeneratorError> {
        if self.catalog.is_empty() {
            return Err(GeneratorError::EmptyCatalog);
        }

        let mut orders = Vec::with_capacity(count);
        for seq in 1..=count {
            let item_count = self.rng.gen_range(1..=self.spec.max_items_per_order);
            let mut items = Vec::with_capacity(item_count as usize);
            for _ in 0..item_count {
                let product = sampling::pick(&mut self.rng, &self.catalog);
                items.push(LineItem {
                    product_id: product.product_id.clone(),
                    quantity: self.rng.gen_range(1..=self.spec.max_quantity),
                    unit_price: product.price,
                });
            }

            let state = sampling::pick(&mut self.rng, &STATES);
            let city = sampling::pick(&mut self.rng, &state.cities);

            orders.push(Order {
                order_id: identifier::order_id(seq),
                customer_id: identifier::customer_id(
                    self.rng.gen_range(1..=self.spec.customer_pool),
                ),
                timestamp: timestamp::within_past_days(
                    &mut self.rng,
                    self.anchor,
                    self.spec.order_window_days,
                ),
                channel: *sampling::pick(&mut self.rng, &Channel::ALL),
                items,
                shipping_address: ShippingAddress {
                    country: "US".to_string(),
                    state: state.state.to_string(),
                    city: city.to_string(),
                },
                status: *sampling::pick(&mut self.rng, &OrderStatus::ALL),
            });
        }

        Ok(orders)
    }

    /// Generate exactly one inventory record per catalog product, in
    /// catalog order.
    pub fn generate_inventory(&mut self) -> Result<Vec<InventoryRecord>, GeneratorError> {
        if self.catalog.is_empty() {
            return Err(GeneratorError::EmptyCatalog);
        }

        let mut records = Vec::with_capacity(self.catalog.len());
        for product in &self.catalog {
            records.push(InventoryRecord {
                product_id: product.product_id.clone(),
                available_quantity: self.rng.gen_range(0..self.spec.max_inventory),
                warehouse_location: *sampling::pick(&mut self.rng, &Warehouse::ALL),
                last_updated: timestamp::within_past_days(
                    &mut self.rng,
                    self.anchor,
                    self.spec.inventory_window_days,
                ),
            });
        }

        Ok(records)
    }
}

/// Build the product catalog by independently sampling category, brand,
/// price, and launch date per product.
fn build_catalog(spec: &FixtureSpec, rng: &mut StdRng, anchor: DateTime<Utc>) -> Vec<Product> {
    (1..=spec.product_count)
        .map(|seq| Product {
            product_id: identifier::product_id(seq),
            category: *sampling::pick(rng, &Category::ALL),
            brand: *sampling::pick(rng, &Brand::ALL),
            price: money::price_in_cents_range(rng, spec.min_price_cents, spec.max_price_cents),
            launch_date: timestamp::within_past_days(rng, anchor, spec.catalog_window_days),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use std::collections::HashSet;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
    }

    fn seeded_generator() -> FixtureGenerator {
        FixtureGenerator::anchored(FixtureSpec::default(), Some(42), anchor())
    }

    #[test]
    fn test_catalog_size_and_ids() {
        let generator = seeded_generator();
        let catalog = generator.catalog();

        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog[0].product_id, "PROD-001");
        assert_eq!(catalog[49].product_id, "PROD-050");
    }

    #[test]
    fn test_catalog_price_bounds() {
        let generator = seeded_generator();

        for product in generator.catalog() {
            assert!(
                (10.0..300.0).contains(&product.price),
                "price out of range: {}",
                product.price
            );
            let cents = product.price * 100.0;
            assert_eq!(cents, cents.round(), "price not in whole cents");
        }
    }

    #[test]
    fn test_catalog_launch_dates_within_year() {
        let generator = seeded_generator();
        let floor = anchor() - Duration::days(365);

        for product in generator.catalog() {
            assert!(product.launch_date > floor && product.launch_date <= anchor());
        }
    }

    #[test]
    fn test_orders_reference_catalog() {
        let mut generator = seeded_generator();
        let known: HashSet<String> = generator
            .catalog()
            .iter()
            .map(|p| p.product_id.clone())
            .collect();

        let orders = generator.generate_orders(200).unwrap();
        assert_eq!(orders.len(), 200);

        for order in &orders {
            assert!(!order.items.is_empty() && order.items.len() <= 5);
            for item in &order.items {
                assert!(known.contains(&item.product_id));
                assert!((1..=3).contains(&item.quantity));
            }
        }
    }

    #[test]
    fn test_order_ids_sequential() {
        let mut generator = seeded_generator();
        let orders = generator.generate_orders(3).unwrap();

        assert_eq!(orders[0].order_id, "ORD-000001");
        assert_eq!(orders[1].order_id, "ORD-000002");
        assert_eq!(orders[2].order_id, "ORD-000003");
    }

    #[test]
    fn test_order_addresses_use_reference_cities() {
        let mut generator = seeded_generator();
        let orders = generator.generate_orders(100).unwrap();

        for order in &orders {
            let address = &order.shipping_address;
            assert_eq!(address.country, "US");
            let cities = fixture_core::reference::cities_of(&address.state)
                .unwrap_or_else(|| panic!("unknown state {}", address.state));
            assert!(cities.contains(&address.city.as_str()));
        }
    }

    #[test]
    fn test_order_timestamps_within_window() {
        let mut generator = seeded_generator();
        let floor = anchor() - Duration::days(30);

        for order in generator.generate_orders(100).unwrap() {
            assert!(order.timestamp > floor && order.timestamp <= anchor());
        }
    }

    #[test]
    fn test_line_items_freeze_catalog_price() {
        let mut generator = seeded_generator();
        let prices: Vec<(String, f64)> = generator
            .catalog()
            .iter()
            .map(|p| (p.product_id.clone(), p.price))
            .collect();

        for order in generator.generate_orders(50).unwrap() {
            for item in &order.items {
                let (_, price) = prices
                    .iter()
                    .find(|(id, _)| id == &item.product_id)
                    .unwrap();
                assert_eq!(item.unit_price, *price);
            }
        }
    }

    #[test]
    fn test_inventory_one_record_per_product() {
        let mut generator = seeded_generator();
        let records = generator.generate_inventory().unwrap();

        assert_eq!(records.len(), generator.catalog().len());
        for (record, product) in records.iter().zip(generator.catalog()) {
            assert_eq!(record.product_id, product.product_id);
            assert!(record.available_quantity < 500);
        }
    }

    #[test]
    fn test_empty_catalog_errors() {
        let mut generator =
            FixtureGenerator::anchored(FixtureSpec::with_product_count(0), Some(42), anchor());

        assert!(matches!(
            generator.generate_orders(10),
            Err(GeneratorError::EmptyCatalog)
        ));
        assert!(matches!(
            generator.generate_inventory(),
            Err(GeneratorError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = seeded_generator();
        let mut gen2 = seeded_generator();

        assert_eq!(gen1.catalog(), gen2.catalog());
        assert_eq!(
            gen1.generate_orders(20).unwrap(),
            gen2.generate_orders(20).unwrap()
        );
        assert_eq!(
            gen1.generate_inventory().unwrap(),
            gen2.generate_inventory().unwrap()
        );
    }

    #[test]
    fn test_different_seeds_differ() {
        let gen1 = FixtureGenerator::anchored(FixtureSpec::default(), Some(1), anchor());
        let gen2 = FixtureGenerator::anchored(FixtureSpec::default(), Some(2), anchor());

        assert_ne!(gen1.catalog(), gen2.catalog());
    }
}
