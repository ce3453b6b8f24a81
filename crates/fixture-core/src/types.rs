//! Record types for the generated datasets.
//!
//! Each type serializes to the exact wire format consumed by downstream
//! fixtures: enum variants carry serde renames where the wire string
//! differs from the Rust name, and timestamps go through [`crate::time`].

use crate::time;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Home,
    Sports,
    Books,
}

impl Category {
    /// All categories, in sampling order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Clothing,
        Category::Home,
        Category::Sports,
        Category::Books,
    ];
}

/// Product brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brand {
    TechCorp,
    StyleCo,
    HomeGoods,
    SportsPro,
    ReadMore,
}

impl Brand {
    /// All brands, in sampling order.
    pub const ALL: [Brand; 5] = [
        Brand::TechCorp,
        Brand::StyleCo,
        Brand::HomeGoods,
        Brand::SportsPro,
        Brand::ReadMore,
    ];
}

/// Sales channel an order was placed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Web,
    Mobile,
    Api,
}

impl Channel {
    /// All channels, in sampling order.
    pub const ALL: [Channel; 3] = [Channel::Web, Channel::Mobile, Channel::Api];

    /// Wire name of the channel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Web => "web",
            Channel::Mobile => "mobile",
            Channel::Api => "api",
        }
    }
}

/// Order fulfillment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in sampling order.
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Confirmed,
        OrderStatus::Pending,
        OrderStatus::Cancelled,
    ];
}

/// Warehouse an inventory record is held at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Warehouse {
    #[serde(rename = "WH-SF")]
    SanFrancisco,
    #[serde(rename = "WH-NY")]
    NewYork,
    #[serde(rename = "WH-CHI")]
    Chicago,
    #[serde(rename = "WH-MIA")]
    Miami,
}

impl Warehouse {
    /// All warehouses, in sampling order.
    pub const ALL: [Warehouse; 4] = [
        Warehouse::SanFrancisco,
        Warehouse::NewYork,
        Warehouse::Chicago,
        Warehouse::Miami,
    ];
}

/// A catalog product. Generated once per run; immutable afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Sequential identifier, zero-padded (`PROD-001`, ...).
    pub product_id: String,
    pub category: Category,
    pub brand: Brand,
    /// Unit price with exactly 2 decimal places.
    pub price: f64,
    #[serde(with = "time")]
    pub launch_date: DateTime<Utc>,
}

/// A single order line referencing a catalog product.
///
/// `unit_price` is frozen at order time; it does not track later catalog
/// prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Shipping destination. Country is always `"US"`; state and city come
/// from the fixed table in [`crate::reference`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingAddress {
    pub country: String,
    pub state: String,
    pub city: String,
}

/// A generated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Sequential identifier, zero-padded to 6 digits (`ORD-000001`, ...).
    pub order_id: String,
    /// Customer identifier formatted `CUST-{n}`.
    pub customer_id: String,
    #[serde(with = "time")]
    pub timestamp: DateTime<Utc>,
    pub channel: Channel,
    pub items: Vec<LineItem>,
    pub shipping_address: ShippingAddress,
    pub status: OrderStatus,
}

/// Stock level for one catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub product_id: String,
    pub available_quantity: u32,
    pub warehouse_location: Warehouse,
    #[serde(with = "time")]
    pub last_updated: DateTime<Utc>,
}
