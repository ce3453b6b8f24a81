//! Order totals, daily revenue statistics, and top customers.

use chrono::{DateTime, NaiveDate, Utc};
use fixture_core::{time, Channel, Order, OrderStatus};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

/// An order enriched with its total and a processing timestamp.
///
/// Serializes as the original order object plus `order_total` and
/// `processed_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedOrder {
    #[serde(flatten)]
    pub order: Order,
    /// Sum of `quantity * unit_price` over the order's line items.
    pub order_total: f64,
    #[serde(with = "time")]
    pub processed_at: DateTime<Utc>,
}

/// Revenue statistics for one (date, channel) bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyChannelStats {
    pub date: NaiveDate,
    pub channel: Channel,
    pub order_count: u64,
    pub revenue: f64,
    pub average_order_value: f64,
    pub unique_customers: u64,
}

/// A customer ranked by total spend across their confirmed orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerSpend {
    pub customer_id: String,
    pub total_spend: f64,
}

/// Total value of an order's line items.
pub fn order_total(order: &Order) -> f64 {
    order
        .items
        .iter()
        .map(|item| f64::from(item.quantity) * item.unit_price)
        .sum()
}

/// Compute totals, stamp `processed_at`, and keep only confirmed orders.
pub fn process(orders: &[Order], processed_at: DateTime<Utc>) -> Vec<ProcessedOrder> {
    orders
        .iter()
        .filter(|order| order.status == OrderStatus::Confirmed)
        .map(|order| ProcessedOrder {
            order: order.clone(),
            order_total: order_total(order),
            processed_at,
        })
        .collect()
}

/// Aggregate processed orders per (order date, channel), sorted by date
/// then channel.
pub fn daily_report(processed: &[ProcessedOrder]) -> Vec<DailyChannelStats> {
    struct Bucket<'a> {
        revenue: f64,
        order_count: u64,
        customers: HashSet<&'a str>,
    }

    let mut buckets: BTreeMap<(NaiveDate, Channel), Bucket<'_>> = BTreeMap::new();
    for entry in processed {
        let key = (entry.order.timestamp.date_naive(), entry.order.channel);
        let bucket = buckets.entry(key).or_insert_with(|| Bucket {
            revenue: 0.0,
            order_count: 0,
            customers: HashSet::new(),
        });
        bucket.revenue += entry.order_total;
        bucket.order_count += 1;
        bucket.customers.insert(entry.order.customer_id.as_str());
    }

    buckets
        .into_iter()
        .map(|((date, channel), bucket)| DailyChannelStats {
            date,
            channel,
            order_count: bucket.order_count,
            revenue: bucket.revenue,
            average_order_value: bucket.revenue / bucket.order_count as f64,
            unique_customers: bucket.customers.len() as u64,
        })
        .collect()
}

/// The `limit` highest-spending customers, ties broken by customer id for
/// a stable order.
pub fn top_customers(processed: &[ProcessedOrder], limit: usize) -> Vec<CustomerSpend> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for entry in processed {
        *totals.entry(entry.order.customer_id.as_str()).or_insert(0.0) += entry.order_total;
    }

    let mut ranked: Vec<CustomerSpend> = totals
        .into_iter()
        .map(|(customer_id, total_spend)| CustomerSpend {
            customer_id: customer_id.to_string(),
            total_spend,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.total_spend
            .partial_cmp(&a.total_spend)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.customer_id.cmp(&b.customer_id))
    });
    ranked.truncate(limit);
    ranked
}
