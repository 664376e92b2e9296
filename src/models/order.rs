use serde::{Deserialize, Serialize};

use super::shipping::ShippingInfo;

/// Display bucket an order falls into. Derived from the backend status
/// string plus the programmatic-order flag; see the order transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderCategory {
    Shipped,
    Unshipped,
    Monitored,
}

impl std::fmt::Display for OrderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderCategory::Shipped => write!(f, "shipped"),
            OrderCategory::Unshipped => write!(f, "unshipped"),
            OrderCategory::Monitored => write!(f, "monitored"),
        }
    }
}

/// One product line inside an order detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderProductView {
    pub id: String,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub price: f64,
    pub total_price: f64,
}

/// Flat order record ready for table/detail rendering. Built exclusively
/// by the order transformer; never persisted beyond in-memory page state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderView {
    pub id: String,
    pub customer_name: String,
    pub order_number: String,
    pub price: f64,
    pub quantity: u32,
    pub category: OrderCategory,
    pub products: Vec<OrderProductView>,
    pub is_monitored: bool,
    pub created_at: String,
    pub shipping: Option<ShippingInfo>,
}

/// Aggregate counts and revenue sums for a store's orders. Recomputed by
/// re-fetching the stats endpoint, never maintained incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: u64,
    pub shipped_orders: u64,
    pub unshipped_orders: u64,
    pub monitored_orders: u64,
    pub total_revenue: f64,
    pub shipped_revenue: f64,
    pub unshipped_revenue: f64,
    pub monitored_revenue: f64,
}
