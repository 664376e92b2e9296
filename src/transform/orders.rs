use serde_json::Value;
use tracing::warn;

use crate::models::{OrderCategory, OrderProductView, OrderStats, OrderView, ShippingInfo};

/// Shown when an order has no shipping record to name the customer.
const UNKNOWN_CUSTOMER: &str = "غير معروف";
/// Fixed placeholder glyph for product thumbnails the backend does not send.
const PRODUCT_GLYPH: &str = "📦";
/// Name of the synthetic product line for orders with no item rows.
const FALLBACK_PRODUCT_NAME: &str = "منتج";

// Tolerant field readers: the backend sends numbers as numbers or strings
// depending on the column, and older rows omit fields entirely.

fn get_str(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("")
        .to_string()
}

fn get_f64(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn get_u32(value: &Value, key: &str) -> u32 {
    match value.get(key) {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

fn get_bool(value: &Value, key: &str) -> bool {
    match value.get(key) {
        Some(Value::Bool(b)) => *b,
        // MySQL-backed booleans arrive as 0/1
        Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
        _ => false,
    }
}

fn get_id(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Converts one store-orders-stats payload (`{allOrders: {orders: [...]}}`)
/// into flat order records. Pure: no I/O, input never mutated, and every
/// field may be absent without failing — this is the sole boundary
/// shielding the UI from backend shape drift.
pub fn transform_orders(payload: &Value) -> Vec<OrderView> {
    let orders = payload
        .get("allOrders")
        .and_then(|v| v.get("orders"))
        .and_then(|v| v.as_array());

    match orders {
        Some(orders) => orders.iter().map(transform_order).collect(),
        None => {
            warn!("Order payload missing allOrders.orders, rendering empty list");
            Vec::new()
        }
    }
}

/// Flattens a single backend order into its view record.
pub fn transform_order(order: &Value) -> OrderView {
    let id = get_id(order, "id");
    let total_price = get_f64(order, "total_price");
    let status = get_str(order, "status");

    // Two independent signals mark an order as monitored; either suffices.
    let is_monitored = status == "monitored" || get_bool(order, "is_programmatic");

    let category = if is_monitored {
        OrderCategory::Monitored
    } else if status == "shipped" {
        OrderCategory::Shipped
    } else {
        OrderCategory::Unshipped
    };

    let shipping_value = order.get("shipping").or_else(|| order.get("Shipping"));

    let customer_name = shipping_value
        .map(|s| get_str(s, "customer_name"))
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string());

    let items = order
        .get("OrderItems")
        .and_then(|v| v.as_array())
        .map(|a| a.as_slice())
        .unwrap_or_default();

    let quantity: u32 = items.iter().map(|item| get_u32(item, "quantity")).sum();

    let products = if items.is_empty() {
        // The detail view never renders an empty product list; stand in a
        // single line carrying the order's total
        vec![OrderProductView {
            id: id.clone(),
            name: FALLBACK_PRODUCT_NAME.to_string(),
            image: PRODUCT_GLYPH.to_string(),
            quantity: 1,
            price: total_price,
            total_price,
        }]
    } else {
        items.iter().map(transform_order_item).collect()
    };

    let shipping = shipping_value
        .cloned()
        .and_then(|v| serde_json::from_value::<ShippingInfo>(v).ok());

    let created_at = {
        let created = get_str(order, "createdAt");
        if created.is_empty() {
            get_str(order, "created_at")
        } else {
            created
        }
    };

    OrderView {
        order_number: format!("#{}", id),
        id,
        customer_name,
        price: total_price,
        quantity,
        category,
        products,
        is_monitored,
        created_at,
        shipping,
    }
}

fn transform_order_item(item: &Value) -> OrderProductView {
    let price = get_f64(item, "price_at_time");
    let quantity = get_u32(item, "quantity");

    let name = item
        .get("Product")
        .map(|p| get_str(p, "name"))
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| get_str(item, "name"));
    let name = if name.is_empty() {
        FALLBACK_PRODUCT_NAME.to_string()
    } else {
        name
    };

    OrderProductView {
        id: get_id(item, "id"),
        name,
        image: PRODUCT_GLYPH.to_string(),
        quantity,
        price,
        total_price: price * quantity as f64,
    }
}

/// Reads the aggregate block of the stats payload. Absent counters default
/// to zero; the UI re-fetches rather than maintaining these incrementally.
pub fn transform_stats(payload: &Value) -> OrderStats {
    let stats = match payload.get("statistics") {
        Some(stats) => stats,
        None => return OrderStats::default(),
    };

    let count = |key: &str| stats.get(key).and_then(|v| v.as_u64()).unwrap_or(0);

    OrderStats {
        total_orders: count("totalOrders"),
        shipped_orders: count("shippedOrders"),
        unshipped_orders: count("unshippedOrders"),
        monitored_orders: count("monitoredOrders"),
        total_revenue: get_f64(stats, "totalRevenue"),
        shipped_revenue: get_f64(stats, "shippedRevenue"),
        unshipped_revenue: get_f64(stats, "unshippedRevenue"),
        monitored_revenue: get_f64(stats, "monitoredRevenue"),
    }
}
