use serde::{Deserialize, Serialize};

/// Flat product record for storefront and merchant catalog rendering.
/// Image paths are already resolved to absolute URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub discount_percentage: Option<f64>,
    /// Price after applying the discount, rounded to two decimals. Display
    /// convenience only; the backend recomputes authoritative pricing.
    pub final_price: f64,
    pub stock_quantity: u32,
    pub images: Vec<String>,
}

/// One line in the consumer cart view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemView {
    pub product_id: String,
    pub name: String,
    pub image: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub total: f64,
}
