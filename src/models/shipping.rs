use serde::{Deserialize, Serialize};

/// Shipment metadata attached to an order. Copied field-for-field from the
/// backend's nested shipping object when present; every field is optional
/// because older orders predate several columns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingInfo {
    pub id: Option<i64>,
    pub customer_name: Option<String>,
    pub recipient_name: Option<String>,
    pub phone_number: Option<String>,
    pub whatsapp_number: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub shipping_status: Option<String>,
    /// Either an array of path strings (current encoding) or a JSON-encoded
    /// string of `{path}` objects (legacy encoding). Decoded by
    /// `transform::identity_images`.
    pub identity_images: Option<serde_json::Value>,
}
