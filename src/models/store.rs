use serde::{Deserialize, Serialize};

/// Store record from the listing and detail endpoints. The detail endpoint
/// nests the store's products; the listing omits them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "Products", default)]
    pub products: Vec<serde_json::Value>,
}
