use serde_json::{Value, json};
use tracing::info;

use crate::api::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// Fetches a store's orders together with the aggregate statistics
    /// block. The raw payload is handed to `transform::orders` by the
    /// caller; the gateway does not reshape it.
    pub async fn store_orders_stats(&self, store_id: i64) -> Result<Value> {
        let path = format!("/orders/store/{}/stats", store_id);
        let response = self.send(self.get(&path)).await?;
        let payload: Value = response.json().await?;
        Ok(payload)
    }

    /// Moves an order to a new shipping status and returns the updated
    /// order as the backend sees it.
    pub async fn update_order_status(&self, order_id: i64, status: &str) -> Result<Value> {
        let path = format!("/orders/ship/{}", order_id);
        let response = self
            .send(self.put(&path).json(&json!({ "status": status })))
            .await?;
        let updated: Value = response.json().await?;
        info!("Order {} moved to status {}", order_id, status);
        Ok(updated)
    }
}
