use crate::api::client::ApiClient;
use crate::error::Result;
use crate::models::Store;

impl ApiClient {
    /// Storefront listing of every store, without nested products.
    pub async fn list_stores(&self) -> Result<Vec<Store>> {
        let response = self.send(self.get("/stores/")).await?;
        let stores: Vec<Store> = response.json().await?;
        Ok(stores)
    }

    /// One store with its nested products for the store page.
    pub async fn store_detail(&self, store_id: i64) -> Result<Store> {
        let path = format!("/stores/{}", store_id);
        let response = self.send(self.get(&path)).await?;
        let store: Store = response.json().await?;
        Ok(store)
    }
}
