use serde_json::Value;
use tracing::info;
use wreq::multipart::{Form, Part};

use crate::api::client::ApiClient;
use crate::error::Result;
use crate::import::submission::BulkProductSubmission;

impl ApiClient {
    /// Uploads an assembled submission as one multipart request: the
    /// textual descriptor array and store id first, then every image in
    /// submission order. The backend re-associates images positionally via
    /// each descriptor's `imagesCount`, so part order is load-bearing.
    pub async fn bulk_upload_products(&self, submission: &BulkProductSubmission) -> Result<Value> {
        let mut form = Form::new()
            .text("store_id", submission.store_id.to_string())
            .text("products", serde_json::to_string(&submission.products)?);

        for image in &submission.images {
            let part = Part::bytes(image.data.clone())
                .file_name(image.file_name.clone())
                .mime_str(&image.content_type)?;
            form = form.part("images", part);
        }

        info!(
            "Uploading {} product(s) with {} image(s) to store {}",
            submission.products.len(),
            submission.images.len(),
            submission.store_id
        );

        let response = self.send(self.post("/products/bulk").multipart(form)).await?;
        let created: Value = response.json().await?;
        Ok(created)
    }
}
