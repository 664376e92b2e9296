use serde_json::Value;
use tracing::error;
use wreq::{Client, RequestBuilder, Response};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Fallback shown when the backend fails without a message of its own.
const GENERIC_BACKEND_ERROR: &str = "حدث خطأ غير متوقع";

/// Typed gateway to the TMC backend. Owns the HTTP client, the origin
/// configuration, and the optional bearer token that is attached to every
/// outgoing request. One method per backend operation lives in the
/// resource modules (`auth`, `orders`, `products`, `stores`).
pub struct ApiClient {
    client: Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(ApiClient {
            client,
            config,
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base(), path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.authed(self.client.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.authed(self.client.post(self.url(path)))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.authed(self.client.put(self.url(path)))
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Sends a prepared request and normalizes failures: transport errors
    /// and non-2xx statuses both become `ClientError` kinds, with the
    /// backend's own `message` preferred over the generic fallback. Errors
    /// are logged here, then re-thrown; callers decide what the user sees.
    /// Nothing is retried.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| extract_backend_message(&body))
            .unwrap_or_else(|| GENERIC_BACKEND_ERROR.to_string());

        error!("Backend request failed with {}: {}", status, message);
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

fn extract_backend_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string())
}
