use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use tracing::info;

use crate::api::client::ApiClient;
use crate::error::Result;
use crate::models::{AuthResponse, TokenClaims};

impl ApiClient {
    /// Creates an account and returns the fresh bearer token.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        whatsapp_number: &str,
    ) -> Result<AuthResponse> {
        let body = json!({
            "username": username,
            "password": password,
            "whatsapp_number": whatsapp_number,
        });
        let response = self.send(self.post("/users/register").json(&body)).await?;
        let auth: AuthResponse = response.json().await?;
        info!("Registered account {}", username);
        Ok(auth)
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse> {
        let body = json!({ "username": username, "password": password });
        let response = self.send(self.post("/users/login").json(&body)).await?;
        let auth: AuthResponse = response.json().await?;
        info!("Logged in as {}", username);
        Ok(auth)
    }
}

/// Decodes the JWT payload segment without verifying the signature, solely
/// to read the `store_id` claim for UI convenience. The backend remains
/// the only authority on what the token is allowed to do.
pub fn decode_token_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
