use serde::{Deserialize, Serialize};

/// Response of the register and login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: Option<String>,
    pub token: String,
}

/// Claims carried in the bearer token payload. Decoded client-side without
/// verification, solely so the UI can know which store it is operating on.
/// Never an authorization input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenClaims {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub store_id: Option<i64>,
}
