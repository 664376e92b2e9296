pub mod auth;
pub mod client;
pub mod orders;
pub mod products;
pub mod stores;

pub use auth::decode_token_claims;
pub use client::ApiClient;
