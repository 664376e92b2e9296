use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Backend origin configuration. `base_url` serves static assets
/// (`/uploads/...` image paths are resolved against it); `api_url`, when
/// set, is a separate origin for REST calls, otherwise `base_url` is used
/// for both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_url: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ClientConfig {
            base_url: base_url.into(),
            api_url: None,
        }
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ClientError::MissingConfig("config file"))?;
        let config: ClientConfig =
            toml::from_str(&content).map_err(|_| ClientError::MissingConfig("config file"))?;
        Ok(config)
    }

    /// Reads `TMC_BASE_URL` (required) and `TMC_API_URL` (optional) from the
    /// environment. Callers load `.env` first via `dotenv::dotenv()`.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("TMC_BASE_URL").map_err(|_| ClientError::MissingConfig("TMC_BASE_URL"))?;
        let api_url = std::env::var("TMC_API_URL").ok();
        Ok(ClientConfig { base_url, api_url })
    }

    /// Origin used for REST calls.
    pub fn api_base(&self) -> &str {
        self.api_url
            .as_deref()
            .unwrap_or(&self.base_url)
            .trim_end_matches('/')
    }

    /// Resolves a backend image path to an absolute URL. The backend stores
    /// relative `/uploads/...` paths; anything already absolute passes
    /// through untouched.
    pub fn absolute_image_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_image_url_resolution() {
        let config = ClientConfig::new("https://api.tmc.example/");

        assert_eq!(
            config.absolute_image_url("/uploads/products/a.jpg"),
            "https://api.tmc.example/uploads/products/a.jpg"
        );
        assert_eq!(
            config.absolute_image_url("uploads/products/a.jpg"),
            "https://api.tmc.example/uploads/products/a.jpg"
        );
        assert_eq!(
            config.absolute_image_url("https://cdn.example/x.png"),
            "https://cdn.example/x.png"
        );
    }

    #[test]
    fn test_api_base_falls_back_to_base_url() {
        let mut config = ClientConfig::new("https://tmc.example");
        assert_eq!(config.api_base(), "https://tmc.example");

        config.api_url = Some("https://api.tmc.example/".to_string());
        assert_eq!(config.api_base(), "https://api.tmc.example");
    }
}
