//! API Configuration
//!
//! The WASM bundle has no process environment, so the base URL is baked in
//! at compile time through `CRM_API_URL`.

/// Base URL used when `CRM_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Storage key holding the credential token
pub const TOKEN_KEY: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the config from the build environment
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("CRM_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Join a request path onto the base URL
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
