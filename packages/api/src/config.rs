//! API endpoint configuration from environment variables.

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "SMARTKITCHEN_API_URL";

/// Base URL used when nothing is configured (local backend).
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Where the SmartKitchen API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config for an explicit base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL from the environment.
    ///
    /// Native builds read `.env` and the process environment first. Every build
    /// then falls back to the value captured at compile time, since the browser
    /// has no process environment, and finally to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Some(url) = non_empty(std::env::var(API_URL_ENV).ok()) {
                return Self::new(url);
            }
        }

        let url = non_empty(option_env!("SMARTKITCHEN_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/auth/verify`.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
