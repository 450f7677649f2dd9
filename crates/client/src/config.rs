//! Client configuration: backend location and request timeout.

use std::time::Duration;

use crate::error::ClientError;

/// Production backend.
pub const DEFAULT_API_URL: &str = "https://angebot-backend-ub6a.onrender.com/api";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// `base_url` must be an http(s) URL; a trailing slash is dropped.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "API URL must start with http:// or https://, got {base_url:?}"
            )));
        }
        if timeout.is_zero() {
            return Err(ClientError::Config("timeout must be greater than zero".into()));
        }
        Ok(Self { base_url, timeout })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
