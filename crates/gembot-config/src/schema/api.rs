//! Remote API connection settings.

use gembot_common::{DEFAULT_API_BASE, DEFAULT_KEY_ENV};
use serde::{Deserialize, Serialize};

/// API connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Name of the environment variable holding the API key.
    pub key_env: String,
    pub base_url: String,
    /// Probe the model endpoint once when the session is opened.
    pub verify_on_connect: bool,
    pub connect_timeout_secs: u64,
    /// Whole-request timeout. Unset means the HTTP client default (none).
    pub request_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key_env: DEFAULT_KEY_ENV.to_string(),
            base_url: DEFAULT_API_BASE.to_string(),
            verify_on_connect: true,
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}
