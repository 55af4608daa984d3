use crate::upstream_validation::validate_endpoint;
use crate::{
    ConfigErrorResult, DEFAULT_IDENTITY_API_BASE_URL, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
    DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

use std::fmt;

use serde::Deserialize;

/// Identity authority (hard dependency of account linking)
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct IdentityApiConfig {
    pub base_url: String,
    /// Service token, sent as `Authorization: Bearer <key>`
    pub api_key: Option<String>,
    /// Whole-request timeout
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for IdentityApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_IDENTITY_API_BASE_URL),
            api_key: None,
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl IdentityApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_endpoint(
            "identity_api",
            &self.base_url,
            self.timeout_secs,
            self.connect_timeout_secs,
        )
    }
}

impl fmt::Debug for IdentityApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
