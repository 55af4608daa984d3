use crate::upstream_validation::validate_endpoint;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_RANK_API_BASE_URL, DEFAULT_RANK_REGION,
    DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS, DEFAULT_UPSTREAM_TIMEOUT_SECS,
};

use std::fmt;

use serde::Deserialize;

/// Rank authority (advisory; faults degrade to "Unranked")
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct RankApiConfig {
    pub base_url: String,
    /// Sent verbatim in the `Authorization` header
    pub api_key: Option<String>,
    /// Region path segment, e.g. "na", "eu"
    pub region: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for RankApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_RANK_API_BASE_URL),
            api_key: None,
            region: String::from(DEFAULT_RANK_REGION),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl RankApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        validate_endpoint(
            "rank_api",
            &self.base_url,
            self.timeout_secs,
            self.connect_timeout_secs,
        )?;

        if self.region.is_empty() || !self.region.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::upstream(format!(
                "rank_api.region must be a non-empty alphanumeric code, got '{}'",
                self.region
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for RankApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("region", &self.region)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}
