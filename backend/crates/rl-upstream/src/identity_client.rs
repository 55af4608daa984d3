//! Identity authority client.
//!
//! `GET {base}/identity/{displayName}/{tag}` with a bearer service token.
//! The authority answers with the canonical `{displayName, tag}` pair.

use crate::http::{build_client, endpoint, fetch_body, parse_base_url};
use crate::{UpstreamError, UpstreamResult};

use rl_config::IdentityApiConfig;
use rl_core::{CanonicalIdentity, IdentityResolutionError, IdentityResolver, strip_tag_separator};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Url};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IdentityPayload {
    display_name: String,
    tag: String,
}

pub struct IdentityAuthorityClient {
    base_url: Url,
    api_key: Option<String>,
    client: ReqwestClient,
}

impl IdentityAuthorityClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Authority root (e.g., "https://identity.example.com")
    /// * `api_key` - Optional service token for the `Authorization` header
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> UpstreamResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_key,
            client: build_client(timeout, connect_timeout)?,
        })
    }

    pub fn from_config(config: &IdentityApiConfig) -> UpstreamResult<Self> {
        Self::new(
            &config.base_url,
            config.api_key.clone(),
            Duration::from_secs(config.timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    /// Look up the canonical identity for a claimed name and tag.
    ///
    /// A leading `#` on the tag is stripped before the request is built.
    pub async fn fetch_identity(
        &self,
        display_name: &str,
        tag: &str,
    ) -> UpstreamResult<CanonicalIdentity> {
        let url = endpoint(
            &self.base_url,
            &["identity", display_name, strip_tag_separator(tag)],
        )?;

        let mut request = self.client.get(url);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let body = fetch_body(request).await?;
        let payload: IdentityPayload = serde_json::from_str(&body)?;

        if payload.display_name.is_empty() || payload.tag.is_empty() {
            return Err(UpstreamError::payload(
                "identity response has an empty displayName or tag",
            ));
        }

        Ok(CanonicalIdentity::new(payload.display_name, payload.tag))
    }
}

#[async_trait]
impl IdentityResolver for IdentityAuthorityClient {
    async fn resolve_identity(
        &self,
        display_name: &str,
        tag: &str,
    ) -> Result<CanonicalIdentity, IdentityResolutionError> {
        match self.fetch_identity(display_name, tag).await {
            Ok(identity) => {
                debug!(
                    "Resolved {}#{} to {}#{}",
                    display_name,
                    strip_tag_separator(tag),
                    identity.display_name,
                    identity.tag
                );
                Ok(identity)
            }
            Err(e) => {
                warn!(
                    "Identity lookup for {}#{} failed: {}",
                    display_name,
                    strip_tag_separator(tag),
                    e
                );
                Err(IdentityResolutionError::new(e.diagnostic()))
            }
        }
    }
}
