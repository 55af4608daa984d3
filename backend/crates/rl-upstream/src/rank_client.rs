//! Rank authority client.
//!
//! `GET {base}/rank/{region}/{displayName}/{tag}` with the raw key in the
//! `Authorization` header. Only `currentTierLabel` is read from the answer.

use crate::http::{build_client, endpoint, fetch_body, parse_base_url};
use crate::UpstreamResult;

use rl_config::RankApiConfig;
use rl_core::{CanonicalIdentity, RankResolver, RankTier, UNRANKED};

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Url, header::AUTHORIZATION};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankPayload {
    #[serde(default)]
    current_tier_label: Option<String>,
}

pub struct RankAuthorityClient {
    base_url: Url,
    api_key: Option<String>,
    region: String,
    client: ReqwestClient,
}

impl RankAuthorityClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        region: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> UpstreamResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_key,
            region: region.to_string(),
            client: build_client(timeout, connect_timeout)?,
        })
    }

    pub fn from_config(config: &RankApiConfig) -> UpstreamResult<Self> {
        Self::new(
            &config.base_url,
            config.api_key.clone(),
            &config.region,
            Duration::from_secs(config.timeout_secs),
            Duration::from_secs(config.connect_timeout_secs),
        )
    }

    /// Fetch the raw tier label. `Ok(None)` means the authority answered but
    /// had no label for this player.
    pub async fn fetch_current_tier(
        &self,
        identity: &CanonicalIdentity,
    ) -> UpstreamResult<Option<String>> {
        let url = endpoint(
            &self.base_url,
            &[
                "rank",
                &self.region,
                &identity.display_name,
                identity.bare_tag(),
            ],
        )?;

        let mut request = self.client.get(url);
        if let Some(ref key) = self.api_key {
            request = request.header(AUTHORIZATION, key);
        }

        let body = fetch_body(request).await?;
        let payload: RankPayload = serde_json::from_str(&body)?;

        Ok(payload.current_tier_label)
    }
}

#[async_trait]
impl RankResolver for RankAuthorityClient {
    async fn resolve_rank(&self, identity: &CanonicalIdentity) -> RankTier {
        match self.fetch_current_tier(identity).await {
            Ok(label) => {
                let tier = RankTier::from_label(label.as_deref());
                debug!(
                    "Rank for {}#{}: {}",
                    identity.display_name, identity.tag, tier
                );
                tier
            }
            Err(e) => {
                warn!(
                    "Rank lookup for {}#{} failed, using {}: {}",
                    identity.display_name, identity.tag, UNRANKED, e
                );
                RankTier::unranked()
            }
        }
    }
}
