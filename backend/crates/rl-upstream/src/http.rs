//! Plumbing shared by both authority clients.

use crate::{UpstreamError, UpstreamResult};

use std::time::Duration;

use reqwest::{Client as ReqwestClient, StatusCode, Url};
use serde_json::Value;

const USER_AGENT: &str = concat!("rankline/", env!("CARGO_PKG_VERSION"));

/// Build a reqwest client with per-authority timeouts
pub(crate) fn build_client(
    timeout: Duration,
    connect_timeout: Duration,
) -> UpstreamResult<ReqwestClient> {
    Ok(ReqwestClient::builder()
        .timeout(timeout)
        .connect_timeout(connect_timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

pub(crate) fn parse_base_url(base_url: &str) -> UpstreamResult<Url> {
    let url = Url::parse(base_url)
        .map_err(|e| UpstreamError::url(format!("'{}': {}", base_url, e)))?;

    if url.cannot_be_a_base() {
        return Err(UpstreamError::url(format!(
            "'{}' cannot be used as a base URL",
            base_url
        )));
    }

    Ok(url)
}

/// Append percent-encoded path segments to `base`.
///
/// Each segment is encoded on its own, so a name containing `/`, `?` or `#`
/// can never escape its segment.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> UpstreamResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| UpstreamError::url(format!("'{}' cannot be used as a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Pull a human-readable diagnostic out of an upstream error body.
///
/// Understands `{"message": ..}`, `{"error": ..}` and `{"status": {"message": ..}}`;
/// anything else falls back to the status reason.
pub(crate) fn diagnostic_from_body(status: StatusCode, body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();

    parsed
        .as_ref()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .or_else(|| v.get("error").and_then(Value::as_str))
                .or_else(|| v.pointer("/status/message").and_then(Value::as_str))
        })
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(String::from)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        })
}

/// Send a prepared request; non-2xx answers become `UpstreamError::Status`.
pub(crate) async fn fetch_body(request: reqwest::RequestBuilder) -> UpstreamResult<String> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(UpstreamError::status(
            status,
            diagnostic_from_body(status, &body),
        ));
    }

    Ok(body)
}
