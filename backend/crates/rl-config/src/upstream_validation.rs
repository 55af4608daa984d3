use crate::{
    ConfigError, ConfigErrorResult, MAX_UPSTREAM_TIMEOUT_SECS, MIN_UPSTREAM_TIMEOUT_SECS,
};

/// Shared checks for an upstream API section
pub(crate) fn validate_endpoint(
    section: &str,
    base_url: &str,
    timeout_secs: u64,
    connect_timeout_secs: u64,
) -> ConfigErrorResult<()> {
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::upstream(format!(
            "{}.base_url must start with http:// or https://, got '{}'",
            section, base_url
        )));
    }

    for (name, value) in [
        ("timeout_secs", timeout_secs),
        ("connect_timeout_secs", connect_timeout_secs),
    ] {
        if !(MIN_UPSTREAM_TIMEOUT_SECS..=MAX_UPSTREAM_TIMEOUT_SECS).contains(&value) {
            return Err(ConfigError::upstream(format!(
                "{}.{} must be {}-{}, got {}",
                section, name, MIN_UPSTREAM_TIMEOUT_SECS, MAX_UPSTREAM_TIMEOUT_SECS, value
            )));
        }
    }

    if connect_timeout_secs > timeout_secs {
        return Err(ConfigError::upstream(format!(
            "{}.connect_timeout_secs ({}) cannot exceed timeout_secs ({})",
            section, connect_timeout_secs, timeout_secs
        )));
    }

    Ok(())
}
