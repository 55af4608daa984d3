use serde::Deserialize;

/// `GET /link-account?username=..&displayName=..&tag=..`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAccountQuery {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub display_name: String,

    /// Accepted with or without the leading `#`
    #[serde(default)]
    pub tag: String,
}
