use serde::Deserialize;

/// Body of `POST /register` and `POST /login`.
///
/// Missing fields deserialize as empty and are rejected by the authenticator
/// with a validation error rather than a body rejection.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default, alias = "password")]
    pub secret: String,
}
