pub mod authenticator;
pub mod credential_policy;
pub mod error;
pub mod password;

pub use authenticator::Authenticator;
pub use credential_policy::CredentialPolicy;
pub use error::{AuthError, INVALID_CREDENTIALS_MESSAGE, Result};
pub use password::{hash_secret, verify_secret};

#[cfg(test)]
mod tests;
