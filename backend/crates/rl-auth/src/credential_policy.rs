use crate::{AuthError, Result};

use rl_config::ValidationConfig;

/// Length bounds applied to new registrations.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub min_username_length: usize,
    pub max_username_length: usize,
    pub min_secret_length: usize,
    pub max_secret_length: usize,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self::from(&ValidationConfig::default())
    }
}

impl From<&ValidationConfig> for CredentialPolicy {
    fn from(config: &ValidationConfig) -> Self {
        Self {
            min_username_length: config.min_username_length,
            max_username_length: config.max_username_length,
            min_secret_length: config.min_secret_length,
            max_secret_length: config.max_secret_length,
        }
    }
}

impl CredentialPolicy {
    pub fn check(&self, username: &str, secret: &str) -> Result<()> {
        let username_len = username.chars().count();
        if username_len < self.min_username_length || username_len > self.max_username_length {
            return Err(AuthError::validation(
                "username",
                format!(
                    "Username must be between {} and {} characters",
                    self.min_username_length, self.max_username_length
                ),
            ));
        }

        let secret_len = secret.chars().count();
        if secret_len < self.min_secret_length || secret_len > self.max_secret_length {
            return Err(AuthError::validation(
                "secret",
                format!(
                    "Password must be between {} and {} characters",
                    self.min_secret_length, self.max_secret_length
                ),
            ));
        }

        Ok(())
    }
}
