use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Credential policy constraints
pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 256;
pub const DEFAULT_MIN_USERNAME_LENGTH: usize = 1;
pub const DEFAULT_MAX_USERNAME_LENGTH: usize = 64;

pub const MIN_SECRET_LENGTH: usize = 1;
pub const MAX_SECRET_LENGTH: usize = 4096;
pub const DEFAULT_MIN_SECRET_LENGTH: usize = 1;
pub const DEFAULT_MAX_SECRET_LENGTH: usize = 1024;

/// Registration policy for usernames and secrets.
///
/// Defaults are permissive: anything non-empty within the upper bounds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub min_username_length: usize,
    pub max_username_length: usize,
    pub min_secret_length: usize,
    pub max_secret_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_username_length: DEFAULT_MIN_USERNAME_LENGTH,
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
            min_secret_length: DEFAULT_MIN_SECRET_LENGTH,
            max_secret_length: DEFAULT_MAX_SECRET_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "username",
            self.min_username_length,
            self.max_username_length,
            MIN_USERNAME_LENGTH,
            MAX_USERNAME_LENGTH,
        )?;
        Self::check_range(
            "secret",
            self.min_secret_length,
            self.max_secret_length,
            MIN_SECRET_LENGTH,
            MAX_SECRET_LENGTH,
        )
    }

    fn check_range(
        name: &str,
        min: usize,
        max: usize,
        lower: usize,
        upper: usize,
    ) -> ConfigErrorResult<()> {
        if min < lower || max > upper {
            return Err(ConfigError::validation(format!(
                "validation.{name} lengths must be within {lower}-{upper}, got {min}-{max}"
            )));
        }

        if min > max {
            return Err(ConfigError::validation(format!(
                "validation.min_{name}_length ({min}) cannot exceed max_{name}_length ({max})"
            )));
        }

        Ok(())
    }
}
