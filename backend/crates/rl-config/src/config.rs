use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRECTORY,
    DatabaseConfig, IdentityApiConfig, LoggingConfig, RankApiConfig, ServerConfig,
    ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub identity_api: IdentityApiConfig,
    pub rank_api: RankApiConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for RL_CONFIG_DIR env var, else use ./.rankline/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply RL_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: RL_CONFIG_DIR env var > ./.rankline/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRECTORY))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.identity_api.validate()?;
        self.rank_api.validate()?;
        self.validation.validate()?;

        if self.identity_api.api_key.is_none() {
            warn!("identity_api.api_key not set; identity lookups will likely be rejected");
        }
        if self.rank_api.api_key.is_none() {
            warn!("rank_api.api_key not set; linked accounts will show as Unranked");
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  identity_api: {} (key: {}, timeout={}s, connect={}s)",
            self.identity_api.base_url,
            Self::key_state(&self.identity_api.api_key),
            self.identity_api.timeout_secs,
            self.identity_api.connect_timeout_secs
        );
        info!(
            "  rank_api: {} region={} (key: {}, timeout={}s, connect={}s)",
            self.rank_api.base_url,
            self.rank_api.region,
            Self::key_state(&self.rank_api.api_key),
            self.rank_api.timeout_secs,
            self.rank_api.connect_timeout_secs
        );
        info!(
            "  validation: username={}-{}, secret={}-{}",
            self.validation.min_username_length,
            self.validation.max_username_length,
            self.validation.min_secret_length,
            self.validation.max_secret_length
        );
    }

    fn key_state(key: &Option<String>) -> &'static str {
        if key.is_some() { "set" } else { "missing" }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("RL_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("RL_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("RL_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "RL_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("RL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("RL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("RL_LOG_FILE", &mut self.logging.file);

        // Identity API
        Self::apply_env_string("RL_IDENTITY_API_BASE_URL", &mut self.identity_api.base_url);
        Self::apply_env_option_string("RL_IDENTITY_API_KEY", &mut self.identity_api.api_key);
        Self::apply_env_parse(
            "RL_IDENTITY_API_TIMEOUT_SECS",
            &mut self.identity_api.timeout_secs,
        );
        Self::apply_env_parse(
            "RL_IDENTITY_API_CONNECT_TIMEOUT_SECS",
            &mut self.identity_api.connect_timeout_secs,
        );

        // Rank API
        Self::apply_env_string("RL_RANK_API_BASE_URL", &mut self.rank_api.base_url);
        Self::apply_env_option_string("RL_RANK_API_KEY", &mut self.rank_api.api_key);
        Self::apply_env_string("RL_RANK_API_REGION", &mut self.rank_api.region);
        Self::apply_env_parse("RL_RANK_API_TIMEOUT_SECS", &mut self.rank_api.timeout_secs);
        Self::apply_env_parse(
            "RL_RANK_API_CONNECT_TIMEOUT_SECS",
            &mut self.rank_api.connect_timeout_secs,
        );

        // Validation
        Self::apply_env_parse(
            "RL_VALIDATION_MIN_USERNAME_LENGTH",
            &mut self.validation.min_username_length,
        );
        Self::apply_env_parse(
            "RL_VALIDATION_MAX_USERNAME_LENGTH",
            &mut self.validation.max_username_length,
        );
        Self::apply_env_parse(
            "RL_VALIDATION_MIN_SECRET_LENGTH",
            &mut self.validation.min_secret_length,
        );
        Self::apply_env_parse(
            "RL_VALIDATION_MAX_SECRET_LENGTH",
            &mut self.validation.max_secret_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// Empty values are treated as unset.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.is_empty()
        {
            *target = Some(val);
        }
    }
}
