mod config;
mod database_config;
mod error;
mod identity_api_config;
mod log_level;
mod logging_config;
mod rank_api_config;
mod server_config;
mod upstream_validation;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use identity_api_config::IdentityApiConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rank_api_config::RankApiConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "RL_CONFIG_DIR";
const DEFAULT_CONFIG_DIRECTORY: &str = ".rankline";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "rankline.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_IDENTITY_API_BASE_URL: &str = "https://identity.example.invalid";
const DEFAULT_RANK_API_BASE_URL: &str = "https://rank.example.invalid";
const DEFAULT_RANK_REGION: &str = "na";

const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 5;
const MIN_UPSTREAM_TIMEOUT_SECS: u64 = 1;
const MAX_UPSTREAM_TIMEOUT_SECS: u64 = 120;
