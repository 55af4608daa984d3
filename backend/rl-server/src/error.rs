use thiserror::Error;

/// Startup failures. Any of these aborts the process with a non-zero exit.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] rl_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] rl_db::DbError),

    #[error("Upstream client error: {0}")]
    Upstream(#[from] rl_upstream::UpstreamError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
