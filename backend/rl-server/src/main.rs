use rl_config::Config;
use rl_server::{AppState, build_router, logger};

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Optional .env in the working directory
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // The store must be reachable before we accept traffic
    let database_path = config.database_path()?;
    let pool = rl_db::open_pool(&database_path, config.database.max_connections)
        .await
        .inspect_err(|e| error!("Cannot open database {}: {}", database_path.display(), e))?;

    info!("Running database migrations...");
    rl_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    let app = build_router(AppState::from_config(pool.clone(), &config)?);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
