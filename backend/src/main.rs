//! Accounts Backend Service
//!
//! Entry point: loads configuration, connects to PostgreSQL and holds the
//! user repository and service until shutdown.

use accounts_backend::database::create_pool;
use accounts_backend::models::IdGenerator;
use accounts_backend::{AppConfig, AppError, AppResult, AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load environment variables first
    dotenv::dotenv().ok();

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        AppError::Config(e)
    })?;

    // Initialize tracing/logging with config; production logs are JSON
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("accounts_backend={},sqlx=warn", config.log_level).into()
    });
    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        log_level = %config.log_level,
        "Accounts backend starting"
    );

    // =========================================================================
    // DATABASE SETUP
    // =========================================================================
    info!("Connecting to database...");

    let pool = create_pool(&config.database).await.map_err(|e| {
        error!("Failed to create database pool: {}", e);
        AppError::Database(e)
    })?;

    info!(
        max_connections = config.database.max_connections,
        "Database connection pool created"
    );

    let app_state = AppState::new(pool, IdGenerator::new());

    info!("Accounts backend ready. Press Ctrl+C to shutdown");

    // =========================================================================
    // SHUTDOWN HANDLING
    // =========================================================================
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::Message(format!("Failed to listen for shutdown signal: {}", e)))?;

    info!("Shutdown signal received");
    app_state.database.pool().close().await;

    info!("Accounts backend shutdown complete");
    Ok(())
}
