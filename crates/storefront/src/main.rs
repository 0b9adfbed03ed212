use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{
    abstract_trait::DynUploadGateway,
    config::{Config, ConnectionManager},
    gateway::CloudinaryGateway,
    utils::init_logger,
};
use std::sync::Arc;
use storefront::{handler::AppRouter, state::AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("storefront", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting storefront initialization...");

    let db_pool = ConnectionManager::new_pool(&config.database_url, config.db_max_conn)
        .await
        .context("Failed to initialize database pool")?;

    ConnectionManager::bootstrap_schema(&db_pool)
        .await
        .context("Failed to bootstrap database schema")?;

    let gateway = Arc::new(
        CloudinaryGateway::new(&config.cloudinary).context("Failed to build Cloudinary client")?,
    ) as DynUploadGateway;

    let state = AppState::new(db_pool.clone(), gateway);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("🛑 Shutting down, closing database pool...");
    db_pool.close().await;

    info!("✅ Storefront shutdown complete.");
    Ok(())
}
