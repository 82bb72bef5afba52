use anyhow::{Context, Result};
use dotenv::dotenv;
use server::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("server");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url)
        .await
        .context("Failed to connect to the database")?;

    let state = AppState::new(pool, &config.jwt_secret);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server...");

    Ok(())
}
