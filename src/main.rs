use axum::Router;
use tracing::{info, warn, Level};

mod routes;
mod models;
mod utils;
mod client;
mod state;

use crate::utils::conf_helper::{init_config_and_bind, get_cached_config};
use crate::state::app_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let state = AppState::new();

    // === CONFIG + LISTENER ===
    let listener = init_config_and_bind()
        .await
        .map_err(anyhow::Error::msg)?;

    let config = get_cached_config();

    info!(
        "{} v{} initialized on {}:{}",
        config.name,
        config.version,
        config.connection.ip,
        config.connection.port
    );

    // The core may come up after us; heartbeats keep trying either way.
    if let Err(e) = client::register::register().await {
        warn!("Continuing without registration: {}", e);
    }

    tokio::spawn(async {
        crate::client::register::start_heartbeat().await;
    });

    let app = Router::new()
        .merge(routes::info_routes::health_routes(state.clone()))
        .merge(routes::data_routes::data_routes(state));

    axum::serve(listener, app).await?;

    Ok(())
}
