use reqwest::Client;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::time::{sleep, Duration};
use tracing::{error, info};

use crate::utils::conf_helper;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(15);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthPayload<'a> {
    pub id: &'a str,
    pub timestamp: f64,
}

fn core_endpoint(route: &str) -> String {
    format!("http://{}/{}", conf_helper::get_core_url(), route)
}

fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

fn unix_now() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

/// Announce the extension descriptor to the core.
pub async fn register() -> Result<(), String> {
    let config = conf_helper::get_cached_config();
    let url = core_endpoint("register");
    info!("Registering {} at {}", config.name, url);

    let resp = http_client()
        .post(&url)
        .json(config)
        .send()
        .await
        .map_err(|e| format!("HTTP Error: {e}"))?;

    resp.error_for_status()
        .map_err(|e| format!("Server returned error: {e}"))?;

    info!("Registered with Plotune core");
    Ok(())
}

/// Runs forever; failures are logged and retried on the next tick.
pub async fn start_heartbeat() {
    let config = conf_helper::get_cached_config();
    let url = core_endpoint("heartbeat");
    let client = http_client();

    info!("Heartbeat worker started for ID: {}", config.id);

    loop {
        let payload = HealthPayload {
            id: &config.id,
            timestamp: unix_now(),
        };

        match client.post(&url).json(&payload).send().await {
            Ok(resp) if resp.status().is_success() => info!("Heartbeat sent"),
            Ok(resp) => error!("Heartbeat server error: {}", resp.status()),
            Err(e) => error!("Heartbeat network error: {}", e),
        }

        sleep(HEARTBEAT_INTERVAL).await;
    }
}
