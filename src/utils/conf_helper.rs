use std::sync::OnceLock;
use tokio::net::TcpListener;
use tracing::info;

use crate::models::extension_model::ExtensionConfig;

static CONFIG_CACHE: OnceLock<ExtensionConfig> = OnceLock::new();
static CORE_URL: OnceLock<String> = OnceLock::new();

const DEFAULT_CONFIG_PATH: &str = "plugin.json";
const CONFIG_PATH_ENV: &str = "PLOTUNE_PLUGIN_CONFIG";

fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn parse_config(data: &str) -> Result<ExtensionConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("JSON Parse Error: {e}"))
}

async fn load_config(path: &str) -> Result<ExtensionConfig, String> {
    let data = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("File read Error: {e} {path}"))?;
    parse_config(&data)
}

/// Bind to the descriptor's address. Port 0 picks a free port, which is
/// written back so registration reports where we actually listen.
async fn bind(config: &mut ExtensionConfig) -> Result<TcpListener, String> {
    let conn = &mut config.connection;
    let listener = TcpListener::bind((conn.ip.as_str(), conn.port))
        .await
        .map_err(|e| format!("Bind failed: {e}"))?;

    conn.port = listener
        .local_addr()
        .map_err(|e| format!("Addr error: {e}"))?
        .port();

    Ok(listener)
}

pub fn core_url_of(config: &ExtensionConfig) -> String {
    format!("{}:{}", config.connection.target, config.connection.target_port)
}

pub async fn init_config_and_bind() -> Result<TcpListener, String> {
    let path = config_path();
    let mut config = load_config(&path).await?;
    let listener = bind(&mut config).await?;
    let port = config.connection.port;

    CORE_URL
        .set(core_url_of(&config))
        .map_err(|_| "Core URL already initialized".to_string())?;
    CONFIG_CACHE
        .set(config)
        .map_err(|_| "Config already initialized".to_string())?;

    info!("Config {} loaded, listening on port {}", path, port);
    Ok(listener)
}

pub fn get_cached_config() -> &'static ExtensionConfig {
    CONFIG_CACHE.get().expect("Config not initialized")
}

pub fn get_core_url() -> &'static String {
    CORE_URL.get().expect("Core URL not initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"{
        "name": "EA3 Reader", "id": "ea3_reader", "version": "0.1.0",
        "description": "", "mode": "offline", "author": "", "category": "FileExtension",
        "connection": { "ip": "127.0.0.1", "port": 0, "target": "10.0.0.5", "target_port": 8000 }
    }"#;

    #[test]
    fn test_parse_error_message() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(err.starts_with("JSON Parse Error"));
    }

    #[test]
    fn test_core_url() {
        let config = parse_config(DESCRIPTOR).unwrap();
        assert_eq!(core_url_of(&config), "10.0.0.5:8000");
    }

    #[tokio::test]
    async fn test_bind_patches_port() {
        let mut config = parse_config(DESCRIPTOR).unwrap();
        let listener = bind(&mut config).await.unwrap();
        assert_ne!(config.connection.port, 0);
        assert_eq!(listener.local_addr().unwrap().port(), config.connection.port);
    }
}
