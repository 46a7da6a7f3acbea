use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Extension descriptor loaded from `plugin.json` and sent to the core on
/// registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtensionConfig {
    pub name: String,
    pub id: String,
    pub version: String,
    pub description: String,
    pub mode: String,
    pub author: String,
    #[serde(default)]
    pub cmd: Vec<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub last_updated: String,
    #[serde(default)]
    pub git_path: String,
    pub category: String,
    #[serde(default)]
    pub post_url: String,
    #[serde(default)]
    pub webpage: String,
    #[serde(default = "default_file_formats")]
    pub file_formats: Vec<String>,
    #[serde(default)]
    pub ask_form: bool,
    pub connection: Connection,
    #[serde(default)]
    pub configuration: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Connection {
    pub ip: String,
    pub port: u16,
    pub target: String,
    pub target_port: u16,
}

fn default_enabled() -> bool {
    true
}

fn default_file_formats() -> Vec<String> {
    vec!["ea3".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_descriptor() {
        let json = r#"{
            "name": "EA3 Reader",
            "id": "ea3_reader",
            "version": "0.1.0",
            "description": "EA3 waveform files",
            "mode": "offline",
            "author": "plotune",
            "category": "FileExtension",
            "connection": {
                "ip": "127.0.0.1",
                "port": 0,
                "target": "127.0.0.1",
                "target_port": 8000
            }
        }"#;

        let config: ExtensionConfig = serde_json::from_str(json).unwrap();
        assert!(config.enabled);
        assert_eq!(config.file_formats, vec!["ea3"]);
        assert_eq!(config.connection.target_port, 8000);
        assert!(config.configuration.is_null());
    }
}
