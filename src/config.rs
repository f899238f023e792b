use serde::{Deserialize, Serialize};
use std::fs;

use anyhow::{Context, Result};

/// Which client implementation to build and where the remote service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Implementation selector: `"remote"` or `"mock"`.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Base URL of the audio-summarization service.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_mode() -> String {
    "mock".to_string()
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            base_url: default_base_url(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path))?;
        let config: ClientConfig = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_point_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.mode, "mock");
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{ "mode": "remote" }"#).unwrap();
        assert_eq!(config.mode, "remote");
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn loads_config_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "mode": "remote", "base_url": "http://10.0.0.2:5000" }}"#
        )
        .unwrap();

        let config = ClientConfig::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.mode, "remote");
        assert_eq!(config.base_url, "http://10.0.0.2:5000");
    }

    #[test]
    fn load_fails_for_missing_file() {
        assert!(ClientConfig::load("does-not-exist.json").is_err());
    }
}
