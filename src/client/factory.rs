use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use super::interface::AudioClient;
use super::mock::MockAudioClient;
use super::remote::RemoteAudioClient;
use crate::config::ClientConfig;

/// Factory for creating audio clients
pub struct AudioClientFactory;

impl AudioClientFactory {
    /// Create an audio client based on configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration selecting the implementation
    ///
    /// # Returns
    /// Boxed AudioClient implementation
    pub fn create(config: &ClientConfig) -> Result<Arc<dyn AudioClient>> {
        info!("Initializing audio client: {}", config.mode);

        match config.mode.as_str() {
            "remote" => Ok(Arc::new(RemoteAudioClient::new(config.base_url.clone()))),
            "mock" => Ok(Arc::new(MockAudioClient::new())),
            other => Err(anyhow::anyhow!("Unknown audio client mode: {}", other)),
        }
    }
}
