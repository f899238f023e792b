use async_trait::async_trait;
use reqwest::multipart;
use tracing::{debug, error};

use super::interface::AudioClient;
use crate::error::AudioClientError;
use crate::types::{AudioProcessingResult, SelectionResult};

/// Client that talks to the audio-summarization HTTP service
#[derive(Debug, Clone)]
pub struct RemoteAudioClient {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteAudioClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl AudioClient for RemoteAudioClient {
    async fn process_audio(
        &self,
        file_name: &str,
        audio_data: &[u8],
    ) -> Result<AudioProcessingResult, AudioClientError> {
        let url = format!("{}/process_audio", self.base_url);

        let file_part = multipart::Part::bytes(audio_data.to_vec()).file_name(file_name.to_string());
        let form = multipart::Form::new().part("file", file_part);

        debug!("Uploading {} ({} bytes) to {}", file_name, audio_data.len(), url);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("Audio service rejected {}: status {}", file_name, status);
            return Err(AudioClientError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let result: AudioProcessingResult = serde_json::from_str(&body)?;

        debug!(
            "Audio service returned {} sentences, summary at {}",
            result.sentences.len(),
            result.audio_path
        );

        Ok(result)
    }

    async fn process_selected_sentences(
        &self,
        _sentence_ids: &[i64],
    ) -> Result<SelectionResult, AudioClientError> {
        // The backend snapshot this client tracks has no selection endpoint.
        Err(AudioClientError::SelectionUnsupported)
    }
}
