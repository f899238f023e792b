use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use super::interface::AudioClient;
use crate::error::AudioClientError;
use crate::types::{AudioProcessingResult, SelectionResult, Sentence};

const MOCK_AUDIO_PATH: &str = "/lesson-of-greatness-daniel-ek.mp3";
const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Stand-in for the audio service that answers with canned data after a
/// simulated processing delay. Never fails.
#[derive(Debug, Clone)]
pub struct MockAudioClient {
    delay: Duration,
}

impl MockAudioClient {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    /// Same canned responses with a custom latency, for tests
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAudioClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioClient for MockAudioClient {
    async fn process_audio(
        &self,
        _file_name: &str,
        _audio_data: &[u8],
    ) -> Result<AudioProcessingResult, AudioClientError> {
        tokio::time::sleep(self.delay).await;

        Ok(AudioProcessingResult {
            sentences: vec![
                Sentence {
                    id: 1,
                    text: "This is a short sentence.".to_string(),
                    selected: false,
                },
                Sentence {
                    id: 2,
                    text: "This is slightly longer.".to_string(),
                    selected: false,
                },
                Sentence {
                    id: 3,
                    text: "Here is the longest sentence of all, filled with grandeur and eloquence."
                        .to_string(),
                    selected: false,
                },
            ],
            audio_path: MOCK_AUDIO_PATH.to_string(),
        })
    }

    async fn process_selected_sentences(
        &self,
        sentence_ids: &[i64],
    ) -> Result<SelectionResult, AudioClientError> {
        tokio::time::sleep(self.delay).await;

        let ids = sentence_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        info!("Sentences sent to the server: {}", ids);

        Ok(SelectionResult {
            audio_path: MOCK_AUDIO_PATH.to_string(),
        })
    }
}
