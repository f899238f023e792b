use async_trait::async_trait;

use crate::error::AudioClientError;
use crate::types::{AudioProcessingResult, SelectionResult};

/// Audio client interface - the actual processing happens in the backend service
#[async_trait]
pub trait AudioClient: Send + Sync {
    /// Submit an audio file for transcription and summarization
    ///
    /// # Arguments
    /// * `file_name` - Name the upload is labelled with
    /// * `audio_data` - Raw bytes of the audio file
    ///
    /// # Returns
    /// The summary sentences and the path of the rendered summary audio
    async fn process_audio(
        &self,
        file_name: &str,
        audio_data: &[u8],
    ) -> Result<AudioProcessingResult, AudioClientError>;

    /// Re-render the summary audio from the sentences the caller kept
    ///
    /// # Arguments
    /// * `sentence_ids` - Ids of the sentences to keep, as assigned by the server
    async fn process_selected_sentences(
        &self,
        sentence_ids: &[i64],
    ) -> Result<SelectionResult, AudioClientError>;
}
