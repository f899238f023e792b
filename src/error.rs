use thiserror::Error;

/// Errors surfaced by an audio client. All of them propagate to the caller;
/// there is no retry or recovery inside the client.
#[derive(Debug, Error)]
pub enum AudioClientError {
    #[error("audio service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("audio service returned status {status}")]
    HttpStatus { status: u16 },
    #[error("invalid audio service response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sentence selection is not available on the remote service")]
    SelectionUnsupported,
}
