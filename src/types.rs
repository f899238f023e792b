use serde::{Deserialize, Serialize};

/// One sentence segment extracted from the uploaded audio.
///
/// Ids are assigned by the server; `selected` is a client-side flag the
/// caller toggles when choosing which sentences to keep. The backend may
/// omit it, in which case it defaults to unselected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub selected: bool,
}

/// Response of the audio-processing endpoint: the summary sentences plus
/// the path of the rendered summary audio asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioProcessingResult {
    pub sentences: Vec<Sentence>,
    pub audio_path: String,
}

/// Response of a sentence-selection request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub audio_path: String,
}
