// https://developers.deepgram.com/reference/speech-to-text-api/listen
// https://github.com/deepgram/deepgram-rust-sdk/blob/0.7.0/src/common/batch_response.rs

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Word {
    pub word: String,
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
    pub speaker: Option<i32>,
    pub punctuated_word: Option<String>,
    pub language: Option<String>,
}

impl Word {
    /// Punctuated form when the provider supplies one, raw token otherwise.
    pub fn display_text(&self) -> &str {
        self.punctuated_word.as_deref().unwrap_or(&self.word)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Alternatives {
    pub transcript: String,
    pub confidence: f64,
    pub words: Vec<Word>,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    pub alternatives: Vec<Alternatives>,
}

/// Utterance-level grouping of words. Present only when the request asked
/// for `utterances=true`; segmentation consumers flatten `words` and ignore
/// the utterance boundaries themselves.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Utterance {
    pub start: f64,
    pub end: f64,
    pub confidence: f64,
    #[serde(default)]
    pub channel: i32,
    pub transcript: String,
    pub words: Vec<Word>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Results {
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub utterances: Vec<Utterance>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub request_id: String,
    pub created: String,
    pub duration: f64,
    pub channels: u32,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListenResponse {
    #[serde(default)]
    pub metadata: Metadata,
    pub results: Results,
}

impl ListenResponse {
    pub fn utterances(&self) -> &[Utterance] {
        &self.results.utterances
    }

    /// First-channel best-alternative transcript, empty when absent.
    pub fn transcript(&self) -> &str {
        self.results
            .channels
            .first()
            .and_then(|c| c.alternatives.first())
            .map(|a| a.transcript.as_str())
            .unwrap_or("")
    }
}
