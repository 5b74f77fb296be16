//! Captured-shape transcription fixtures for tests and the preview tool.

pub mod podcast_en {
    pub const LISTEN_JSON: &str = include_str!("../json/podcast_en/listen.json");
}
