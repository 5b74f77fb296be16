use reel_stt_interface::listen::{Utterance, Word};

// ── Input ────────────────────────────────────────────────────────────────────

/// Atomic transcript token in provider seconds, after the punctuated-form
/// fallback has been applied. `end >= start`; the flattened sequence is
/// ordered by non-decreasing `start`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipWord {
    pub text: String,
    pub start: f64,
    pub end: f64,
}

impl ClipWord {
    pub fn from_wire(word: &Word) -> Self {
        Self {
            text: word.display_text().to_string(),
            start: word.start,
            end: word.end,
        }
    }

    /// Flatten utterances into one global time-ordered word sequence.
    ///
    /// Utterance boundaries carry no meaning for candidate search — a clip
    /// may span several utterances or end inside one. Utterances are assumed
    /// already time-ordered and non-overlapping at the word level.
    pub fn flatten(utterances: &[Utterance]) -> Vec<ClipWord> {
        utterances
            .iter()
            .flat_map(|u| u.words.iter().map(Self::from_wire))
            .collect()
    }

    pub(crate) fn start_ms(&self) -> i64 {
        ms(self.start)
    }

    pub(crate) fn end_ms(&self) -> i64 {
        ms(self.end)
    }
}

/// Floor, not round: rounding up could make a chunk's end overlap the next
/// chunk's start by a millisecond.
pub(crate) fn ms(sec: f64) -> i64 {
    (sec * 1000.0).floor() as i64
}

// ── Output ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChunkWord {
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
}

/// One renderable caption line. `words` is a contiguous sub-slice of the
/// candidate's words; chunk lists partition the candidate with no gaps or
/// overlaps, and `start_ms`/`end_ms` equal the first/last word boundaries.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubtitleChunk {
    pub start_ms: i64,
    pub end_ms: i64,
    pub text: String,
    pub words: Vec<ChunkWord>,
}

/// A time-bounded span of words proposed as a short-form clip.
///
/// Immutable value object, allocated fresh per segmentation call. Emission
/// order is start-cursor order; ranking is a downstream concern.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipCandidate {
    pub start_ms: i64,
    pub end_ms: i64,
    pub word_count: usize,
    pub transcript_text: String,
    pub chunks: Vec<SubtitleChunk>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_word(word: &str, punctuated: Option<&str>, start: f64, end: f64) -> Word {
        Word {
            word: word.to_string(),
            start,
            end,
            confidence: 0.99,
            speaker: None,
            punctuated_word: punctuated.map(str::to_string),
            language: None,
        }
    }

    fn utterance(words: Vec<Word>) -> Utterance {
        Utterance {
            start: words.first().map_or(0.0, |w| w.start),
            end: words.last().map_or(0.0, |w| w.end),
            confidence: 0.99,
            channel: 0,
            transcript: String::new(),
            words,
            id: None,
        }
    }

    #[test]
    fn from_wire_prefers_punctuated_form() {
        let w = ClipWord::from_wire(&wire_word("thing", Some("thing."), 1.0, 1.4));
        assert_eq!(w.text, "thing.");
    }

    #[test]
    fn from_wire_falls_back_to_raw_word() {
        let w = ClipWord::from_wire(&wire_word("thing", None, 1.0, 1.4));
        assert_eq!(w.text, "thing");
    }

    #[test]
    fn flatten_crosses_utterance_boundaries() {
        let words = ClipWord::flatten(&[
            utterance(vec![
                wire_word("hello", Some("Hello"), 0.0, 0.4),
                wire_word("there", Some("there."), 0.5, 0.9),
            ]),
            utterance(vec![wire_word("okay", Some("Okay."), 1.2, 1.6)]),
        ]);

        assert_eq!(
            words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>(),
            ["Hello", "there.", "Okay."]
        );
        assert!(words.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn flatten_empty_input_is_empty() {
        assert!(ClipWord::flatten(&[]).is_empty());
    }

    #[test]
    fn ms_conversion_floors() {
        assert_eq!(ms(1.0006), 1000);
        assert_eq!(ms(2.9999), 2999);
        assert_eq!(ms(0.0), 0);
    }
}
