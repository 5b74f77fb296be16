use reel_stt_interface::listen::Utterance;

use crate::chunk::chunk_words;
use crate::error::Error;
use crate::options::CandidateOptions;
use crate::scan::{advance, search_from};
use crate::types::{ClipCandidate, ClipWord};

/// Generate clip candidates from a flattened, time-ordered word sequence.
///
/// Pure function of `(words, options)`; every call allocates fresh output.
/// An empty result is the valid "no viable clip" outcome for degenerate
/// input (no words, or all remaining speech shorter than the minimum), not
/// an error. Candidates may overlap and are not deduplicated — the
/// downstream scorer selects among them.
pub fn generate_candidates(
    words: &[ClipWord],
    options: &CandidateOptions,
) -> Result<Vec<ClipCandidate>, Error> {
    options.validate()?;

    if words.is_empty() {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();
    let mut cursor = 0;

    while cursor < words.len() {
        if let Some(range) = search_from(words, cursor, options) {
            let candidate = assemble(&words[range]);
            tracing::trace!(
                start_ms = candidate.start_ms,
                end_ms = candidate.end_ms,
                words = candidate.word_count,
                "candidate emitted"
            );
            candidates.push(candidate);
        }
        cursor = advance(words, cursor);
    }

    tracing::debug!(
        words = words.len(),
        candidates = candidates.len(),
        "segmentation pass complete"
    );

    Ok(candidates)
}

/// Wire adapter: flatten provider utterances, then scan.
pub fn candidates_from_utterances(
    utterances: &[Utterance],
    options: &CandidateOptions,
) -> Result<Vec<ClipCandidate>, Error> {
    generate_candidates(&ClipWord::flatten(utterances), options)
}

fn assemble(words: &[ClipWord]) -> ClipCandidate {
    ClipCandidate {
        start_ms: words.first().map_or(0, |w| w.start_ms()),
        end_ms: words.last().map_or(0, |w| w.end_ms()),
        word_count: words.len(),
        transcript_text: words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        chunks: chunk_words(words),
    }
}
