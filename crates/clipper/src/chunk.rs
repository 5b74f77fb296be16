use crate::types::{ChunkWord, ClipWord, SubtitleChunk};

/// A chunk closes once it holds this many words…
pub const MAX_CHUNK_WORDS: usize = 6;
/// …or once its space-joined text reaches this many characters.
pub const MAX_CHUNK_CHARS: usize = 35;

fn has_sentence_punctuation(text: &str) -> bool {
    text.contains(['.', '!', '?'])
}

/// Partition a candidate's word slice into caption-sized chunks.
///
/// Words accumulate into a running chunk; after each word the chunk closes
/// if it reached [`MAX_CHUNK_WORDS`] words or [`MAX_CHUNK_CHARS`] characters
/// of joined text, if the word carries sentence punctuation, or if it is the
/// last word of the slice (forced close). Chunk word lists are contiguous and
/// exactly partition the input slice.
pub fn chunk_words(words: &[ClipWord]) -> Vec<SubtitleChunk> {
    let mut chunks = Vec::new();
    let mut run: Vec<&ClipWord> = Vec::new();
    let mut run_chars = 0;

    for (i, word) in words.iter().enumerate() {
        if !run.is_empty() {
            run_chars += 1; // joining space
        }
        run_chars += word.text.chars().count();
        run.push(word);

        let close = run.len() >= MAX_CHUNK_WORDS
            || run_chars >= MAX_CHUNK_CHARS
            || has_sentence_punctuation(&word.text)
            || i + 1 == words.len();

        if close {
            chunks.push(close_chunk(&run));
            run.clear();
            run_chars = 0;
        }
    }

    chunks
}

fn close_chunk(run: &[&ClipWord]) -> SubtitleChunk {
    let words: Vec<ChunkWord> = run
        .iter()
        .map(|w| ChunkWord {
            start_ms: w.start_ms(),
            end_ms: w.end_ms(),
            text: w.text.clone(),
        })
        .collect();

    SubtitleChunk {
        start_ms: words.first().map_or(0, |w| w.start_ms),
        end_ms: words.last().map_or(0, |w| w.end_ms),
        text: run
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        words,
    }
}
