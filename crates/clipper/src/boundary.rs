use crate::types::ClipWord;

/// A silence gap strictly longer than this counts as a natural cut point,
/// punctuation or not. Catches speakers the ASR failed to punctuate.
pub const SILENCE_GAP_SEC: f64 = 0.8;

/// Sentence-final punctuation on the trimmed text, ASCII and full-width.
pub fn is_sentence_final(text: &str) -> bool {
    text.trim_end().ends_with(['.', '!', '?', '。', '！', '？'])
}

/// A word after which a candidate may legally end: sentence-final
/// punctuation, end of transcript, or a long silence before `next`.
pub fn is_boundary(word: &ClipWord, next: Option<&ClipWord>) -> bool {
    if is_sentence_final(&word.text) {
        return true;
    }

    match next {
        None => true,
        Some(next) => next.start - word.end > SILENCE_GAP_SEC,
    }
}
