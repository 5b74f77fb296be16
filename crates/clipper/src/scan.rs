//! Candidate scan as a two-phase state machine.
//!
//! Each outer iteration runs **boundary search** ([`search_from`]) and then
//! **cursor advance** ([`advance`]); both are pure functions of an immutable
//! word slice plus an index. The step is fixed and decoupled from the
//! duration bounds, so successive windows overlap by design.

use std::ops::RangeInclusive;

use crate::boundary::is_boundary;
use crate::options::CandidateOptions;
use crate::types::ClipWord;

/// Fixed start-cursor slide between candidate searches.
pub const STEP_SEC: f64 = 5.0;

/// Boundary-search phase: find the candidate window anchored at `start`.
///
/// Extends word by word. Ends on the first natural boundary once the
/// minimum duration is reached; a window that would outgrow the maximum
/// duration is force-cut at the last word still inside it, so no emitted
/// candidate ever exceeds `max_duration_sec`. Returns `None` when the
/// remaining speech is too short to reach the minimum, or when even the
/// force-cut prefix falls short of it.
pub fn search_from(
    words: &[ClipWord],
    start: usize,
    options: &CandidateOptions,
) -> Option<RangeInclusive<usize>> {
    let anchor = words.get(start)?.start;

    for j in start..words.len() {
        let duration = words[j].end - anchor;

        if duration > options.max_duration_sec {
            // Forced cut: word j would overrun the cap. Emit the prefix if
            // it still clears the minimum, otherwise nothing fits here.
            if j > start && words[j - 1].end - anchor >= options.min_duration_sec {
                return Some(start..=j - 1);
            }
            return None;
        }

        if duration >= options.min_duration_sec && is_boundary(&words[j], words.get(j + 1)) {
            return Some(start..=j);
        }

        if duration >= options.max_duration_sec {
            // duration == max exactly: cut on the cap without a boundary.
            return Some(start..=j);
        }
    }

    // Scan exhausted below the minimum duration: the trailing tail emits
    // nothing (end-of-transcript is a boundary, so reaching here means the
    // minimum was never met).
    None
}

/// Cursor-advance phase: index of the first word starting at least
/// [`STEP_SEC`] after the word at `start`, or `words.len()` when no such
/// word remains.
pub fn advance(words: &[ClipWord], start: usize) -> usize {
    let threshold = words[start].start + STEP_SEC;

    words[start + 1..]
        .iter()
        .position(|w| w.start >= threshold)
        .map_or(words.len(), |offset| start + 1 + offset)
}
