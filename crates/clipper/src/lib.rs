//! # Clip-candidate segmentation
//!
//! Converts a word-level transcript into time-bounded, subtitle-chunked
//! clip candidates for short-form vertical video.
//!
//! ## Two-phase scan
//!
//! The scan is a pair of pure functions over an immutable word slice plus
//! an index — no shared mutable buffer:
//!
//! **Boundary search** — [`scan::search_from`] extends a window from a
//! start word until it can end on a *natural boundary* (sentence-final
//! punctuation or a long silence) once the minimum duration is reached,
//! or is force-cut at the maximum duration.
//!
//! **Cursor advance** — [`scan::advance`] slides the start cursor a fixed
//! 5 seconds, independent of the duration bounds. Successive windows
//! intentionally overlap so a downstream scorer can pick among multiple
//! phrasings of the same speech region; nothing is deduplicated here.
//!
//! Every emitted candidate is broken into caption-sized
//! [`SubtitleChunk`]s with per-word timing. The whole pass is a pure
//! function of `(words, options)`: no I/O, no suspension, no state
//! carried across calls.

pub mod boundary;
pub mod chunk;
pub mod error;
pub mod generate;
pub mod options;
pub mod scan;
pub mod types;

pub use error::Error;
pub use generate::{candidates_from_utterances, generate_candidates};
pub use options::CandidateOptions;
pub use types::{ChunkWord, ClipCandidate, ClipWord, SubtitleChunk};
