//! Box score text parsing
//!
//! Turns noisy OCR text from one scanned box score into a [`GameRecord`] and
//! the batting lines it contains:
//! - `classifier`: single-line pattern inspection, no cross-line reasoning
//! - `box_score`: the two-pass parser and the team cursor state machine
//!
//! Parsing is fail-open. Nothing here returns an error: lines that do not
//! fit a pattern are ignored and fields that never appear keep their
//! defaults, so every scan produces something that can be stored.
//!
//! [`GameRecord`]: crate::models::GameRecord

pub mod box_score;
pub mod classifier;


pub use box_score::{parse_box_score, BoxScoreParser, ParsedBoxScore, TeamCursor};
pub use classifier::{LineClass, LineClassifier, LineKind, StatLine};
