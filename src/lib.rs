//! fzs is a fuzzy scorer for interactive pickers.
//!
//! It rates how well a short, user-typed query matches a candidate such as a
//! file path or a buffer name, and can report which bytes of the candidate
//! matched so a host can highlight them. It is meant to be called on every
//! keystroke against thousands of candidates, so matching works on raw bytes,
//! allocates only when positions are requested, and keeps no state between
//! calls.
//!
//! The query is split on spaces. Every token must match (AND semantics) and the
//! per-token scores are summed. Short or mixed-case tokens are matched as exact
//! substrings, longer lowercase tokens as gapped, case-insensitive
//! subsequences.
//!
//! # Examples
//!
//! ```
//! assert_eq!(fzs::score("init.lua", "init"), fzs::FULL_MATCH);
//! assert_eq!(fzs::score("init.lua", "nit"), fzs::FULL_MATCH - fzs::BOUNDARY_WORD);
//! assert_eq!(fzs::score("init.lua", "vim"), fzs::MISMATCH);
//!
//! assert_eq!(fzs::positions("init.lua", "ni"), vec![1, 2]);
//! ```
//!
//! Tuned scorers are built from [`ScorerOptions`]:
//!
//! ```
//! use fzs::prelude::*;
//!
//! let options = ScorerOptionsBuilder::default()
//!     .max_gap(2)
//!     .strict_keywords(false)
//!     .build()
//!     .unwrap();
//! let scorer = Scorer::new(options).unwrap();
//! assert!(scorer.score("src/lib.rs", "srclib") > fzs::MISMATCH);
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

use std::sync::LazyLock;

pub use crate::fuzzy_matcher::{IndexType, MatchIndices, ScoreType, TokenMatcher};
pub use crate::options::{OptionsError, ScorerOptions, ScorerOptionsBuilder};
pub use crate::scorer::Scorer;

pub mod boundary;
pub mod ffi;
pub mod fuzzy_matcher;
pub mod options;
pub mod pattern;
pub mod prelude;
mod scorer;
pub mod util;

//------------------------------------------------------------------------------
// Scores

/// Score reported when the pattern does not match. Never produced by a match.
pub const MISMATCH: ScoreType = 0;
/// Best score a single token can reach.
pub const FULL_MATCH: ScoreType = 100;
/// Bonus for one side of a match sitting on a word boundary.
pub const BOUNDARY_WORD: ScoreType = 2;
/// Bonus for a match delimited by word boundaries on both sides.
pub const BOUNDARY_BOTH: ScoreType = BOUNDARY_WORD * 2;

/// Tokens shorter than this are always matched strictly.
pub const MIN_FUZZY_PATTERN_SIZE: usize = 3;
/// Weight of one matched character in a fuzzy match, before normalization.
pub const MATCH_CHAR: ScoreType = 10;
/// Cost of each candidate byte skipped between two fuzzy-matched characters.
pub const GAP_PENALTY: ScoreType = 5;
/// Largest gap allowed between two fuzzy-matched characters.
pub const MAX_GAP: usize = 7;

//------------------------------------------------------------------------------
// Results

/// Which shape of result a call should produce.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub enum MatchMode {
    /// Only compute the score
    #[default]
    Score,
    /// Only compute the matched byte offsets
    Positions,
}

/// Result of matching a pattern against a candidate.
///
/// Exactly one shape is produced per call, chosen by [`MatchMode`].
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum MatchResult {
    /// Aggregated score, [`MISMATCH`] when the pattern does not match
    Score(ScoreType),
    /// Matched byte offsets, grouped per token in pattern order
    Positions(MatchIndices),
}

impl MatchResult {
    /// Returns the score, or `None` for a positions result.
    pub fn score(&self) -> Option<ScoreType> {
        match self {
            MatchResult::Score(score) => Some(*score),
            MatchResult::Positions(_) => None,
        }
    }

    /// Returns the positions, or `None` for a score result.
    pub fn positions(&self) -> Option<&[IndexType]> {
        match self {
            MatchResult::Score(_) => None,
            MatchResult::Positions(positions) => Some(positions),
        }
    }
}

//------------------------------------------------------------------------------
// Process-wide scorer

static DEFAULT_SCORER: LazyLock<Scorer> = LazyLock::new(Scorer::default);

/// Returns the scorer built from the default options, shared by the whole process.
pub fn default_scorer() -> &'static Scorer {
    &DEFAULT_SCORER
}

/// Scores `pattern` against `text` with the default options.
pub fn score(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> ScoreType {
    DEFAULT_SCORER.score(text, pattern)
}

/// Returns the byte offsets of `text` matched by `pattern`, with the default options.
pub fn positions(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> MatchIndices {
    DEFAULT_SCORER.positions(text, pattern)
}

/// Computes either the score or the positions, with the default options.
pub fn compute(text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>, mode: MatchMode) -> MatchResult {
    DEFAULT_SCORER.compute(text, pattern, mode)
}
