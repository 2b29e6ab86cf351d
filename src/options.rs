//! Configuration options for the scorer.
//!
//! The defaults are the canonical tuning; most hosts never change them. The
//! same struct doubles as the command-line flags of the `fzs` binary.

use derive_builder::{Builder, UninitializedFieldError};
use thiserror::Error;

use crate::fuzzy_matcher::ScoreType;
use crate::{GAP_PENALTY, MATCH_CHAR, MAX_GAP, MIN_FUZZY_PATTERN_SIZE};

/// Errors raised while building a [`ScorerOptions`] or a [`crate::Scorer`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// A builder field could not be initialized
    #[error("uninitialized field: {0}")]
    UninitializedField(&'static str),
    /// `match_char` must be strictly positive
    #[error("match-char must be greater than 0, got {0}")]
    MatchChar(ScoreType),
    /// `gap_penalty` must not be negative
    #[error("gap-penalty must not be negative, got {0}")]
    GapPenalty(ScoreType),
    /// `min_fuzzy_len` must be at least 1
    #[error("min-fuzzy-len must be at least 1")]
    MinFuzzyLen,
}

impl From<UninitializedFieldError> for OptionsError {
    fn from(err: UninitializedFieldError) -> Self {
        OptionsError::UninitializedField(err.field_name())
    }
}

/// Tuning of the fuzzy scorer.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(default)]
#[builder(build_fn(validate = "Self::validate", error = "OptionsError"))]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct ScorerOptions {
    /// Tokens shorter than this are matched as exact substrings
    #[cfg_attr(
        feature = "cli",
        arg(long, default_value_t = MIN_FUZZY_PATTERN_SIZE, help_heading = "Scoring")
    )]
    pub min_fuzzy_len: usize,

    /// Weight of one matched character in a fuzzy match
    #[cfg_attr(feature = "cli", arg(long, default_value_t = MATCH_CHAR, help_heading = "Scoring"))]
    pub match_char: ScoreType,

    /// Cost of every byte skipped between two fuzzy-matched characters
    #[cfg_attr(feature = "cli", arg(long, default_value_t = GAP_PENALTY, help_heading = "Scoring"))]
    pub gap_penalty: ScoreType,

    /// Widest gap allowed between two fuzzy-matched characters
    #[cfg_attr(feature = "cli", arg(long, default_value_t = MAX_GAP, help_heading = "Scoring"))]
    pub max_gap: usize,

    /// Match reserved short words (src, lua, git...) as exact substrings
    ///
    /// Pass --no-strict-keywords to match them fuzzily like any other lowercase token
    #[cfg_attr(
        feature = "cli",
        arg(
            long = "no-strict-keywords",
            action = clap::ArgAction::SetFalse,
            help_heading = "Scoring"
        )
    )]
    pub strict_keywords: bool,
}

impl Default for ScorerOptions {
    fn default() -> Self {
        Self {
            min_fuzzy_len: MIN_FUZZY_PATTERN_SIZE,
            match_char: MATCH_CHAR,
            gap_penalty: GAP_PENALTY,
            max_gap: MAX_GAP,
            strict_keywords: true,
        }
    }
}

impl ScorerOptions {
    /// Checks that the options describe a usable scorer.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.match_char <= 0 {
            return Err(OptionsError::MatchChar(self.match_char));
        }
        if self.gap_penalty < 0 {
            return Err(OptionsError::GapPenalty(self.gap_penalty));
        }
        if self.min_fuzzy_len == 0 {
            return Err(OptionsError::MinFuzzyLen);
        }
        Ok(())
    }
}

impl ScorerOptionsBuilder {
    fn validate(&self) -> Result<(), OptionsError> {
        let defaults = ScorerOptions::default();
        ScorerOptions {
            min_fuzzy_len: self.min_fuzzy_len.unwrap_or(defaults.min_fuzzy_len),
            match_char: self.match_char.unwrap_or(defaults.match_char),
            gap_penalty: self.gap_penalty.unwrap_or(defaults.gap_penalty),
            max_gap: self.max_gap.unwrap_or(defaults.max_gap),
            strict_keywords: self.strict_keywords.unwrap_or(defaults.strict_keywords),
        }
        .validate()
    }
}
