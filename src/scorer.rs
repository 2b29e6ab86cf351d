//! Score aggregation over the tokens of a query.

use crate::fuzzy_matcher::exact::StrictMatcher;
use crate::fuzzy_matcher::gapped::FuzzyMatcher;
use crate::fuzzy_matcher::{MatchIndices, ScoreType, TokenMatcher};
use crate::options::{OptionsError, ScorerOptions};
use crate::pattern::{Token, tokenize};
use crate::{FULL_MATCH, MISMATCH, MatchMode, MatchResult};

//==============================================================================
/// Scores queries against candidates.
///
/// A scorer holds no per-call state: it can be shared by reference between
/// threads and called concurrently on different inputs.
#[derive(Debug, Clone)]
pub struct Scorer {
    options: ScorerOptions,
    strict: StrictMatcher,
    fuzzy: FuzzyMatcher,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::from_valid(ScorerOptions::default())
    }
}

impl Scorer {
    /// Creates a scorer, rejecting options that cannot produce sane scores.
    pub fn new(options: ScorerOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        debug!("new scorer with {options:?}");
        Ok(Self::from_valid(options))
    }

    fn from_valid(options: ScorerOptions) -> Self {
        let fuzzy = FuzzyMatcher::default()
            .match_char(options.match_char)
            .gap_penalty(options.gap_penalty)
            .max_gap(options.max_gap);
        Self {
            options,
            strict: StrictMatcher,
            fuzzy,
        }
    }

    /// The options this scorer was built with.
    pub fn options(&self) -> &ScorerOptions {
        &self.options
    }

    fn matcher(&self, token: &Token) -> &dyn TokenMatcher {
        if token.is_strict() { &self.strict } else { &self.fuzzy }
    }

    /// Computes the result shape selected by `mode`.
    pub fn compute(&self, text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>, mode: MatchMode) -> MatchResult {
        match mode {
            MatchMode::Score => MatchResult::Score(self.score(text, pattern)),
            MatchMode::Positions => MatchResult::Positions(self.positions(text, pattern)),
        }
    }

    /// Scores `pattern` against `text`.
    ///
    /// Every token has to match; the result is the sum of the token scores, or
    /// [`MISMATCH`] as soon as one token fails. An empty pattern matches
    /// everything with [`FULL_MATCH`].
    pub fn score(&self, text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> ScoreType {
        let (text, pattern) = (text.as_ref(), pattern.as_ref());

        if pattern.is_empty() {
            return FULL_MATCH;
        }
        if pattern.len() > text.len() {
            return MISMATCH;
        }
        if pattern.len() < self.options.min_fuzzy_len {
            return self.strict.token_score(text, pattern).unwrap_or(MISMATCH);
        }

        let mut tokens = tokenize(pattern, &self.options);
        let Some(first) = tokens.next() else {
            // nothing but spaces
            return FULL_MATCH;
        };

        let mut total = match self.matcher(&first).token_score(text, first.as_bytes()) {
            Some(score) => score,
            None => return MISMATCH,
        };
        for token in tokens {
            match self.matcher(&token).token_score(text, token.as_bytes()) {
                Some(score) => total = total.saturating_add(score),
                None => {
                    trace!("token at {} did not match", token.start());
                    return MISMATCH;
                }
            }
        }
        total
    }

    /// Byte offsets of `text` matched by `pattern`.
    ///
    /// Offsets are grouped per token in the order the tokens appear in the
    /// pattern, increasing within each group. They are neither sorted nor
    /// de-duplicated across tokens. Tokens that do not match contribute
    /// nothing, so a non-matching pattern may still return partial positions.
    pub fn positions(&self, text: impl AsRef<[u8]>, pattern: impl AsRef<[u8]>) -> MatchIndices {
        let (text, pattern) = (text.as_ref(), pattern.as_ref());

        if pattern.is_empty() || pattern.len() > text.len() {
            return MatchIndices::new();
        }
        if pattern.len() < self.options.min_fuzzy_len {
            return self.strict.token_indices(text, pattern).unwrap_or_default();
        }

        let mut tokens = tokenize(pattern, &self.options);
        let Some(first) = tokens.next() else {
            return MatchIndices::new();
        };

        let mut indices = self.matcher(&first).token_indices(text, first.as_bytes()).unwrap_or_default();
        for token in tokens {
            if let Some(more) = self.matcher(&token).token_indices(text, token.as_bytes()) {
                indices.extend(more);
            }
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BOUNDARY_BOTH, BOUNDARY_WORD};

    fn scorer() -> Scorer {
        Scorer::default()
    }

    #[test]
    fn test_edge_cases() {
        let s = scorer();
        assert_eq!(s.score("init.lua", ""), FULL_MATCH);
        assert_eq!(s.score("", ""), FULL_MATCH);
        assert_eq!(s.score("", "a"), MISMATCH);
        assert_eq!(s.score("ab", "abc"), MISMATCH);
        assert!(s.positions("init.lua", "").is_empty());
        assert!(s.positions("ab", "abc").is_empty());
    }

    #[test]
    fn test_short_pattern_is_one_strict_token() {
        let s = scorer();
        assert_eq!(s.score("init.lua", "ni"), FULL_MATCH - BOUNDARY_BOTH);
        // the space is part of the literal
        assert_eq!(s.score("init.lua", "i "), MISMATCH);
        assert_eq!(s.score("a b", "a "), FULL_MATCH - BOUNDARY_WORD);
        assert_eq!(s.positions("a b", "a "), vec![0, 1]);
    }

    #[test]
    fn test_blank_pattern() {
        let s = scorer();
        assert_eq!(s.score("init.lua", "   "), FULL_MATCH);
        assert!(s.positions("init.lua", "   ").is_empty());
        assert_eq!(s.score("init.lua", " init "), FULL_MATCH);
    }

    #[test]
    fn test_and_semantics() {
        let s = scorer();
        assert_eq!(s.score("integration_location_util.cpp", "location util"), 2 * FULL_MATCH);
        assert_eq!(s.score("init.lua", "init vim"), MISMATCH);
        assert_eq!(s.score("src/lib.rs", "src lib"), 2 * FULL_MATCH);
    }

    #[test]
    fn test_positions_keep_token_order() {
        let s = scorer();
        assert_eq!(
            s.positions("integration_location_util.cpp", "util location"),
            vec![21, 22, 23, 24, 12, 13, 14, 15, 16, 17, 18, 19]
        );
    }

    #[test]
    fn test_partial_positions() {
        assert_eq!(scorer().positions("init.lua", "init vim"), vec![0, 1, 2, 3]);
        assert_eq!(scorer().positions("init.lua", "vim nit"), vec![1, 2, 3]);
    }

    #[test]
    fn test_compute_modes() {
        let s = scorer();
        assert_eq!(s.compute("init.lua", "nit", MatchMode::Score), MatchResult::Score(98));
        assert_eq!(
            s.compute("init.lua", "nit", MatchMode::Positions),
            MatchResult::Positions(vec![1, 2, 3])
        );
    }

    #[test]
    fn test_new_rejects_invalid_options() {
        let options = ScorerOptions {
            match_char: 0,
            ..Default::default()
        };
        assert_eq!(Scorer::new(options).unwrap_err(), OptionsError::MatchChar(0));
    }

    #[test]
    fn test_strict_keywords_toggle() {
        let strict = scorer();
        let relaxed = Scorer::new(ScorerOptions {
            strict_keywords: false,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(strict.score("s_r_c", "src"), MISMATCH);
        assert_eq!(relaxed.score("s_r_c", "src"), 67);
    }
}
