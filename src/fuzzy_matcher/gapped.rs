//! Gapped, case-insensitive subsequence matching.
//!
//! The token's bytes have to appear in order in the candidate, but not
//! necessarily next to each other. Every candidate byte skipped between two
//! matched bytes costs [`GAP_PENALTY`](crate::GAP_PENALTY), and a single gap
//! wider than [`MAX_GAP`](crate::MAX_GAP) rejects the placement outright so
//! that scattered, meaningless matches never show up.
//!
//! For each possible start offset the matcher walks the token greedily from
//! left to right, taking the nearest matching candidate byte each time. A
//! complete placement is scored as
//!
//! ```text
//! normalized = round((len * MATCH_CHAR - penalty) / (len * MATCH_CHAR) * 100)
//!            + boundary_bonus - BOUNDARY_BOTH
//! ```
//!
//! and the best placement over all start offsets wins. A gapless placement
//! with boundaries on both sides scores [`FULL_MATCH`] and ends the search.
//!
//! Candidate bytes are folded to ASCII lowercase before comparison; token bytes
//! are compared as given, since only lowercase tokens are routed here.
//!
//! # Example:
//! ```
//! use fzs::fuzzy_matcher::TokenMatcher;
//! use fzs::fuzzy_matcher::gapped::FuzzyMatcher;
//!
//! let matcher = FuzzyMatcher::default();
//!
//! assert_eq!(None, matcher.token_score(b"init.lua", b"vim"));
//! assert_eq!(Some(100), matcher.token_score(b"INIT.lua", b"init"));
//!
//! let indices = matcher.token_indices(b"mapping_suggest_station_header.cpp", b"mpns").unwrap();
//! assert_eq!(indices, [0, 2, 5, 8]);
//! ```

use crate::boundary::boundary_bonus;
use crate::fuzzy_matcher::{IndexType, MatchIndices, ScoreType, TokenMatcher};
use crate::{BOUNDARY_BOTH, FULL_MATCH, GAP_PENALTY, MATCH_CHAR, MAX_GAP};

/// A complete greedy placement of a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Placement {
    first: IndexType,
    last: IndexType,
    penalty: ScoreType,
}

/// Outcome of walking a token from one start offset.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Walk {
    /// Every token byte was found
    Complete(Placement),
    /// The first byte was found at `first`, but the rest failed
    Abandoned { first: IndexType },
    /// The first byte does not occur anymore, no later start can match
    Exhausted,
}

/// Gapped fuzzy matcher.
#[derive(Debug, Copy, Clone)]
pub struct FuzzyMatcher {
    match_char: ScoreType,
    gap_penalty: ScoreType,
    max_gap: usize,
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self {
            match_char: MATCH_CHAR,
            gap_penalty: GAP_PENALTY,
            max_gap: MAX_GAP,
        }
    }
}

impl FuzzyMatcher {
    /// Sets the weight of one matched character.
    pub fn match_char(mut self, match_char: ScoreType) -> Self {
        self.match_char = match_char;
        self
    }

    /// Sets the cost of each skipped candidate byte.
    pub fn gap_penalty(mut self, gap_penalty: ScoreType) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    /// Sets the widest gap a placement may contain.
    pub fn max_gap(mut self, max_gap: usize) -> Self {
        self.max_gap = max_gap;
        self
    }

    /// Walk `token` through `text` starting at `start`, greedily taking the
    /// nearest case-folded match for each byte. `on_match` sees every matched
    /// offset of a walk, including walks that end up abandoned.
    #[inline]
    fn walk(&self, text: &[u8], token: &[u8], start: usize, mut on_match: impl FnMut(IndexType)) -> Walk {
        let mut first = None;
        let mut cursor = start;
        let mut penalty: ScoreType = 0;

        for &needle in token {
            let Some(offset) = text[cursor..]
                .iter()
                .position(|&b| b.to_ascii_lowercase() == needle)
            else {
                return match first {
                    Some(first) => Walk::Abandoned { first },
                    None => Walk::Exhausted,
                };
            };
            let pos = cursor + offset;

            match first {
                None => first = Some(pos),
                Some(first) => {
                    let gap = pos - cursor;
                    if gap > self.max_gap {
                        return Walk::Abandoned { first };
                    }
                    penalty = penalty.saturating_add((gap as ScoreType).saturating_mul(self.gap_penalty));
                }
            }

            on_match(pos);
            cursor = pos + 1;
        }

        match first {
            Some(first) => Walk::Complete(Placement {
                first,
                last: cursor - 1,
                penalty,
            }),
            None => Walk::Exhausted,
        }
    }

    /// Score of a complete placement, `None` when it is too scattered to count.
    fn placement_score(&self, text: &[u8], token_len: usize, placement: &Placement) -> Option<ScoreType> {
        let boundary = boundary_bonus(text, placement.first, placement.last + 1);
        if placement.penalty == 0 && boundary == BOUNDARY_BOTH {
            return Some(FULL_MATCH);
        }

        let max_score = (token_len as ScoreType).saturating_mul(self.match_char);
        let raw = max_score - placement.penalty;
        if raw <= 0 {
            return None;
        }

        let normalized = (raw as f32 / max_score as f32 * FULL_MATCH as f32).round() as ScoreType;
        let adjusted = normalized + boundary - BOUNDARY_BOTH;
        (adjusted > 0).then_some(adjusted)
    }

    /// Find the best placement over every start offset.
    ///
    /// Returns the score and the start offset that reproduces the placement.
    fn best_placement(&self, text: &[u8], token: &[u8]) -> Option<(ScoreType, usize)> {
        if token.is_empty() || token.len() > text.len() {
            return None;
        }

        let last_start = text.len() - token.len();
        let mut best: Option<(ScoreType, usize)> = None;
        let mut start = 0;

        while start <= last_start {
            match self.walk(text, token, start, |_| ()) {
                Walk::Exhausted => break,
                Walk::Abandoned { first } => start = first + 1,
                Walk::Complete(placement) => {
                    if let Some(score) = self.placement_score(text, token.len(), &placement) {
                        trace!(
                            "placement {}..={} penalty {} score {}",
                            placement.first, placement.last, placement.penalty, score
                        );
                        if score == FULL_MATCH {
                            return Some((score, placement.first));
                        }
                        if best.is_none_or(|(best_score, _)| score > best_score) {
                            best = Some((score, placement.first));
                        }
                    }
                    start = placement.first + 1;
                }
            }
        }

        best
    }
}

impl TokenMatcher for FuzzyMatcher {
    fn token_score(&self, text: &[u8], token: &[u8]) -> Option<ScoreType> {
        self.best_placement(text, token).map(|(score, _)| score)
    }

    fn token_indices(&self, text: &[u8], token: &[u8]) -> Option<MatchIndices> {
        let (_, start) = self.best_placement(text, token)?;
        let mut indices = MatchIndices::with_capacity(token.len());
        // the winning walk is deterministic, replaying it yields the same offsets
        self.walk(text, token, start, |pos| indices.push(pos));
        Some(indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::wrap_matches;

    fn score(text: &str, token: &str) -> Option<ScoreType> {
        FuzzyMatcher::default().token_score(text.as_bytes(), token.as_bytes())
    }

    fn wrap_fuzzy_match(text: &str, token: &str) -> Option<String> {
        let indices = FuzzyMatcher::default().token_indices(text.as_bytes(), token.as_bytes())?;
        Some(String::from_utf8_lossy(&wrap_matches(text.as_bytes(), &indices)).into_owned())
    }

    #[test]
    fn test_no_match() {
        assert_eq!(None, score("init.lua", "vim"));
        assert_eq!(None, score("abc", "abx"));
        assert_eq!(None, score("", "abc"));
        assert_eq!(None, score("ab", "abc"));
    }

    #[test]
    fn test_perfect_match() {
        assert_eq!(Some(FULL_MATCH), score("init.lua", "init"));
        assert_eq!(Some(FULL_MATCH), score("integration_location_util.cpp", "location"));
        assert_eq!(Some(FULL_MATCH), score("INTEGRATION.cmake", "cmake"));
    }

    #[test]
    fn test_missing_boundaries() {
        assert_eq!(Some(98), score("init.lua", "init."));
        assert_eq!(Some(98), score("init.lua", "nit"));
        assert_eq!(Some(98), score("INTEGRATION.cmake", "inte"));
        assert_eq!(Some(96), score("xabcx", "abc"));
    }

    #[test]
    fn test_gap_penalty() {
        // one gap of 2: penalty 10 of 30
        assert_eq!(Some(67), score("axxbc", "abc"));
        assert_eq!(Some(36), score("mapping_suggest_station_header.cpp", "mpns"));
    }

    #[test]
    fn test_max_gap_abandons_placement() {
        assert_eq!(None, score("axxxxxxxxxxbc", "abc"));
        let lenient = FuzzyMatcher::default().max_gap(10).gap_penalty(1);
        assert!(lenient.token_score(b"axxxxxxxxxxbc", b"abc").is_some());
    }

    #[test]
    fn test_scattered_placement_never_scores_zero() {
        // total gap of 6 eats the whole 30 points of a 3 byte token
        assert_eq!(None, score("axxxbxxxc", "abc"));
        assert_eq!(Some(33), score("axxbxxc", "abc"));
    }

    #[test]
    fn test_best_placement_wins() {
        assert_eq!(Some(FULL_MATCH), score("axbxc_abc", "abc"));
        assert_eq!("axbxc_[a][b][c]", &wrap_fuzzy_match("axbxc_abc", "abc").unwrap());

        assert_eq!(Some(96), score("xabcx_axbc", "abc"));
        assert_eq!("x[a][b][c]x_axbc", &wrap_fuzzy_match("xabcx_axbc", "abc").unwrap());
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(Some(FULL_MATCH), score("README.md", "readme"));
        assert_eq!("[R][E][A][D][M][E].md", &wrap_fuzzy_match("README.md", "readme").unwrap());
        // token bytes are not folded
        assert_eq!(None, score("readme.md", "README"));
    }

    #[test]
    fn test_indices() {
        assert_eq!(
            "[m]a[p]pi[n]g_[s]uggest_station_header.cpp",
            &wrap_fuzzy_match("mapping_suggest_station_header.cpp", "mpns").unwrap()
        );
        assert_eq!("[a]xx[b][c]", &wrap_fuzzy_match("axxbc", "abc").unwrap());
        assert_eq!(None, wrap_fuzzy_match("init.lua", "vim"));
    }

    #[test]
    fn test_walk_outcomes() {
        let matcher = FuzzyMatcher::default();
        assert_eq!(Walk::Exhausted, matcher.walk(b"xyz", b"abc", 0, |_| ()));
        assert_eq!(Walk::Abandoned { first: 1 }, matcher.walk(b"xab", b"abc", 0, |_| ()));
        assert_eq!(
            Walk::Complete(Placement {
                first: 0,
                last: 4,
                penalty: 2 * GAP_PENALTY
            }),
            matcher.walk(b"axbxc", b"abc", 0, |_| ())
        );
    }
}
