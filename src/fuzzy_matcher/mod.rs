//! Per-token matching algorithms.
//!
//! Every token of a query is handed to one of two matchers: the strict
//! matcher for exact substrings, or the gapped fuzzy matcher. Both only look at
//! raw bytes.

/// Strict substring matcher
pub mod exact;
/// Gapped subsequence matcher
pub mod gapped;

/// Byte offset into a candidate.
pub type IndexType = usize;
/// Score of a match, as reported to callers.
pub type ScoreType = i32;

/// Matched byte offsets, increasing within one token.
pub type MatchIndices = Vec<IndexType>;

/// Trait for matching a single query token against a candidate.
///
/// `None` always means "no match"; a match never reports [`crate::MISMATCH`].
pub trait TokenMatcher: Send + Sync {
    /// Match `token` against `text` and return the score of the best placement.
    fn token_score(&self, text: &[u8], token: &[u8]) -> Option<ScoreType>;

    /// Match `token` against `text` and return the matched byte offsets of the
    /// best placement, without computing its score for the caller.
    fn token_indices(&self, text: &[u8], token: &[u8]) -> Option<MatchIndices>;
}
