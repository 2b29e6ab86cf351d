//! Exact, case-sensitive substring matching.
//!
//! # Example:
//! ```
//! use fzs::fuzzy_matcher::TokenMatcher;
//! use fzs::fuzzy_matcher::exact::StrictMatcher;
//!
//! let matcher = StrictMatcher;
//! assert_eq!(Some(100), matcher.token_score(b"init.lua", b"init"));
//! assert_eq!(Some(vec![5, 6, 7]), matcher.token_indices(b"init.lua", b"lua"));
//! assert_eq!(None, matcher.token_score(b"init.lua", b"Init"));
//! ```

use memchr::memmem;

use crate::boundary::boundary_bonus;
use crate::fuzzy_matcher::{MatchIndices, ScoreType, TokenMatcher};
use crate::{BOUNDARY_BOTH, FULL_MATCH};

/// Matches a token as one contiguous substring of the candidate.
///
/// The first occurrence wins. Its score is [`FULL_MATCH`] minus whatever
/// boundary bonus the occurrence misses on either side.
#[derive(Debug, Default, Copy, Clone)]
pub struct StrictMatcher;

impl StrictMatcher {
    fn find(text: &[u8], token: &[u8]) -> Option<usize> {
        if token.is_empty() || token.len() > text.len() {
            return None;
        }
        memmem::find(text, token)
    }
}

impl TokenMatcher for StrictMatcher {
    fn token_score(&self, text: &[u8], token: &[u8]) -> Option<ScoreType> {
        let begin = Self::find(text, token)?;
        let end = begin + token.len();
        trace!("strict match at {begin}..{end}");
        Some(FULL_MATCH - BOUNDARY_BOTH + boundary_bonus(text, begin, end))
    }

    fn token_indices(&self, text: &[u8], token: &[u8]) -> Option<MatchIndices> {
        let begin = Self::find(text, token)?;
        Some((begin..begin + token.len()).collect())
    }
}
