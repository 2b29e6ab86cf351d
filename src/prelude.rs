//! Convenience re-exports of commonly used types.
//!
//! `use fzs::prelude::*;` brings the scorer, its options and the result types
//! into scope.

pub use crate::fuzzy_matcher::{TokenMatcher, exact::StrictMatcher, gapped::FuzzyMatcher};
pub use crate::options::{OptionsError, ScorerOptions, ScorerOptionsBuilder};
pub use crate::pattern::{Token, tokenize};
pub use crate::util::wrap_matches;
pub use crate::*;
