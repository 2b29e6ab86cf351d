//! Query tokenization and strict/fuzzy classification.
//!
//! A query is split on the space byte. Each non-empty piece becomes a
//! [`Token`], tagged strict when it looks like an exact literal:
//!
//! - it contains an ASCII uppercase letter (`Vec`, `HTTP`),
//! - it is shorter than the minimum fuzzy length,
//! - its lowercase form is one of the reserved short words (`src`, `lua`, ...).
//!
//! Everything else is matched fuzzily.

use std::collections::HashSet;
use std::iter::FusedIterator;
use std::slice::Split;
use std::sync::LazyLock;

use crate::options::ScorerOptions;

/// Separator between query tokens.
pub const TOKEN_SEPARATOR: u8 = b' ';

/// Short words that users type as literals rather than as fuzzy fragments.
pub const RESERVED_STRICT_WORDS: &[&str] = &[
    "api", "app", "bin", "cmd", "cpp", "css", "env", "git", "hpp", "lib", "log", "lua", "src", "std", "str", "tmp",
    "vim",
];

static RESERVED_SET: LazyLock<HashSet<&'static [u8]>> =
    LazyLock::new(|| RESERVED_STRICT_WORDS.iter().map(|w| w.as_bytes()).collect());

static RESERVED_MAX_LEN: LazyLock<usize> =
    LazyLock::new(|| RESERVED_STRICT_WORDS.iter().map(|w| w.len()).max().unwrap_or(0));

/// Returns true if the lowercase form of `word` is a reserved strict word.
pub fn is_reserved_word(word: &[u8]) -> bool {
    let mut buf = [0u8; 16];
    if word.len() > *RESERVED_MAX_LEN || word.len() > buf.len() {
        return false;
    }
    let lower = &mut buf[..word.len()];
    lower.copy_from_slice(word);
    lower.make_ascii_lowercase();
    RESERVED_SET.contains(&*lower)
}

//------------------------------------------------------------------------------
/// One space-delimited piece of a query.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    bytes: &'a [u8],
    start: usize,
    strict: bool,
}

impl<'a> Token<'a> {
    /// The token's bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of the token in the pattern.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length of the token in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Tokens are never empty; provided for completeness with [`Token::len`].
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the token must match as an exact substring.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

//------------------------------------------------------------------------------
/// Iterator over the classified tokens of a pattern.
///
/// Created by [`tokenize`]. Tokens borrow the pattern and are produced lazily.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    pieces: Split<'a, u8, fn(&u8) -> bool>,
    offset: usize,
    min_fuzzy_len: usize,
    strict_keywords: bool,
}

fn is_separator(b: &u8) -> bool {
    *b == TOKEN_SEPARATOR
}

/// Splits `pattern` on spaces and classifies every non-empty piece.
pub fn tokenize<'a>(pattern: &'a [u8], options: &ScorerOptions) -> Tokens<'a> {
    Tokens {
        pieces: pattern.split(is_separator as fn(&u8) -> bool),
        offset: 0,
        min_fuzzy_len: options.min_fuzzy_len,
        strict_keywords: options.strict_keywords,
    }
}

impl Tokens<'_> {
    fn is_strict(&self, piece: &[u8]) -> bool {
        piece.len() < self.min_fuzzy_len
            || piece.iter().any(u8::is_ascii_uppercase)
            || (self.strict_keywords && is_reserved_word(piece))
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let piece = self.pieces.next()?;
            let start = self.offset;
            self.offset += piece.len() + 1;
            if piece.is_empty() {
                continue;
            }
            return Some(Token {
                bytes: piece,
                start,
                strict: self.is_strict(piece),
            });
        }
    }
}

impl FusedIterator for Tokens<'_> {}
