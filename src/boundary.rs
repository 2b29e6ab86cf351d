//! Word-boundary classification.
//!
//! A match that starts or ends next to one of these bytes (or at an edge of
//! the candidate) reads as an intentional, word-aligned match, so `init`
//! inside `init.lua` outranks `nit`.

use crate::{BOUNDARY_WORD, ScoreType};

/// Bytes treated as word separators.
pub const BOUNDARY_CHARS: &[u8] = b" -_()[].:;/\\";

static BOUNDARY_SET: [bool; 256] = build_boundary_set();

const fn build_boundary_set() -> [bool; 256] {
    let mut set = [false; 256];
    let mut i = 0;
    while i < BOUNDARY_CHARS.len() {
        set[BOUNDARY_CHARS[i] as usize] = true;
        i += 1;
    }
    set
}

/// Returns true if `byte` separates words.
#[inline(always)]
pub fn is_boundary(byte: u8) -> bool {
    BOUNDARY_SET[byte as usize]
}

/// Bonus for the match occupying `text[begin..end]`.
///
/// Adds [`BOUNDARY_WORD`] when the match starts the text or follows a
/// boundary byte, and again when it ends the text or precedes one.
#[inline]
pub fn boundary_bonus(text: &[u8], begin: usize, end: usize) -> ScoreType {
    let mut bonus = 0;
    if begin == 0 || text.get(begin - 1).copied().is_some_and(is_boundary) {
        bonus += BOUNDARY_WORD;
    }
    if end >= text.len() || is_boundary(text[end]) {
        bonus += BOUNDARY_WORD;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOUNDARY_BOTH;

    #[test]
    fn test_members() {
        for &b in BOUNDARY_CHARS {
            assert!(is_boundary(b), "{:?} should be a boundary", b as char);
        }
        for b in [b'a', b'Z', b'0', b'~', b'#', 0u8, 0xff] {
            assert!(!is_boundary(b), "{b:#x} should not be a boundary");
        }
    }

    #[test]
    fn test_bonus_edges() {
        let text = b"init.lua";
        assert_eq!(boundary_bonus(text, 0, 4), BOUNDARY_BOTH);
        assert_eq!(boundary_bonus(text, 1, 4), BOUNDARY_WORD);
        assert_eq!(boundary_bonus(text, 0, 5), BOUNDARY_WORD);
        assert_eq!(boundary_bonus(text, 1, 3), 0);
        assert_eq!(boundary_bonus(text, 5, 8), BOUNDARY_BOTH);
    }

    #[test]
    fn test_path_separators() {
        assert_eq!(boundary_bonus(b"src/lib.rs", 4, 7), BOUNDARY_BOTH);
        assert_eq!(boundary_bonus(b"path\\to\\file", 5, 7), BOUNDARY_BOTH);
    }
}
