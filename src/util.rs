//! Rendering helpers for matched positions.

use crate::fuzzy_matcher::IndexType;

/// Wraps every byte of `text` listed in `indices` in `[` and `]`.
///
/// Offsets may come in any order and may repeat; each byte is wrapped once.
/// Offsets past the end of `text` are ignored.
///
/// ```
/// use fzs::util::wrap_matches;
///
/// assert_eq!(wrap_matches(b"init.lua", &[5, 6, 7]), b"init.[l][u][a]");
/// ```
pub fn wrap_matches(text: &[u8], indices: &[IndexType]) -> Vec<u8> {
    let mut marked = vec![false; text.len()];
    for &idx in indices {
        if let Some(slot) = marked.get_mut(idx) {
            *slot = true;
        }
    }

    let mut ret = Vec::with_capacity(text.len() + 2 * indices.len());
    for (&byte, &is_match) in text.iter().zip(marked.iter()) {
        if is_match {
            ret.push(b'[');
            ret.push(byte);
            ret.push(b']');
        } else {
            ret.push(byte);
        }
    }
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unordered_and_repeated() {
        assert_eq!(wrap_matches(b"abcd", &[3, 0, 0]), b"[a]bc[d]");
    }

    #[test]
    fn test_wrap_out_of_range() {
        assert_eq!(wrap_matches(b"ab", &[1, 7]), b"a[b]");
        assert_eq!(wrap_matches(b"", &[0]), b"");
    }
}
