//! C-compatible interface for hosts such as editor plugins.
//!
//! # Memory Ownership Rules
//!
//! - `text` and `pattern` are NUL-terminated byte strings borrowed for the
//!   duration of the call. A null pointer reads as the empty string.
//! - `fzs_get_positions()` allocates on the Rust heap; the caller owns the
//!   returned pointer and must release it with `fzs_free_positions()`.
//! - Nothing is cached between calls; every function may be called from any
//!   thread concurrently.
//!
//! ```c
//! int fzs_get_score(const char *text, const char *pattern);
//! fzs_position_t *fzs_get_positions(const char *text, const char *pattern);
//! void fzs_free_positions(fzs_position_t *pos);
//! ```

use std::ffi::CStr;
use std::os::raw::{c_char, c_int, c_uint};
use std::ptr;

use crate::fuzzy_matcher::MatchIndices;

/// C-compatible list of matched byte offsets (`fzs_position_t`).
///
/// `data` is null when `size` is 0. `cap` always equals `size`.
#[repr(C)]
#[derive(Debug)]
pub struct FzsPositions {
    /// Matched byte offsets
    pub data: *mut c_uint,
    /// Number of offsets in `data`
    pub size: usize,
    /// Allocated length of `data`
    pub cap: usize,
}

impl FzsPositions {
    fn from_indices(indices: MatchIndices) -> Self {
        if indices.is_empty() {
            return Self {
                data: ptr::null_mut(),
                size: 0,
                cap: 0,
            };
        }
        let offsets: Box<[c_uint]> = indices.into_iter().map(|i| i as c_uint).collect();
        let size = offsets.len();
        Self {
            data: Box::into_raw(offsets) as *mut c_uint,
            size,
            cap: size,
        }
    }
}

/// Borrow a C string as bytes, reading null as empty.
///
/// # Safety
/// `s` must be null or point to a valid NUL-terminated string that outlives `'a`.
unsafe fn bytes_or_empty<'a>(s: *const c_char) -> &'a [u8] {
    if s.is_null() {
        return &[];
    }
    unsafe { CStr::from_ptr(s) }.to_bytes()
}

// ============================================================================
// Scoring
// ============================================================================

/// Scores `pattern` against `text` with the default options.
///
/// Returns 0 on mismatch.
///
/// # Safety
/// Both pointers must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fzs_get_score(text: *const c_char, pattern: *const c_char) -> c_int {
    let (text, pattern) = unsafe { (bytes_or_empty(text), bytes_or_empty(pattern)) };
    crate::score(text, pattern)
}

/// Returns the byte offsets of `text` matched by `pattern`.
///
/// Never returns null. Release the result with [`fzs_free_positions`].
///
/// # Safety
/// Both pointers must be null or valid NUL-terminated strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fzs_get_positions(text: *const c_char, pattern: *const c_char) -> *mut FzsPositions {
    let (text, pattern) = unsafe { (bytes_or_empty(text), bytes_or_empty(pattern)) };
    let positions = FzsPositions::from_indices(crate::positions(text, pattern));
    trace!("returning {} positions", positions.size);
    Box::into_raw(Box::new(positions))
}

/// Releases a result of [`fzs_get_positions`]. Null is a no-op.
///
/// # Safety
/// `pos` must be null or a pointer returned by [`fzs_get_positions`] that has
/// not been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fzs_free_positions(pos: *mut FzsPositions) {
    if pos.is_null() {
        return;
    }
    let pos = unsafe { Box::from_raw(pos) };
    if !pos.data.is_null() && pos.cap > 0 {
        unsafe {
            let _ = Box::from_raw(ptr::slice_from_raw_parts_mut(pos.data, pos.cap));
        }
    }
}
