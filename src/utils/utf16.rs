//! UTF-16 offset handling
//!
//! Browser text inputs count positions in UTF-16 code units while Rust
//! strings are indexed by byte. Everything that crosses that boundary goes
//! through here.

use crate::error::EditError;

/// Length of a string in UTF-16 code units
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Convert a UTF-16 offset into a byte index into `text`
///
/// Fails if the offset is past the end or lands inside a surrogate pair.
pub fn byte_index(text: &str, offset: usize) -> Result<usize, EditError> {
    let mut units = 0;

    for (idx, ch) in text.char_indices() {
        if units == offset {
            return Ok(idx);
        }
        units += ch.len_utf16();
        if units > offset {
            return Err(EditError::SplitsSurrogatePair { offset });
        }
    }

    if units == offset {
        Ok(text.len())
    } else {
        Err(EditError::OffsetOutOfBounds { offset, len: units })
    }
}
