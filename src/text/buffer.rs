//! Splicing primitives over a caller-held text buffer
//!
//! The buffer is a plain `&str` owned by the text-input surface. Every
//! function here returns a fresh `String`; nothing is kept between calls.

use super::cursor::SelectionSpan;
use crate::error::EditError;
use crate::utils::utf16::{byte_index, utf16_len};

/// Borrow the text covered by `span`
pub fn slice_span(text: &str, span: SelectionSpan) -> Result<&str, EditError> {
    span.validate(utf16_len(text))?;
    let start = byte_index(text, span.start)?;
    let end = byte_index(text, span.end)?;
    Ok(&text[start..end])
}

/// Replace the text covered by `span` with `replacement`
pub fn replace_span(text: &str, span: SelectionSpan, replacement: &str) -> Result<String, EditError> {
    span.validate(utf16_len(text))?;
    let start = byte_index(text, span.start)?;
    let end = byte_index(text, span.end)?;

    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    Ok(out)
}

/// Insert `insertion` at `offset`
pub fn insert_at(text: &str, offset: usize, insertion: &str) -> Result<String, EditError> {
    replace_span(text, SelectionSpan::collapsed(offset), insertion)
}

/// Offset of the first unit of the line containing `offset`
///
/// That is the position right after the nearest preceding `\n`, or 0.
pub fn line_start(text: &str, offset: usize) -> Result<usize, EditError> {
    let idx = byte_index(text, offset)?;
    match text[..idx].rfind('\n') {
        // '\n' is one unit wide, so its byte prefix converts directly
        Some(nl) => Ok(utf16_len(&text[..nl]) + 1),
        None => Ok(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_span() {
        assert_eq!(slice_span("hello world", SelectionSpan::new(6, 11)), Ok("world"));
        assert_eq!(slice_span("𝗮bc", SelectionSpan::new(2, 3)), Ok("b"));
    }

    #[test]
    fn test_replace_span() {
        let out = replace_span("1 2 3", SelectionSpan::new(0, 1), "7").unwrap();
        assert_eq!(out, "7 2 3");

        let out = replace_span("abc", SelectionSpan::new(1, 2), "XYZ").unwrap();
        assert_eq!(out, "aXYZc");
    }

    #[test]
    fn test_replace_span_rejects_bad_offsets() {
        assert!(replace_span("abc", SelectionSpan::new(2, 1), "x").is_err());
        assert!(replace_span("abc", SelectionSpan::new(0, 9), "x").is_err());
    }

    #[test]
    fn test_insert_at() {
        assert_eq!(insert_at("hello", 5, "!").unwrap(), "hello!");
        assert_eq!(insert_at("hello", 0, ">").unwrap(), ">hello");
    }

    #[test]
    fn test_line_start() {
        let text = "hello\nworld\n!";
        assert_eq!(line_start(text, 0), Ok(0));
        assert_eq!(line_start(text, 5), Ok(0));
        assert_eq!(line_start(text, 6), Ok(6));
        assert_eq!(line_start(text, 8), Ok(6));
        assert_eq!(line_start(text, 13), Ok(12));
    }

    #[test]
    fn test_line_start_after_astral_glyphs() {
        // "𝗮𝗯" is 4 units, newline at offset 4
        let text = "𝗮𝗯\nxy";
        assert_eq!(line_start(text, 6), Ok(5));
    }
}
