//! Error types for text edits and selector parsing
//!
//! Payload encoding itself cannot fail; the only caller-visible failures are
//! offsets that don't address the text and selector strings we don't know.

use thiserror::Error;

/// Offset precondition violations for in-place edits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// Offset lies past the end of the text
    #[error("offset {offset} out of bounds (text length {len})")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// Span start is after its end
    #[error("invalid selection span: start {start} > end {end}")]
    InvertedSpan { start: usize, end: usize },

    /// Offset points between the two halves of a surrogate pair
    #[error("offset {offset} splits a surrogate pair")]
    SplitsSurrogatePair { offset: usize },
}

/// Unknown selector string coming from the UI (style, case mode, encoding, kind)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSelectorError {
    #[error("unknown {what}: '{value}'")]
    Unknown { what: &'static str, value: String },
}

impl ParseSelectorError {
    pub(crate) fn unknown(what: &'static str, value: &str) -> Self {
        ParseSelectorError::Unknown {
            what,
            value: value.to_string(),
        }
    }
}
