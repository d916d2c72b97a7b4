//! Selection spans and caret offsets for a flat text buffer
//!
//! Offsets are UTF-16 code units, the unit a browser textarea reports
//! through `selectionStart` / `selectionEnd`.

use serde::{Deserialize, Serialize};

use crate::error::EditError;

/// A selection from start (inclusive) to end (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SelectionSpan {
    pub start: usize,
    pub end: usize,
}

impl SelectionSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create a collapsed span (caret only, no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Create a span of `len` units starting at `start`
    pub fn from_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Check if this span is empty (start == end)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length in UTF-16 code units
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check ordering and bounds against a text of `text_len` units
    pub fn validate(&self, text_len: usize) -> Result<(), EditError> {
        if self.start > self.end {
            return Err(EditError::InvertedSpan {
                start: self.start,
                end: self.end,
            });
        }
        if self.end > text_len {
            return Err(EditError::OffsetOutOfBounds {
                offset: self.end,
                len: text_len,
            });
        }
        Ok(())
    }
}
