//! Social post formatter
//!
//! Pure functions over a caller-held text buffer. The text-input surface
//! passes in its text and selection, gets back new text plus the span (or
//! caret) to re-apply, and owns focus/selection restoration itself.
//!
//! ## Modules
//!
//! - `tables`: styled alphabets and strikethrough
//! - `case`: upper / lower / title case
//! - `edits`: bullet, caret insertion, emoji append
//! - `markdown`: delimiter stripping for the plain preview

pub mod case;
pub mod edits;
pub mod markdown;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::error::EditError;
use crate::text::buffer::{replace_span, slice_span};
use crate::text::cursor::SelectionSpan;
use crate::utils::utf16::{byte_index, utf16_len};

pub use case::CaseMode;
pub use edits::{append_emoji, insert_at_caret, insert_bullet_at_line_start, BULLET_MARKER, DEFAULT_EMOJI};
pub use markdown::strip_markdown_markers;
pub use tables::{StyleKind, STRIKE_MARK};

/// New text plus the span covering the replaced region
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResult {
    pub text: String,
    pub selection: SelectionSpan,
}

/// New text plus the caret offset to restore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaretEdit {
    pub text: String,
    pub caret: usize,
}

/// Apply a Unicode style to the selected text
///
/// The returned span starts where the selection started and covers the
/// styled replacement, which is usually longer than the input (styled
/// glyphs are two UTF-16 units, strikethrough adds a mark per character).
/// An empty span returns the input unchanged.
pub fn apply_style(text: &str, span: SelectionSpan, style: StyleKind) -> Result<EditResult, EditError> {
    transform_span(text, span, |selected| style.apply(selected))
}

/// Apply a case transform to the selected text
///
/// Same splice and span contract as [`apply_style`].
pub fn apply_case_transform(text: &str, span: SelectionSpan, mode: CaseMode) -> Result<EditResult, EditError> {
    transform_span(text, span, |selected| mode.apply(selected))
}

fn transform_span<F>(text: &str, span: SelectionSpan, transform: F) -> Result<EditResult, EditError>
where
    F: FnOnce(&str) -> String,
{
    if span.is_empty() {
        byte_index(text, span.start)?;
        return Ok(EditResult {
            text: text.to_string(),
            selection: span,
        });
    }

    let selected = slice_span(text, span)?;
    let replaced = transform(selected);
    let selection = SelectionSpan::from_len(span.start, utf16_len(&replaced));
    log::debug!("span {:?} -> {:?}", span, selection);

    Ok(EditResult {
        text: replace_span(text, span, &replaced)?,
        selection,
    })
}
