//! Structural edits at the caret
//!
//! Bullet insertion, glyph/emoji insertion, and the toolbar's append-emoji.

use crate::error::EditError;
use crate::text::buffer::{insert_at, line_start};
use crate::utils::utf16::utf16_len;

use super::CaretEdit;

/// Bullet marker inserted at the start of a line
pub const BULLET_MARKER: &str = "• ";

/// Glyph appended by the toolbar emoji button
pub const DEFAULT_EMOJI: &str = "😊";

/// Insert `"• "` at the start of the line containing `caret`
///
/// The returned caret is `caret + 2` rather than the insertion point plus
/// two. When the caret sat mid-line it stays on the same character it was
/// on before the insert.
pub fn insert_bullet_at_line_start(text: &str, caret: usize) -> Result<CaretEdit, EditError> {
    let insert_pos = line_start(text, caret)?;
    let text = insert_at(text, insert_pos, BULLET_MARKER)?;
    log::trace!("bullet inserted at {} (caret {})", insert_pos, caret);

    Ok(CaretEdit {
        text,
        caret: caret + utf16_len(BULLET_MARKER),
    })
}

/// Splice `insertion` in at `caret` and move the caret past it
pub fn insert_at_caret(text: &str, caret: usize, insertion: &str) -> Result<CaretEdit, EditError> {
    let text = insert_at(text, caret, insertion)?;

    Ok(CaretEdit {
        text,
        caret: caret + utf16_len(insertion),
    })
}

/// Append `" " + emoji` to the end of the buffer, ignoring the caret
pub fn append_emoji(text: &str, emoji: &str) -> String {
    format!("{} {}", text, emoji)
}
