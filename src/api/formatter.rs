//! Post formatter operations
//!
//! Toolbar actions for the social post textarea. Offsets are the
//! textarea's `selectionStart` / `selectionEnd` (UTF-16 units); results come
//! back as `{ text, selection: { start, end } }` or `{ text, caret }` so the
//! caller can restore focus and selection after updating its state.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{js_error, parse_selector, serialize};
use crate::styler::{self, CaseMode, StyleKind, DEFAULT_EMOJI};
use crate::text::SelectionSpan;
use crate::{wasm_info, wasm_log};

/// Apply bold / italic / strikethrough / monospace to the selection
#[wasm_bindgen(js_name = applyUnicodeStyle)]
pub fn apply_unicode_style(text: &str, start: usize, end: usize, style: &str) -> Result<JsValue, JsValue> {
    let style: StyleKind = parse_selector(style, "Invalid style")?;
    wasm_info!("applyUnicodeStyle called: style={}, start={}, end={}", style, start, end);

    let result = styler::apply_style(text, SelectionSpan::new(start, end), style)
        .map_err(|e| js_error("applyUnicodeStyle failed", e))?;

    serialize(&result, "Serialization error")
}

/// Apply uppercase / lowercase / titlecase to the selection
#[wasm_bindgen(js_name = applyCaseTransform)]
pub fn apply_case_transform(text: &str, start: usize, end: usize, mode: &str) -> Result<JsValue, JsValue> {
    let mode: CaseMode = parse_selector(mode, "Invalid case mode")?;
    wasm_info!("applyCaseTransform called: mode={}, start={}, end={}", mode.as_str(), start, end);

    let result = styler::apply_case_transform(text, SelectionSpan::new(start, end), mode)
        .map_err(|e| js_error("applyCaseTransform failed", e))?;

    serialize(&result, "Serialization error")
}

/// Insert a bullet marker at the start of the caret's line
#[wasm_bindgen(js_name = insertBullet)]
pub fn insert_bullet(text: &str, caret: usize) -> Result<JsValue, JsValue> {
    wasm_log!("insertBullet called: caret={}", caret);

    let result = styler::insert_bullet_at_line_start(text, caret)
        .map_err(|e| js_error("insertBullet failed", e))?;

    serialize(&result, "Serialization error")
}

/// Insert a glyph (emoji, special character) at the caret
#[wasm_bindgen(js_name = insertAtCaret)]
pub fn insert_at_caret(text: &str, caret: usize, insertion: &str) -> Result<JsValue, JsValue> {
    wasm_log!("insertAtCaret called: caret={}, insertion='{}'", caret, insertion);

    let result = styler::insert_at_caret(text, caret, insertion)
        .map_err(|e| js_error("insertAtCaret failed", e))?;

    serialize(&result, "Serialization error")
}

/// Append an emoji to the end of the post (defaults to 😊)
#[wasm_bindgen(js_name = appendEmoji)]
pub fn append_emoji(text: &str, emoji: Option<String>) -> String {
    let emoji = emoji.as_deref().unwrap_or(DEFAULT_EMOJI);
    styler::append_emoji(text, emoji)
}

/// Plain preview: strip markdown-style delimiters
#[wasm_bindgen(js_name = formatPreview)]
pub fn format_preview(text: &str) -> String {
    styler::strip_markdown_markers(text)
}
