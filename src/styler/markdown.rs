//! Markdown marker stripping for the plain preview
//!
//! Removes the literal delimiter pairs a user typed and keeps what they
//! enclose. It does not apply any Unicode styling.
//!
//! Passes run in a fixed order: `**…**`, then `*…*`, then `~~…~~`, then
//! `` `…` ``. Each is a shortest match that stops at any line terminator
//! (`\n`, `\r`, U+2028, U+2029), so a pair never spans two lines.
//! Changing the order changes results on overlapping input such as
//! `*a**b*c**`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STRIP_PASSES: [Regex; 4] = [
        Regex::new(r"\*\*([^\n\r\x{2028}\x{2029}]*?)\*\*").expect("bold marker pattern is valid"),
        Regex::new(r"\*([^\n\r\x{2028}\x{2029}]*?)\*").expect("italic marker pattern is valid"),
        Regex::new(r"~~([^\n\r\x{2028}\x{2029}]*?)~~").expect("strike marker pattern is valid"),
        Regex::new(r"`([^\n\r\x{2028}\x{2029}]*?)`").expect("code marker pattern is valid"),
    ];
}

/// Strip `**`, `*`, `~~` and backtick delimiter pairs from `text`
pub fn strip_markdown_markers(text: &str) -> String {
    let mut out = text.to_string();
    for pass in STRIP_PASSES.iter() {
        out = pass.replace_all(&out, "${1}").into_owned();
    }
    out
}
