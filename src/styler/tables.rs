//! Styled alphabet lookup tables
//!
//! Format: (style, Latin letter) → Mathematical Alphanumeric glyph
//!
//! Example:
//!   (Bold, 'a')      → '𝗮'  (U+1D5EE)
//!   (Italic, 'A')    → '𝘈'  (U+1D608)
//!   (Monospace, 'z') → '𝚣'  (U+1D6A3)
//!
//! Strikethrough has no table: every character gets U+0336 appended.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSelectorError;

/// Combining long stroke overlay
pub const STRIKE_MARK: char = '\u{0336}';

/// Unicode "fake rich text" style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Bold,
    Italic,
    Strikethrough,
    Monospace,
}

impl StyleKind {
    pub const ALL: [StyleKind; 4] = [
        StyleKind::Bold,
        StyleKind::Italic,
        StyleKind::Strikethrough,
        StyleKind::Monospace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKind::Bold => "bold",
            StyleKind::Italic => "italic",
            StyleKind::Strikethrough => "strikethrough",
            StyleKind::Monospace => "monospace",
        }
    }

    /// Substitution table for this style (None for strikethrough)
    pub fn table(&self) -> Option<&'static HashMap<char, char>> {
        match self {
            StyleKind::Bold => Some(&*BOLD),
            StyleKind::Italic => Some(&*ITALIC),
            StyleKind::Monospace => Some(&*MONOSPACE),
            StyleKind::Strikethrough => None,
        }
    }

    /// Transform a whole string
    ///
    /// Characters missing from the table (digits, punctuation, whitespace,
    /// glyphs that are already styled) pass through unchanged.
    pub fn apply(&self, text: &str) -> String {
        match self.table() {
            Some(table) => text
                .chars()
                .map(|ch| table.get(&ch).copied().unwrap_or(ch))
                .collect(),
            None => {
                let mut out = String::with_capacity(text.len() * 3);
                for ch in text.chars() {
                    out.push(ch);
                    out.push(STRIKE_MARK);
                }
                out
            }
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKind {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKind::ALL
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ParseSelectorError::unknown("style", s))
    }
}

lazy_static! {
    /// Mathematical Sans-Serif Bold
    static ref BOLD: HashMap<char, char> = build_alphabet(0x1D5D4, 0x1D5EE);

    /// Mathematical Sans-Serif Italic
    static ref ITALIC: HashMap<char, char> = build_alphabet(0x1D608, 0x1D622);

    /// Mathematical Monospace
    static ref MONOSPACE: HashMap<char, char> = build_alphabet(0x1D670, 0x1D68A);
}

/// Build a 52-letter table from the code points of styled 'A' and 'a'
///
/// These three alphabets have no reserved holes, so both cases are
/// contiguous runs of 26.
fn build_alphabet(upper_base: u32, lower_base: u32) -> HashMap<char, char> {
    let mut table = HashMap::with_capacity(52);
    add_run(&mut table, 'A', upper_base);
    add_run(&mut table, 'a', lower_base);
    table
}

fn add_run(table: &mut HashMap<char, char>, first: char, base: u32) {
    for i in 0..26u32 {
        let plain = char::from_u32(first as u32 + i);
        let styled = char::from_u32(base + i);
        if let (Some(plain), Some(styled)) = (plain, styled) {
            table.insert(plain, styled);
        }
    }
}
