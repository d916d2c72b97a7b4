//! Case transforms
//!
//! Upper/lower use the standard Unicode mappings, so a transform may change
//! the length of the text (`ß` uppercases to `SS`).

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ParseSelectorError;

lazy_static! {
    /// Maximal run of letters, combining marks, digits and underscore
    static ref WORD: Regex = Regex::new(r"[\p{L}\p{M}\p{N}_]+").expect("word pattern is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    Uppercase,
    Lowercase,
    Titlecase,
}

impl CaseMode {
    pub const ALL: [CaseMode; 3] = [CaseMode::Uppercase, CaseMode::Lowercase, CaseMode::Titlecase];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseMode::Uppercase => "uppercase",
            CaseMode::Lowercase => "lowercase",
            CaseMode::Titlecase => "titlecase",
        }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseMode::Uppercase => text.to_uppercase(),
            CaseMode::Lowercase => text.to_lowercase(),
            CaseMode::Titlecase => title_case(text),
        }
    }
}

impl FromStr for CaseMode {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseSelectorError::unknown("case mode", s))
    }
}

/// Uppercase the first character of every word and lowercase the rest
///
/// A word is a run of letters, combining marks, numbers and `_`. Marks
/// stay inside the word so struck-through text keeps its shape. Any
/// other character, including connector punctuation like `‿`, splits
/// words and is left alone.
fn title_case(text: &str) -> String {
    WORD.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        let mut chars = word.chars();
        let mut out = String::with_capacity(word.len());
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
        out
    })
    .into_owned()
}
