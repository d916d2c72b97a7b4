//! Text encoding post-pass
//!
//! Applied to a finished payload string. None of these are real charset
//! conversions: `ANSI` drops non-ASCII code points and `Cyrillic` only tags
//! the value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseSelectorError;

/// Prefix written by the `Cyrillic` pass
pub const CYRILLIC_TAG: &str = "Cyrillic:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextEncoding {
    #[default]
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "ANSI")]
    Ansi,
    #[serde(rename = "Cyrillic")]
    Cyrillic,
}

impl TextEncoding {
    pub const ALL: [TextEncoding; 3] = [TextEncoding::Utf8, TextEncoding::Ansi, TextEncoding::Cyrillic];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Ansi => "ANSI",
            TextEncoding::Cyrillic => "Cyrillic",
        }
    }

    /// Run the pass over an already-built payload
    pub fn apply(&self, value: &str) -> String {
        match self {
            TextEncoding::Utf8 => value.to_string(),
            TextEncoding::Ansi => value.chars().filter(char::is_ascii).collect(),
            TextEncoding::Cyrillic => format!("{}{}", CYRILLIC_TAG, value),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextEncoding {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextEncoding::ALL
            .iter()
            .copied()
            .find(|enc| enc.as_str() == s)
            .ok_or_else(|| ParseSelectorError::unknown("text encoding", s))
    }
}
