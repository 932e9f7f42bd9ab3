use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::error::PagerError;

/// The set of field separators the pager understands.
///
/// Parsing always goes through the csv reader, so any of these
/// characters may appear inside a quoted field without splitting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Comma,
    Tab,
    Semicolon,
    Pipe,
    Space,
}

impl Delimiter {
    /// All supported delimiters, in the order they are offered to users
    pub const ALL: [Delimiter; 5] = [
        Delimiter::Comma,
        Delimiter::Tab,
        Delimiter::Semicolon,
        Delimiter::Pipe,
        Delimiter::Space,
    ];

    /// The raw byte handed to the csv reader
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
            Delimiter::Semicolon => b';',
            Delimiter::Pipe => b'|',
            Delimiter::Space => b' ',
        }
    }

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }

    /// Human-readable label for menus and help text
    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Comma => "Comma (,)",
            Delimiter::Tab => "Tab (\\t)",
            Delimiter::Semicolon => "Semicolon (;)",
            Delimiter::Pipe => "Pipe (|)",
            Delimiter::Space => "Space ( )",
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Tab
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Delimiter {
    type Err = PagerError;

    /// Accepts the literal character as well as its name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "," => return Ok(Delimiter::Comma),
            "\t" | "\\t" => return Ok(Delimiter::Tab),
            ";" => return Ok(Delimiter::Semicolon),
            "|" => return Ok(Delimiter::Pipe),
            " " => return Ok(Delimiter::Space),
            _ => {}
        }

        match s.to_ascii_lowercase().as_str() {
            "comma" => Ok(Delimiter::Comma),
            "tab" => Ok(Delimiter::Tab),
            "semicolon" => Ok(Delimiter::Semicolon),
            "pipe" => Ok(Delimiter::Pipe),
            "space" => Ok(Delimiter::Space),
            _ => Err(PagerError::UnknownDelimiter(s.to_string())),
        }
    }
}
