//! Output character sets
//!
//! Formatters declare the charset their bytes are encoded in. Only the
//! charsets every JVM-era configuration file is likely to name are known.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Character set used to encode formatter output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Charset {
    /// UTF-8
    #[default]
    Utf8,
    /// UTF-16, big endian, no byte order mark
    Utf16,
    /// UTF-16 big endian
    Utf16Be,
    /// UTF-16 little endian
    Utf16Le,
    /// 7-bit ASCII
    UsAscii,
    /// Latin-1
    Iso8859_1,
}

impl Charset {
    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
            Self::Utf16Be => "UTF-16BE",
            Self::Utf16Le => "UTF-16LE",
            Self::UsAscii => "US-ASCII",
            Self::Iso8859_1 => "ISO-8859-1",
        }
    }

    /// Encode text, replacing unrepresentable characters with `?`
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16 | Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::UsAscii => single_byte(text, 0x7F),
            Self::Iso8859_1 => single_byte(text, 0xFF),
        }
    }
}

fn single_byte(text: &str, max: u32) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).ok().filter(|b| u32::from(*b) <= max).unwrap_or(b'?'))
        .collect()
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('_', "-").as_str() {
            "UTF-8" | "UTF8" => Ok(Self::Utf8),
            "UTF-16" | "UTF16" => Ok(Self::Utf16),
            "UTF-16BE" => Ok(Self::Utf16Be),
            "UTF-16LE" => Ok(Self::Utf16Le),
            "US-ASCII" | "ASCII" => Ok(Self::UsAscii),
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1" => Ok(Self::Iso8859_1),
            _ => Err(Error::configuration(format!("Unsupported charset: {s}"))),
        }
    }
}

impl TryFrom<String> for Charset {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Charset> for String {
    fn from(charset: Charset) -> Self {
        charset.name().to_string()
    }
}
