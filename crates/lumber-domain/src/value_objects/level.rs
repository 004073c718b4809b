//! Logging levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Event severity, ordered from most to least specific
///
/// The numeric weight follows the conventional scale: a logger configured at
/// level `L` accepts an event at level `E` when `E.weight() <= L.weight()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Level {
    /// Nothing is logged
    Off,
    /// Unrecoverable failure
    Fatal,
    /// Operation failed
    Error,
    /// Unexpected but recoverable
    Warn,
    /// Normal operation
    Info,
    /// Diagnostic detail
    Debug,
    /// Finest detail
    Trace,
    /// Everything is logged
    All,
}

impl Level {
    /// Numeric weight of the level
    pub fn weight(self) -> u32 {
        match self {
            Self::Off => 0,
            Self::Fatal => 100,
            Self::Error => 200,
            Self::Warn => 300,
            Self::Info => 400,
            Self::Debug => 500,
            Self::Trace => 600,
            Self::All => u32::MAX,
        }
    }

    /// Whether an event at this level passes a threshold of `threshold`
    pub fn is_enabled_at(self, threshold: Level) -> bool {
        self != Self::Off && self.weight() <= threshold.weight()
    }

    /// Canonical upper-case name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
            Self::All => "ALL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "OFF" => Ok(Self::Off),
            "FATAL" => Ok(Self::Fatal),
            "ERROR" => Ok(Self::Error),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            "TRACE" => Ok(Self::Trace),
            "ALL" => Ok(Self::All),
            other => Err(Error::configuration(format!("Invalid level: {other}"))),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Error> {
        value.parse()
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}
