use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity level of a passive check result.
///
/// This is a closed enum: only the four defined variants are representable.
/// Collectors conventionally render these in uppercase, so `Display` and the
/// serialized form both use the uppercase name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Ok,
    Warning,
    Critical,
    #[default]
    Unknown,
}

impl Level {
    /// Parses a level from text, ignoring case.
    ///
    /// Recognizes "ok", "warning", "critical" and "unknown". Anything else
    /// resolves to `Level::Unknown` rather than failing; lenient parsing is
    /// part of the payload's behavioral contract.
    pub fn parse(text: &str) -> Self {
        match text.to_lowercase().as_str() {
            "ok" => Level::Ok,
            "warning" => Level::Warning,
            "critical" => Level::Critical,
            _ => Level::Unknown,
        }
    }

    /// The uppercase name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Ok => "OK",
            Level::Warning => "WARNING",
            Level::Critical => "CRITICAL",
            Level::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
