//! Severity levels and the threshold predicate that gates delivery.
//!
//! Ordinals follow syslog: lower means more urgent. A threshold names the
//! most verbose severity still delivered, so a message passes when its
//! ordinal is at or below the threshold's.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One type serves as both message severity and threshold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(i8)]
pub enum Level {
    /// Sentinel for messages that bypass filtering. Lower than every threshold.
    Log = -2,
    /// Threshold that rejects every real severity.
    #[default]
    Disabled = -1,
    /// System is unusable.
    Emerg = 0,
    /// Action must be taken immediately.
    Alert = 1,
    /// Critical conditions.
    Crit = 2,
    /// Error conditions.
    Err = 3,
    /// Warning conditions.
    Warning = 4,
    /// Normal but significant condition.
    Notice = 5,
    /// Informational messages.
    Info = 6,
    /// Debug-level messages.
    Debug = 7,
    /// Finer than debug.
    Trace = 8,
}

impl Level {
    /// Lowercase, matching what config values and env vars use.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Disabled => "disabled",
            Self::Emerg => "emerg",
            Self::Alert => "alert",
            Self::Crit => "crit",
            Self::Err => "err",
            Self::Warning => "warning",
            Self::Notice => "notice",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    #[must_use]
    pub const fn ordinal(self) -> i8 {
        self as i8
    }

    /// Never fails: values below `Log` clamp to `Log`, values above `Trace` clamp to `Trace`.
    #[must_use]
    pub const fn from_ordinal(n: i8) -> Self {
        match n {
            i8::MIN..=-2 => Self::Log,
            -1 => Self::Disabled,
            0 => Self::Emerg,
            1 => Self::Alert,
            2 => Self::Crit,
            3 => Self::Err,
            4 => Self::Warning,
            5 => Self::Notice,
            6 => Self::Info,
            7 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// The nine real severities, most urgent first.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Emerg,
            Self::Alert,
            Self::Crit,
            Self::Err,
            Self::Warning,
            Self::Notice,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    /// Reads as "this severity passes at `threshold`": same check as [`passes`].
    #[must_use]
    pub const fn passes_at(self, threshold: Self) -> bool {
        passes(threshold, self)
    }
}

/// True when a message at `severity` should be delivered under `threshold`.
///
/// `Log` has the lowest ordinal and passes every threshold. `Disabled` as a
/// threshold sits below every real severity and rejects them all.
#[must_use]
pub const fn passes(threshold: Level, severity: Level) -> bool {
    severity.ordinal() <= threshold.ordinal()
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for &'static str {
    fn from(level: Level) -> Self {
        level.as_str()
    }
}

/// Returned by `FromStr` so callers can tell an unknown level apart from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, ParseLevelError> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(Self::Log),
            "disabled" | "off" | "none" => Ok(Self::Disabled),
            "emerg" | "emergency" => Ok(Self::Emerg),
            "alert" => Ok(Self::Alert),
            "crit" | "critical" => Ok(Self::Crit),
            "err" | "error" => Ok(Self::Err),
            "warning" | "warn" => Ok(Self::Warning),
            "notice" => Ok(Self::Notice),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Level {
    type Error = ParseLevelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
