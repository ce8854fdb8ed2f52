//! Unified error type for ezlog operations.

/// Error type for ezlog operations.
///
/// Logging calls themselves never fail. These errors come from sinks that
/// touch I/O and from reading configuration values.
#[derive(Debug)]
pub enum Error {
    /// I/O error from a writing sink.
    Io(std::io::Error),
    /// Level text that names no known severity.
    InvalidLevel(String),
    /// Boolean setting with unrecognised text.
    InvalidFlag {
        /// Setting name, e.g. `EZLOG_INDENT`.
        key: String,
        /// Offending value.
        value: String,
    },
    /// A value could not be converted to text.
    Format(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidLevel(level) => write!(f, "invalid log level: {level}"),
            Self::InvalidFlag { key, value } => write!(f, "invalid value for {key}: {value}"),
            Self::Format(s) => write!(f, "format error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Format(e.to_string())
    }
}

impl From<crate::level::ParseLevelError> for Error {
    fn from(e: crate::level::ParseLevelError) -> Self {
        Self::InvalidLevel(e.input().to_string())
    }
}
