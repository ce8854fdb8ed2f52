//! Converts arbitrary `Serialize` values into message text.

use serde::Serialize;
use serde_json::Value;

/// Describes values as text for log fragments.
///
/// Strings come through untouched and scalars render as their literal. Anything
/// compound (structs, maps, sequences) renders as JSON, indented across lines
/// when `indent` is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stringify {
    indent: bool,
}

impl Default for Stringify {
    fn default() -> Self {
        Self::new()
    }
}

impl Stringify {
    /// Indentation starts enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { indent: true }
    }

    #[must_use]
    pub const fn indent(mut self, enabled: bool) -> Self {
        self.indent = enabled;
        self
    }

    pub const fn set_indent(&mut self, enabled: bool) {
        self.indent = enabled;
    }

    #[must_use]
    pub const fn is_indented(&self) -> bool {
        self.indent
    }

    /// Like [`Self::try_str`], but a value that can't be serialized becomes an empty string.
    #[must_use]
    pub fn str<T: Serialize>(&self, value: T) -> String {
        self.try_str(value).unwrap_or_default()
    }

    /// # Errors
    /// Returns [`crate::Error::Format`] when serialization fails, e.g. a map with non-string keys.
    pub fn try_str<T: Serialize>(&self, value: T) -> Result<String, crate::Error> {
        // Classify through `Value`, but render compound values from the original
        // so struct fields keep their declaration order.
        let text = match serde_json::to_value(&value)? {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) if self.indent => {
                serde_json::to_string_pretty(&value)?
            }
            Value::Array(_) | Value::Object(_) => serde_json::to_string(&value)?,
        };
        Ok(text)
    }
}
