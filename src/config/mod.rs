//! Settings a caller can embed in its own configuration.
//!
//! ezlog never reads files itself. `Config` derives `Deserialize` so it can sit
//! under a key in whatever document the application already loads, and
//! [`Config::from_env`] covers the zero-config case.

use crate::level::Level;
use serde::{Deserialize, Serialize};

/// Every field has a default, so an empty section still yields a working config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Threshold applied to gated messages.
    pub level: Level,
    /// Render compound fragment values as indented JSON.
    pub indent: bool,
    /// End each delivered message with a newline on stdout.
    pub newline: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Level::Disabled,
            indent: true,
            newline: true,
        }
    }
}

pub const ENV_LEVEL: &str = "EZLOG_LEVEL";
pub const ENV_INDENT: &str = "EZLOG_INDENT";
pub const ENV_NEWLINE: &str = "EZLOG_NEWLINE";

impl Config {
    /// Reads `EZLOG_LEVEL`, `EZLOG_INDENT` and `EZLOG_NEWLINE` over the defaults.
    ///
    /// Thin wrapper over [`Self::from_lookup`] with `std::env::var` as the source.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] or [`crate::Error::InvalidFlag`] when a set variable can't be parsed.
    pub fn from_env() -> Result<Self, crate::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with a custom variable source. Unset keys keep their default.
    ///
    /// # Errors
    /// [`crate::Error::InvalidLevel`] or [`crate::Error::InvalidFlag`] when a value can't be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, crate::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(level) = lookup(ENV_LEVEL) {
            config.level = level.parse()?;
        }
        if let Some(value) = lookup(ENV_INDENT) {
            config.indent = parse_flag(ENV_INDENT, &value)?;
        }
        if let Some(value) = lookup(ENV_NEWLINE) {
            config.newline = parse_flag(ENV_NEWLINE, &value)?;
        }
        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, crate::Error> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(crate::Error::InvalidFlag {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
