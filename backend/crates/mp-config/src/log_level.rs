use crate::DEFAULT_LOG_LEVEL;

use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Log verbosity read from `config.toml` or `MP_LOG_LEVEL`.
///
/// Accepts level names (case-insensitive, with `warning` for `warn`) or a
/// numeric verbosity from 0 (`off`) to 5 (`trace`). Anything else falls back
/// to `info` so a typo never stops the server from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl LogLevel {
    /// Level for a numeric verbosity; values above 5 saturate at `trace`
    pub fn from_verbosity(verbosity: u64) -> Self {
        let level = match verbosity {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        LogLevel(level)
    }

    fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if let Ok(verbosity) = trimmed.parse::<u64>() {
            return Some(Self::from_verbosity(verbosity));
        }
        let level = match trimmed.to_ascii_lowercase().as_str() {
            "off" | "none" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" | "warning" => LevelFilter::Warn,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => return None,
        };
        Some(LogLevel(level))
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel(DEFAULT_LOG_LEVEL)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.as_str().to_ascii_lowercase())
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        log_level.0
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s).unwrap_or_default())
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct LogLevelVisitor;

impl Visitor<'_> for LogLevelVisitor {
    type Value = LogLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a log level name or a verbosity from 0 to 5")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<LogLevel, E> {
        Ok(LogLevel::from_name(value).unwrap_or_default())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<LogLevel, E> {
        Ok(LogLevel::from_verbosity(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<LogLevel, E> {
        Ok(u64::try_from(value).map_or(LogLevel(LevelFilter::Off), LogLevel::from_verbosity))
    }

    fn visit_bool<E: de::Error>(self, enabled: bool) -> Result<LogLevel, E> {
        Ok(if enabled { LogLevel::default() } else { LogLevel(LevelFilter::Off) })
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LogLevelVisitor)
    }
}
