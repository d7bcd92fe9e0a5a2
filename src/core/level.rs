//! Log level definitions

use super::config;
use super::error::ElogError;
use std::fmt;
use std::str::FromStr;

/// Severity of a message, or a threshold.
///
/// Levels are ordered from least to most verbose. A message at level `L` is
/// admitted by a threshold `t` when `L <= t`; [`Level::Off`] is only meaningful
/// as a threshold and admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[repr(u8)]
pub enum Level {
    Off = 0,
    Critical = 1,
    Error = 2,
    Warn = 3,
    #[default]
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl Level {
    /// Every level, `Off` first.
    pub const ALL: [Level; 7] = [
        Level::Off,
        Level::Critical,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// The six levels a message can carry.
    pub const SEVERITIES: [Level; 6] = [
        Level::Critical,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Critical => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    /// Returns `true` if a message at `message` passes this threshold.
    #[inline]
    pub const fn admits(self, message: Level) -> bool {
        !matches!(message, Level::Off) && (message as u8) <= (self as u8)
    }

    /// Converts a raw byte, if it names a level.
    pub const fn from_u8(value: u8) -> Option<Level> {
        match value {
            0 => Some(Level::Off),
            1 => Some(Level::Critical),
            2 => Some(Level::Error),
            3 => Some(Level::Warn),
            4 => Some(Level::Info),
            5 => Some(Level::Debug),
            6 => Some(Level::Trace),
            _ => None,
        }
    }

    /// The configured label, e.g. `[INFO]`. Empty for `Off`.
    pub const fn label(&self) -> &'static str {
        match self {
            Level::Off => "",
            Level::Critical => config::LABEL_CRITICAL,
            Level::Error => config::LABEL_ERROR,
            Level::Warn => config::LABEL_WARN,
            Level::Info => config::LABEL_INFO,
            Level::Debug => config::LABEL_DEBUG,
            Level::Trace => config::LABEL_TRACE,
        }
    }

    /// The configured color escape. Empty for `Off`.
    pub const fn color(&self) -> &'static str {
        match self {
            Level::Off => "",
            Level::Critical => config::COLOR_CRITICAL,
            Level::Error => config::COLOR_ERROR,
            Level::Warn => config::COLOR_WARN,
            Level::Info => config::COLOR_INFO,
            Level::Debug => config::COLOR_DEBUG,
            Level::Trace => config::COLOR_TRACE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ElogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<u8>() {
            return Level::from_u8(value).ok_or_else(|| ElogError::parse_level(s));
        }
        match trimmed.to_uppercase().as_str() {
            "OFF" => Ok(Level::Off),
            "CRITICAL" | "FATAL" => Ok(Level::Critical),
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            _ => Err(ElogError::parse_level(s)),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ElogError;

    fn try_from(value: u8) -> Result<Self, ElogError> {
        Level::from_u8(value).ok_or(ElogError::InvalidLevelValue(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}
