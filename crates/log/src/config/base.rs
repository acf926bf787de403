//! Core configuration types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;

use super::WriterConfig;
use crate::core::LogError;

/// Logging configuration
///
/// Read once when the logger is built and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum severity emitted (e.g. "info", "debug")
    pub level: String,

    /// Suppress all output
    pub silent: bool,

    /// Body renderer
    pub format: Format,

    /// Colorize the rendered level
    pub colors: bool,

    /// Output writer configuration
    pub writer: WriterConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            silent: false,
            format: Format::Json,
            colors: false,
            writer: WriterConfig::Stdout,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Single-line JSON object
    #[default]
    #[serde(alias = "default")]
    Json,
    /// `level: message {rest}` plain line
    Simple,
}

impl Format {
    /// Resolve a format name through the lookup table.
    ///
    /// `"json"` and `"default"` select JSON, `"simple"` selects the plain
    /// renderer, and any other name falls back to the default.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "simple" => Self::Simple,
            "json" | "default" => Self::Json,
            _ => Self::default(),
        }
    }

    /// Canonical name of the format
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Simple => "simple",
        }
    }
}

/// Log level, ordered from most to least severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Error level
    Error,
    /// Warn level
    Warn,
    /// Info level
    Info,
    /// HTTP traffic level
    Http,
    /// Verbose level
    Verbose,
    /// Debug level
    Debug,
    /// Silly level
    Silly,
}

impl Level {
    /// All levels, most severe first
    pub const ALL: [Self; 7] = [
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Http,
        Self::Verbose,
        Self::Debug,
        Self::Silly,
    ];

    /// Lowercase name used in rendered records
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Http => "http",
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Silly => "silly",
        }
    }

    /// Whether a record at `self` passes a `threshold`
    #[inline]
    pub fn is_enabled_for(self, threshold: Self) -> bool {
        self <= threshold
    }

    /// Map a `tracing` level onto this scale
    pub fn from_tracing(level: &tracing::Level) -> Self {
        match *level {
            tracing::Level::ERROR => Self::Error,
            tracing::Level::WARN => Self::Warn,
            tracing::Level::INFO => Self::Info,
            tracing::Level::DEBUG => Self::Debug,
            tracing::Level::TRACE => Self::Silly,
        }
    }

    /// Coarsest `tracing` filter that still lets every enabled record through
    pub fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info | Self::Http => LevelFilter::INFO,
            Self::Verbose | Self::Debug => LevelFilter::DEBUG,
            Self::Silly => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| LogError::Level(s.to_string()))
    }
}
