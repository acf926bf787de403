//! Configuration presets for common scenarios

use super::env::{is_truthy, non_empty};
use super::{Config, Format, WriterConfig};

/// Minimum severity emitted
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Body renderer name
pub const LOG_FORMAT: &str = "LOG_FORMAT";
/// Truthy value suppresses all output
pub const LOG_SILENT: &str = "LOG_SILENT";
/// Truthy value enables ANSI colors
pub const LOG_COLORS: &str = "LOG_COLORS";

impl Config {
    /// Create configuration from environment variables
    ///
    /// Reads `LOG_LEVEL`, `LOG_FORMAT`, `LOG_SILENT` and `LOG_COLORS`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let level = non_empty(lookup(LOG_LEVEL)).unwrap_or(defaults.level);
        let format = non_empty(lookup(LOG_FORMAT))
            .map(|name| Format::from_name(&name))
            .unwrap_or(defaults.format);

        Self {
            level,
            silent: is_truthy(lookup(LOG_SILENT).as_deref()),
            format,
            colors: is_truthy(lookup(LOG_COLORS).as_deref()),
            writer: WriterConfig::Stdout,
        }
    }

    /// Development configuration (simple lines, colors, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Simple,
            colors: true,
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            colors: false,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_lookup_all_set() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_LEVEL, "debug"),
            (LOG_FORMAT, "simple"),
            (LOG_SILENT, "yes"),
            (LOG_COLORS, " ON "),
        ]));
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Simple);
        assert!(config.silent);
        assert!(config.colors);
    }

    #[test]
    fn test_from_lookup_empty_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[(LOG_LEVEL, ""), (LOG_FORMAT, "")]));
        assert_eq!(config.level, "info");
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_from_lookup_unknown_format() {
        let config = Config::from_lookup(lookup_from(&[(LOG_FORMAT, "logfmt")]));
        assert_eq!(config.format, Format::Json);
    }

    #[test]
    fn test_presets() {
        let dev = Config::development();
        assert_eq!(dev.format, Format::Simple);
        assert!(dev.colors);

        let prod = Config::production();
        assert_eq!(prod.level, "info");
        assert_eq!(prod.format, Format::Json);
        assert!(!prod.colors);
    }
}
