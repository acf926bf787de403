//! ANSI colors for the rendered level

use colored::{Color, Colorize as _};
use serde_json::Value;

use super::Formatter;
use crate::config::Level;
use crate::record::{Arg, LEVEL_KEY, Record};

/// Formatter that paints the `level` field
#[derive(Debug, Clone, Copy, Default)]
pub struct Colorize;

impl Colorize {
    /// Create the formatter and force ANSI output on, even when stdout
    /// is not a terminal.
    pub fn new() -> Self {
        colored::control::set_override(true);
        Self
    }

    /// Color used for a level
    pub fn color_for(level: Level) -> Color {
        match level {
            Level::Error => Color::Red,
            Level::Warn => Color::Yellow,
            Level::Info | Level::Http => Color::Green,
            Level::Verbose => Color::Cyan,
            Level::Debug => Color::Blue,
            Level::Silly => Color::Magenta,
        }
    }
}

impl Formatter for Colorize {
    fn name(&self) -> &'static str {
        "colorize"
    }

    fn transform(&self, mut record: Record, _extras: &[Arg]) -> Record {
        let level = record.level();
        let painted = level.as_str().color(Self::color_for(level)).to_string();
        record.insert(LEVEL_KEY, Value::String(painted));
        record
    }
}
