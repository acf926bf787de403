//! Configuration types and builders
//!
//! This module provides configuration types for the logging system, organized into:
//! - `base`: Core configuration structs (Config, Format, Level)
//! - `env`: Environment value parsing
//! - `writer`: Output destination
//! - `presets`: Environment loading and pre-configured setups

mod base;
pub(crate) mod env;
mod presets;
mod writer;

pub use base::{Config, Format, Level};
pub use env::is_truthy;
pub use presets::{LOG_COLORS, LOG_FORMAT, LOG_LEVEL, LOG_SILENT};
pub use writer::WriterConfig;
