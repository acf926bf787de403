//! Writer implementations

// Standard library
use std::io;

// External dependencies
use tracing_subscriber::fmt::writer::BoxMakeWriter;

// Internal crates
use crate::config::WriterConfig;

/// Create a writer from configuration
pub fn make_writer(config: &WriterConfig) -> BoxMakeWriter {
    match config {
        WriterConfig::Stdout => BoxMakeWriter::new(io::stdout),
        WriterConfig::Stderr => BoxMakeWriter::new(io::stderr),
    }
}
