//! Logger builder implementation

// Standard library
use std::sync::Arc;

// External dependencies
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

// Internal crates
use crate::config::{Config, Level};
use crate::core::LogResult;
use crate::format::{ErrorFormatter, Pipeline, Timestamp};
use crate::logger::Logger;
use crate::writer;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
    writer: Option<BoxMakeWriter>,
    timestamp: Timestamp,
}

/// Guard returned by [`init`](crate::init) that keeps the installed logger reachable
#[derive(Debug, Clone)]
pub struct LoggerGuard {
    logger: Arc<Logger>,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            writer: None,
            timestamp: Timestamp::new(),
        }
    }

    /// Send output to `writer` instead of the configured target
    #[must_use]
    pub fn with_writer<W>(mut self, writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.writer = Some(BoxMakeWriter::new(writer));
        self
    }

    /// Replace the timestamp stage, e.g. with [`Timestamp::fixed`]
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Assemble the logger
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Level`](crate::LogError::Level) if the configured
    /// level is not one of the known severities.
    pub fn build(self) -> LogResult<Logger> {
        let threshold: Level = self.config.level.parse()?;
        let pipeline = assemble_pipeline(&self.config, self.timestamp);
        let writer = self
            .writer
            .unwrap_or_else(|| writer::make_writer(&self.config.writer));

        tracing::debug!(
            level = %threshold,
            format = self.config.format.as_str(),
            formatters = ?pipeline.formatter_names(),
            silent = self.config.silent,
            "logger assembled"
        );

        Ok(Logger::new(threshold, self.config.silent, pipeline, writer))
    }
}

// errors -> [colorize] -> timestamp -> renderer
fn assemble_pipeline(config: &Config, timestamp: Timestamp) -> Pipeline {
    let mut pipeline = Pipeline::new(config.format).with(ErrorFormatter::new().pipe_newline(true));
    if config.colors {
        pipeline = with_colors(pipeline);
    }
    pipeline.with(timestamp)
}

#[cfg(feature = "ansi")]
fn with_colors(pipeline: Pipeline) -> Pipeline {
    pipeline.with(crate::format::Colorize::new())
}

#[cfg(not(feature = "ansi"))]
fn with_colors(pipeline: Pipeline) -> Pipeline {
    tracing::warn!("colors requested but the `ansi` feature is disabled");
    pipeline
}

impl LoggerGuard {
    pub(crate) fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// The installed logger
    pub fn logger(&self) -> &Logger {
        &self.logger
    }
}
