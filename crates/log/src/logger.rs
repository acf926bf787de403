//! The assembled logger

use std::fmt;
use std::io::Write;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::Level;
use crate::core::LogResult;
use crate::format::Pipeline;
use crate::record::{Arg, Record};

/// Leveled logger produced by [`LoggerBuilder`](crate::LoggerBuilder)
///
/// Each call builds a fresh [`Record`], runs it through the pipeline and
/// writes one line before returning. The logger holds no mutable state and
/// is shared freely across threads.
pub struct Logger {
    threshold: Level,
    silent: bool,
    pipeline: Pipeline,
    writer: BoxMakeWriter,
}

impl Logger {
    pub(crate) fn new(threshold: Level, silent: bool, pipeline: Pipeline, writer: BoxMakeWriter) -> Self {
        Self {
            threshold,
            silent,
            pipeline,
            writer,
        }
    }

    /// Minimum severity emitted
    pub fn level(&self) -> Level {
        self.threshold
    }

    /// Whether all output is suppressed
    pub fn is_silent(&self) -> bool {
        self.silent
    }

    /// Formatter chain and renderer
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Whether a record at `level` would be written
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        !self.silent && level.is_enabled_for(self.threshold)
    }

    /// `tracing` filter matching this logger's threshold
    pub fn level_filter(&self) -> LevelFilter {
        if self.silent {
            LevelFilter::OFF
        } else {
            self.threshold.as_level_filter()
        }
    }

    /// Log a message with extra arguments, surfacing writer failures
    ///
    /// Every object-valued argument is merged into the record as metadata,
    /// in order; a metadata `level` or `message` is dropped rather than
    /// appended to the message. Error arguments are handled by the error
    /// formatter.
    pub fn log(&self, level: Level, message: impl Into<String>, extras: &[Arg]) -> LogResult<()> {
        if !self.enabled(level) {
            return Ok(());
        }

        let mut record = Record::new(level, message);
        for metadata in extras.iter().filter_map(Arg::as_metadata) {
            record.merge_metadata(metadata);
        }

        let mut line = self.pipeline.render(record, extras)?;
        line.push('\n');
        self.writer.make_writer().write_all(line.as_bytes())?;
        Ok(())
    }

    /// Log at error level
    pub fn error(&self, message: impl Into<String>, extras: &[Arg]) {
        self.emit(Level::Error, message, extras);
    }

    /// Log at warn level
    pub fn warn(&self, message: impl Into<String>, extras: &[Arg]) {
        self.emit(Level::Warn, message, extras);
    }

    /// Log at info level
    pub fn info(&self, message: impl Into<String>, extras: &[Arg]) {
        self.emit(Level::Info, message, extras);
    }

    /// Log at http level
    pub fn http(&self, message: impl Into<String>, extras: &[Arg]) {
        self.emit(Level::Http, message, extras);
    }

    /// Log at verbose level
    pub fn verbose(&self, message: impl Into<String>, extras: &[Arg]) {
        self.emit(Level::Verbose, message, extras);
    }

    /// Log at debug level
    pub fn debug(&self, message: impl Into<String>, extras: &[Arg]) {
        self.emit(Level::Debug, message, extras);
    }

    /// Log at silly level
    pub fn silly(&self, message: impl Into<String>, extras: &[Arg]) {
        self.emit(Level::Silly, message, extras);
    }

    // Write failures are dropped here, as tracing-subscriber's fmt layer does.
    fn emit(&self, level: Level, message: impl Into<String>, extras: &[Arg]) {
        let _ = self.log(level, message, extras);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("threshold", &self.threshold)
            .field("silent", &self.silent)
            .field("pipeline", &self.pipeline)
            .finish_non_exhaustive()
    }
}
