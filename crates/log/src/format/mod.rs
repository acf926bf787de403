//! Record formatting
//!
//! A log call produces a [`Record`] that runs through an ordered chain of
//! [`Formatter`]s before a [`Format`] renders it into a line:
//!
//! ```text
//! record + extras
//!     → errors     (error arguments become error* fields)
//!     → colorize   (optional, paints the level)
//!     → timestamp
//!     → render     (json | simple)
//! ```
//!
//! The extra arguments travel next to the record as an explicit slice; each
//! formatter may read them but never owns them.

mod errors;
mod keys;
mod render;
mod timestamp;

#[cfg(feature = "ansi")]
mod colorize;

use std::fmt;

pub use errors::{ErrorFormatter, collapse_newlines};
pub use keys::free_key;
pub use timestamp::{TIMESTAMP_KEY, Timestamp, format_timestamp};

#[cfg(feature = "ansi")]
pub use colorize::Colorize;

use crate::config::Format;
use crate::core::LogResult;
use crate::record::{Arg, Record};

/// One transformation step applied to every record
pub trait Formatter: fmt::Debug + Send + Sync {
    /// Short name used when describing a pipeline
    fn name(&self) -> &'static str;

    /// Transform a record; `extras` are the arguments passed with the call
    fn transform(&self, record: Record, extras: &[Arg]) -> Record;
}

/// Ordered formatter chain followed by a body renderer
#[derive(Debug)]
pub struct Pipeline {
    formatters: Vec<Box<dyn Formatter>>,
    renderer: Format,
}

impl Pipeline {
    /// Create an empty chain that renders with `renderer`
    pub fn new(renderer: Format) -> Self {
        Self {
            formatters: Vec::new(),
            renderer,
        }
    }

    /// Append a formatter
    #[must_use]
    pub fn with(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatters.push(Box::new(formatter));
        self
    }

    /// Names of the formatters, in application order
    pub fn formatter_names(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.name()).collect()
    }

    /// Body renderer
    pub fn renderer(&self) -> Format {
        self.renderer
    }

    /// Run the formatter chain
    pub fn apply(&self, record: Record, extras: &[Arg]) -> Record {
        self.formatters
            .iter()
            .fold(record, |record, formatter| formatter.transform(record, extras))
    }

    /// Run the chain and render the result
    pub fn render(&self, record: Record, extras: &[Arg]) -> LogResult<String> {
        let record = self.apply(record, extras);
        self.renderer.render(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Level;
    use serde_json::json;
    use time::macros::datetime;

    #[derive(Debug)]
    struct Tag(&'static str);

    impl Formatter for Tag {
        fn name(&self) -> &'static str {
            self.0
        }

        fn transform(&self, mut record: Record, _extras: &[Arg]) -> Record {
            let key = free_key(&record, "tag");
            record.insert(key, json!(self.0));
            record
        }
    }

    #[test]
    fn test_formatters_run_in_order() {
        let pipeline = Pipeline::new(Format::Json).with(Tag("first")).with(Tag("second"));
        let record = pipeline.apply(Record::new(Level::Info, "x"), &[]);

        assert_eq!(pipeline.formatter_names(), vec!["first", "second"]);
        assert_eq!(record.get("tag"), Some(&json!("first")));
        assert_eq!(record.get("tag0"), Some(&json!("second")));
    }

    #[test]
    fn test_render_applies_chain() {
        let pipeline = Pipeline::new(Format::Simple)
            .with(ErrorFormatter::new().pipe_newline(true))
            .with(Timestamp::fixed(datetime!(2024-01-01 00:00:00 UTC)));
        let extras = [Arg::error(std::io::Error::other("boom"))];
        let line = pipeline
            .render(Record::new(Level::Error, "failed"), &extras)
            .unwrap();

        assert_eq!(
            line,
            r#"error: failed {"error":"boom","timestamp":"2024-01-01T00:00:00.000Z"}"#
        );
    }
}
