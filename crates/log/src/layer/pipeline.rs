//! Layer that routes `tracing` events through a [`Logger`]

// Standard library
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

// External dependencies
use serde_json::{Map, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

// Internal crates
use crate::config::Level;
use crate::diagnostic::{CapturedError, HttpError};
use crate::logger::Logger;
use crate::record::{Arg, MESSAGE_KEY};

/// Layer that turns each `tracing` event into one logger call
///
/// The `message` field becomes the record message, fields recorded as
/// errors become error arguments and everything else is merged as
/// metadata. Span data is not inspected.
#[derive(Debug, Clone)]
pub struct PipelineLayer {
    logger: Arc<Logger>,
}

impl PipelineLayer {
    /// Create a layer writing through `logger`
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// The logger events are written to
    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl<S> Layer<S> for PipelineLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Level::from_tracing(event.metadata().level());
        if !self.logger.enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let (message, extras) = visitor.finish();
        let _ = self.logger.log(level, message, &extras);
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    fields: Map<String, Value>,
    errors: Vec<Arg>,
}

impl EventVisitor {
    fn finish(self) -> (String, Vec<Arg>) {
        let mut extras = Vec::with_capacity(self.errors.len() + 1);
        if !self.fields.is_empty() {
            extras.push(Arg::Value(Value::Object(self.fields)));
        }
        extras.extend(self.errors);
        (self.message.unwrap_or_default(), extras)
    }

    fn insert(&mut self, field: &Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for EventVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.insert(field, Value::from(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, Value::from(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == MESSAGE_KEY {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, Value::from(value));
        }
    }

    fn record_error(&mut self, _field: &Field, value: &(dyn StdError + 'static)) {
        let arg = match value.downcast_ref::<HttpError>() {
            Some(http) => Arg::enriched(http.clone()),
            None => Arg::Error(Arc::new(CapturedError::capture(value))),
        };
        self.errors.push(arg);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == MESSAGE_KEY {
            self.message = Some(text);
        } else {
            self.insert(field, Value::String(text));
        }
    }
}
