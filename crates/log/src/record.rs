//! Log records and the extra arguments passed alongside them

use std::error::Error as StdError;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::Level;
use crate::diagnostic::{EnrichedError, HttpError, PlainError};

/// Key holding the rendered level
pub const LEVEL_KEY: &str = "level";
/// Key holding the message
pub const MESSAGE_KEY: &str = "message";

/// One log event as it moves through the formatter chain
///
/// Always contains `level` and `message`. The raw [`Level`] is kept apart
/// from the rendered `level` field so colorizing the field never changes
/// filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    level: Level,
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record with a level and message
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(LEVEL_KEY.to_string(), Value::String(level.as_str().to_string()));
        fields.insert(MESSAGE_KEY.to_string(), Value::String(message.into()));
        Self { level, fields }
    }

    /// Raw severity of the record
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Message text
    pub fn message(&self) -> &str {
        self.fields
            .get(MESSAGE_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether a field is present
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Set a field, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    /// Merge metadata fields; `level` and `message` are never replaced
    pub fn merge_metadata(&mut self, metadata: &Map<String, Value>) {
        for (key, value) in metadata {
            if key != LEVEL_KEY && key != MESSAGE_KEY {
                self.fields.insert(key.clone(), value.clone());
            }
        }
    }

    /// All fields, `level` and `message` included
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: `level` and `message` are always present
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Value passed to a log call beyond the message
#[derive(Debug, Clone)]
pub enum Arg {
    /// Plain value; objects are merged into the record as metadata
    Value(Value),
    /// Error value inspected by the error formatter
    Error(Arc<dyn EnrichedError>),
}

impl Arg {
    /// Wrap any serializable value
    ///
    /// A value that cannot be represented as JSON becomes `null`.
    pub fn value(value: impl Serialize) -> Self {
        Self::Value(serde_json::to_value(value).unwrap_or(Value::Null))
    }

    /// Wrap a standard error; its trace is the message plus its source chain
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Error(Arc::new(PlainError(err)))
    }

    /// Wrap an error that carries its own diagnostics
    pub fn enriched(err: impl EnrichedError + 'static) -> Self {
        Self::Error(Arc::new(err))
    }

    /// The error, when this argument is one
    pub fn as_error(&self) -> Option<&dyn EnrichedError> {
        match self {
            Self::Error(err) => Some(err.as_ref()),
            Self::Value(_) => None,
        }
    }

    /// The object fields, when this argument is a JSON object
    pub fn as_metadata(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Value(Value::Object(map)) => Some(map),
            _ => None,
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<HttpError> for Arg {
    fn from(err: HttpError) -> Self {
        Self::enriched(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_record_has_level_and_message() {
        let record = Record::new(Level::Warn, "disk almost full");
        assert_eq!(record.level(), Level::Warn);
        assert_eq!(record.message(), "disk almost full");
        assert_eq!(record.get(LEVEL_KEY), Some(&json!("warn")));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_merge_metadata_keeps_level_and_message() {
        let mut record = Record::new(Level::Info, "hello");
        let meta = json!({"message": "spoofed", "level": "error", "user": "ada"});
        record.merge_metadata(meta.as_object().unwrap());

        assert_eq!(record.message(), "hello");
        assert_eq!(record.get(LEVEL_KEY), Some(&json!("info")));
        assert_eq!(record.get("user"), Some(&json!("ada")));
    }

    #[test]
    fn test_record_serializes_as_flat_object() {
        let mut record = Record::new(Level::Info, "hi");
        record.insert("port", json!(8080));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"level": "info", "message": "hi", "port": 8080}));
    }

    #[test]
    fn test_arg_accessors() {
        let meta = Arg::from(json!({"a": 1}));
        assert!(meta.as_metadata().is_some());
        assert!(meta.as_error().is_none());

        let scalar = Arg::value(3);
        assert!(scalar.as_metadata().is_none());

        let err = Arg::error(std::io::Error::other("boom"));
        assert_eq!(err.as_error().and_then(|e| e.trace()).as_deref(), Some("boom"));
    }
}
