//! Body renderers

use serde_json::{Map, Value};

use crate::config::Format;
use crate::core::LogResult;
use crate::record::{LEVEL_KEY, MESSAGE_KEY, Record};

impl Format {
    /// Render a finished record as one output line (without the newline)
    pub fn render(self, record: &Record) -> LogResult<String> {
        match self {
            Self::Json => Ok(serde_json::to_string(record)?),
            Self::Simple => render_simple(record),
        }
    }
}

/// `level: message` followed by the remaining fields as JSON, if any
fn render_simple(record: &Record) -> LogResult<String> {
    let level = record
        .get(LEVEL_KEY)
        .and_then(Value::as_str)
        .unwrap_or_else(|| record.level().as_str());

    let rest: Map<String, Value> = record
        .fields()
        .iter()
        .filter(|(key, _)| key.as_str() != LEVEL_KEY && key.as_str() != MESSAGE_KEY)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if rest.is_empty() {
        Ok(format!("{level}: {}", record.message()))
    } else {
        let rest = serde_json::to_string(&rest)?;
        Ok(format!("{level}: {} {rest}", record.message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Level;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Record {
        let mut record = Record::new(Level::Warn, "slow query");
        record.insert("timestamp", json!("2024-05-01T12:00:00.000Z"));
        record.insert("elapsed_ms", json!(812));
        record
    }

    #[test]
    fn test_json_is_single_line_with_sorted_keys() {
        let line = Format::Json.render(&sample()).unwrap();
        assert_eq!(
            line,
            r#"{"elapsed_ms":812,"level":"warn","message":"slow query","timestamp":"2024-05-01T12:00:00.000Z"}"#
        );
    }

    #[test]
    fn test_simple_with_rest() {
        let line = Format::Simple.render(&sample()).unwrap();
        assert_eq!(
            line,
            r#"warn: slow query {"elapsed_ms":812,"timestamp":"2024-05-01T12:00:00.000Z"}"#
        );
    }

    #[test]
    fn test_simple_without_rest() {
        let line = Format::Simple.render(&Record::new(Level::Info, "ready")).unwrap();
        assert_eq!(line, "info: ready");
    }

    #[test]
    fn test_simple_keeps_multiline_error_escaped() {
        let mut record = Record::new(Level::Error, "failed");
        record.insert("error", json!("boom\n    caused by: io"));
        let line = Format::Simple.render(&record).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.starts_with("error: failed {"));
    }
}
