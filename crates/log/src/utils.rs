//! Utility functions

use serde_json::Value;

/// Parse `text` as JSON, falling back to the original string.
///
/// Response bodies may or may not be JSON-encoded; this never fails.
pub fn maybe_json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}
