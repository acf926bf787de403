//! Error normalization
//!
//! Flattens every error passed as an extra argument into its own `error*`
//! field, plus `errorResponse*` and `errorRequest*` when the error carries
//! those payloads. Keys are always allocated through [`free_key`], so an
//! existing field is never overwritten.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

use super::Formatter;
use super::keys::free_key;
use crate::record::{Arg, Record};
use crate::utils::maybe_json;

const ERROR_KEY: &str = "error";
const RESPONSE_KEY: &str = "errorResponse";
const REQUEST_KEY: &str = "errorRequest";

static NEWLINE_INDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s+").expect("static pattern is valid"));

/// Formatter that turns error arguments into record fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorFormatter {
    pipe_newline: bool,
}

impl ErrorFormatter {
    /// Create a formatter that stores traces verbatim
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse indented continuation lines of a trace into `" | "`
    #[must_use]
    pub fn pipe_newline(mut self, enabled: bool) -> Self {
        self.pipe_newline = enabled;
        self
    }

    fn shape_trace(&self, trace: String) -> String {
        if self.pipe_newline {
            collapse_newlines(&trace)
        } else {
            trace
        }
    }
}

impl Formatter for ErrorFormatter {
    fn name(&self) -> &'static str {
        "errors"
    }

    fn transform(&self, mut record: Record, extras: &[Arg]) -> Record {
        if extras.is_empty() {
            return record;
        }

        for err in extras.iter().filter_map(Arg::as_error) {
            let trace = err
                .trace()
                .map_or(Value::Null, |t| Value::String(self.shape_trace(t)));
            let key = free_key(&record, ERROR_KEY);
            record.insert(key, trace);

            if let Some(response) = err.response() {
                let key = free_key(&record, RESPONSE_KEY);
                record.insert(
                    key,
                    json!({
                        "data": maybe_json(&response.data),
                        "status": response.status,
                        "headers": response.headers,
                    }),
                );
            }

            if let Some(request) = err.request() {
                let key = free_key(&record, REQUEST_KEY);
                record.insert(key, request.clone());
            }
        }

        record
    }
}

/// Replace every newline followed by whitespace with `" | "`
pub fn collapse_newlines(trace: &str) -> String {
    NEWLINE_INDENT.replace_all(trace, " | ").into_owned()
}
