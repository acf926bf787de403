//! Timestamp stamping

use serde_json::Value;
use time::OffsetDateTime;
use time::macros::format_description;

use super::Formatter;
use crate::record::{Arg, Record};

/// Field written by [`Timestamp`]
pub const TIMESTAMP_KEY: &str = "timestamp";

/// Formatter that writes an ISO-8601 UTC `timestamp` field
#[derive(Debug, Clone, Copy, Default)]
pub struct Timestamp {
    fixed: Option<OffsetDateTime>,
}

impl Timestamp {
    /// Stamp records with the current time
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp every record with the same instant
    pub fn fixed(at: OffsetDateTime) -> Self {
        Self { fixed: Some(at) }
    }
}

impl Formatter for Timestamp {
    fn name(&self) -> &'static str {
        "timestamp"
    }

    fn transform(&self, mut record: Record, _extras: &[Arg]) -> Record {
        let at = self.fixed.unwrap_or_else(OffsetDateTime::now_utc);
        record.insert(TIMESTAMP_KEY, Value::String(format_timestamp(at)));
        record
    }
}

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let utc = at.to_offset(time::UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .unwrap_or_else(|_| utc.unix_timestamp().to_string())
}
