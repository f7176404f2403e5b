//! Timestamp formatting capability
//!
//! The `datetime` check compares an order's `datetime` string byte for byte with the
//! exchange's own ISO-8601 rendering of its `timestamp`. The rendering is owned by the
//! exchange integration and injected through [`TimestampFormatter`].

use chrono::{DateTime, SecondsFormat, Utc};

use crate::order::Timestamp;

/// Canonical timestamp to ISO-8601 conversion provided by an exchange
pub trait TimestampFormatter: Send + Sync {
    /// Render epoch milliseconds as ISO-8601
    ///
    /// Returns `None` when the timestamp has no rendering.
    fn iso8601(&self, timestamp: Timestamp) -> Option<String>;
}

/// Default UTC rendering with millisecond precision, e.g. `2021-01-01T00:00:00.000Z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iso8601;

impl TimestampFormatter for Iso8601 {
    fn iso8601(&self, timestamp: Timestamp) -> Option<String> {
        if timestamp < 0 {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(timestamp)
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl<F> TimestampFormatter for F
where
    F: Fn(Timestamp) -> Option<String> + Send + Sync,
{
    fn iso8601(&self, timestamp: Timestamp) -> Option<String> {
        self(timestamp)
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> Timestamp {
    Utc::now().timestamp_millis()
}
