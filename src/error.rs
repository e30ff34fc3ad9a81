//! Error types for date operations.

use chrono::NaiveDateTime;

/// Errors returned by the date helpers.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("Second date must be after the first one (earlier: {earlier_ms} ms, later: {later_ms} ms)")]
    InvalidOrder { earlier_ms: i64, later_ms: i64 },

    #[error("Unsupported difference unit: '{0}'")]
    UnsupportedUnit(String),

    #[error("Failed to parse '{input}' with pattern '{pattern}': {source}")]
    Parse {
        input: String,
        pattern: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid date pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),

    #[error("Interval must be split into at least one piece")]
    ZeroPieces,

    #[error("Date out of range: {0}")]
    OutOfRange(String),

    #[error("Local time {0} does not exist in the target time zone")]
    NonexistentLocalTime(NaiveDateTime),

    #[error("Invalid time zone '{0}': expected 'local', 'utc' or an offset like '+08:00'")]
    InvalidTimeZone(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DateError>;
