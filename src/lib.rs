//! dateutils - Date and time convenience functions
//!
//! Formatting and parsing with conventional `yyyy-MM-dd HH:mm:ss` patterns,
//! day and month boundaries, leap years, day offsets, interval slicing and
//! calendar-aware differences, all on top of chrono with explicit time zones.
//!
//! # Modules
//!
//! * [`diff`] - Differences in years, months, weeks, days, hours, minutes, seconds
//! * [`utils`] - Formatting, parsing, boundaries and interval helpers
//! * [`config`] - Optional TOML configuration (zone, patterns, logging)
//! * [`logger`] - `fern` logger setup for the `log` facade
//! * [`error`] - Error type shared by every helper

/// Configuration module for zone, pattern and logging settings
pub mod config;

/// Crate constants and default values
pub mod constants;

/// Calendar-aware differences between timestamps
pub mod diff;

/// Error types
pub mod error;

/// Logging setup
pub mod logger;

/// Date helpers
pub mod utils;

pub use diff::{diff, diff_with, Cascade, DiffUnit};
pub use error::{DateError, Result};
pub use utils::datetime::{
    current_date, day_end, day_start, format_date, is_before, offset_days, parse_date, parse_date_with, today_end,
    today_start,
};
pub use utils::interval::split_interval;
pub use utils::month::{
    days_in_month, first_day_of_month, first_day_of_month_of, is_leap_year, last_day_of_month, last_day_of_month_of,
};
pub use utils::pattern::Pattern;
