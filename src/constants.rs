//! Constants used throughout the crate
//!
//! Default patterns, unit sizes and file names live here so that the
//! helpers and the configuration layer agree on them.

// Patterns
pub const DEFAULT_DATE_PATTERN: &str = "yyyy-MM-dd";
pub const DEFAULT_DATETIME_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

// Unit sizes in milliseconds
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;
pub const DAYS_PER_WEEK: i64 = 7;
pub const MONTHS_PER_YEAR: i64 = 12;

// Files
pub const APP_DIR_NAME: &str = "dateutils";
pub const LOCAL_CONFIG_FILE: &str = "dateutils.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "dateutils.log";

// Messages
pub const CONFIG_GENERATED: &str = "Configuration file generated";
