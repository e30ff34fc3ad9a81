//! Date helper modules.
//!
//! Thin wrappers over chrono that give the rest of the crate (and callers) one
//! consistent way to format, parse and move dates around.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Formatting, parsing, ordering, day boundaries and day offsets
//! - [`month`] - Month boundaries, month lengths and leap years
//! - [`interval`] - Splitting an interval into equal-width pieces
//! - [`pattern`] - Conventional `yyyy-MM-dd HH:mm:ss` patterns compiled for chrono

pub mod datetime;
pub mod interval;
pub mod month;
pub mod pattern;
