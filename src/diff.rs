//! Calendar-aware differences between two timestamps
//!
//! Hours, minutes, seconds, days and weeks are plain duration divisions.
//! Years and months count *elapsed whole units*: the raw calendar subtraction is
//! decremented when the later date has not yet reached the same point in its
//! cycle as the earlier one (2020-03-15 to 2023-03-14 is two years, not three).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DAYS_PER_WEEK, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MONTHS_PER_YEAR,
};
use crate::error::{DateError, Result};
use crate::utils::datetime::is_before;

/// Granularity of a difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl DiffUnit {
    pub const ALL: [DiffUnit; 7] = [
        DiffUnit::Year,
        DiffUnit::Month,
        DiffUnit::Week,
        DiffUnit::Day,
        DiffUnit::Hour,
        DiffUnit::Minute,
        DiffUnit::Second,
    ];

    /// Fixed size of the unit in milliseconds, `None` for calendar units
    pub fn millis(self) -> Option<i64> {
        match self {
            DiffUnit::Year | DiffUnit::Month => None,
            DiffUnit::Week => Some(MILLIS_PER_DAY * DAYS_PER_WEEK),
            DiffUnit::Day => Some(MILLIS_PER_DAY),
            DiffUnit::Hour => Some(MILLIS_PER_HOUR),
            DiffUnit::Minute => Some(MILLIS_PER_MINUTE),
            DiffUnit::Second => Some(MILLIS_PER_SECOND),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiffUnit::Year => "year",
            DiffUnit::Month => "month",
            DiffUnit::Week => "week",
            DiffUnit::Day => "day",
            DiffUnit::Hour => "hour",
            DiffUnit::Minute => "minute",
            DiffUnit::Second => "second",
        }
    }
}

impl fmt::Display for DiffUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiffUnit {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "year" | "years" | "y" => Ok(DiffUnit::Year),
            "month" | "months" => Ok(DiffUnit::Month),
            "week" | "weeks" | "w" => Ok(DiffUnit::Week),
            "day" | "days" | "d" => Ok(DiffUnit::Day),
            "hour" | "hours" | "h" => Ok(DiffUnit::Hour),
            "minute" | "minutes" | "min" => Ok(DiffUnit::Minute),
            "second" | "seconds" | "s" => Ok(DiffUnit::Second),
            _ => Err(DateError::UnsupportedUnit(s.to_string())),
        }
    }
}

/// Calendar fields compared when deciding whether a year or month is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cascade {
    /// Month and day only; time of day never shortens a period
    #[default]
    Date,
    /// Month, day, hour, minute and second
    DateTime,
}

/// Difference between `earlier` and `later` in `unit`, using [`Cascade::Date`]
///
/// Time of day does not shorten a year or month here: 2020-03-15 10:00 to
/// 2023-03-15 09:00 is three years. The strict field-by-field comparison, where
/// that is two years, is `diff_with(.., Cascade::DateTime)`.
///
/// Fails with [`DateError::InvalidOrder`] unless `earlier` is strictly before `later`.
pub fn diff<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>, unit: DiffUnit) -> Result<i64> {
    diff_with(earlier, later, unit, Cascade::default())
}

/// Difference between `earlier` and `later` in `unit` with an explicit cascade
pub fn diff_with<Tz: TimeZone>(
    earlier: &DateTime<Tz>,
    later: &DateTime<Tz>,
    unit: DiffUnit,
    cascade: Cascade,
) -> Result<i64> {
    let earlier_ms = earlier.timestamp_millis();
    let later_ms = later.timestamp_millis();

    if !is_before(earlier, later) {
        log::warn!("Rejected diff: {} ms is not before {} ms", earlier_ms, later_ms);
        return Err(DateError::InvalidOrder { earlier_ms, later_ms });
    }

    let value = match unit {
        DiffUnit::Year => whole_years(earlier, later, cascade),
        DiffUnit::Month => whole_months(earlier, later, cascade),
        fixed => fixed.millis().map_or(0, |size| (later_ms - earlier_ms) / size),
    };

    log::debug!("diff({} ms, {} ms, {}) = {}", earlier_ms, later_ms, unit, value);
    Ok(value)
}

/// Calendar fields of one instant
#[derive(Debug, Clone, Copy)]
struct Fields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Fields {
    fn of<Tz: TimeZone>(date: &DateTime<Tz>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: date.hour(),
            minute: date.minute(),
            second: date.second(),
        }
    }

    /// Decompose both instants in the zone of `earlier`
    fn pair<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>) -> (Self, Self) {
        let later = later.with_timezone(&earlier.timezone());
        (Self::of(earlier), Self::of(&later))
    }

    fn time(&self, cascade: Cascade) -> (u32, u32, u32) {
        match cascade {
            Cascade::Date => (0, 0, 0),
            Cascade::DateTime => (self.hour, self.minute, self.second),
        }
    }

    /// Position within the year: (month, day, hour, minute, second)
    fn in_year(&self, cascade: Cascade) -> (u32, u32, (u32, u32, u32)) {
        (self.month, self.day, self.time(cascade))
    }

    /// Position within the month: (day, hour, minute, second)
    fn in_month(&self, cascade: Cascade) -> (u32, (u32, u32, u32)) {
        (self.day, self.time(cascade))
    }
}

fn whole_years<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>, cascade: Cascade) -> i64 {
    let (from, to) = Fields::pair(earlier, later);
    let mut years = i64::from(to.year) - i64::from(from.year);
    if to.in_year(cascade) < from.in_year(cascade) {
        years -= 1;
    }
    years
}

fn whole_months<Tz: TimeZone>(earlier: &DateTime<Tz>, later: &DateTime<Tz>, cascade: Cascade) -> i64 {
    let years = whole_years(earlier, later, cascade);
    let (from, to) = Fields::pair(earlier, later);

    let mut months = i64::from(to.month) + MONTHS_PER_YEAR - i64::from(from.month);
    if to.in_month(cascade) < from.in_month(cascade) {
        months -= 1;
    }
    // whole years are already counted in `years`
    months.rem_euclid(MONTHS_PER_YEAR) + years * MONTHS_PER_YEAR
}
