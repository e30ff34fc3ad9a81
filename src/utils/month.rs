//! Month boundaries and leap years

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeZone};

use crate::error::{DateError, Result};
use crate::utils::datetime::resolve_local;

/// Returns true when `year` is a leap year in the proleptic Gregorian calendar
pub fn is_leap_year(year: i32) -> bool {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_some() {
        NaiveDate::from_ymd_opt(year, 2, 29).is_some()
    } else {
        // outside chrono's representable range
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in `month` (1-12) of `year`
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of(year, month)?;
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .ok_or_else(|| DateError::OutOfRange(format!("{}-{:02}", year, month)))
}

/// Day 1 of the month of `date`, same time of day
pub fn first_day_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    date.with_day(1)
        .ok_or_else(|| DateError::OutOfRange(format!("first day of month for {}", date.naive_local())))
}

/// Last day of the month of `date`, same time of day
pub fn last_day_of_month<Tz: TimeZone>(date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let last = days_in_month(date.year(), date.month())?;
    date.with_day(last)
        .ok_or_else(|| DateError::OutOfRange(format!("last day of month for {}", date.naive_local())))
}

/// First day of `month` (1-12) in `year` at 00:00:00 in `tz`
pub fn first_day_of_month_of<Tz: TimeZone>(year: i32, month: u32, tz: &Tz) -> Result<DateTime<Tz>> {
    let date = first_of(year, month)?;
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

/// Last day of `month` (1-12) in `year` at 00:00:00 in `tz`
pub fn last_day_of_month_of<Tz: TimeZone>(year: i32, month: u32, tz: &Tz) -> Result<DateTime<Tz>> {
    let last = days_in_month(year, month)?;
    let date = NaiveDate::from_ymd_opt(year, month, last)
        .ok_or_else(|| DateError::OutOfRange(format!("{}-{:02}-{:02}", year, month, last)))?;
    resolve_local(tz, date.and_time(NaiveTime::MIN))
}

fn first_of(year: i32, month: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| DateError::OutOfRange(format!("{}-{:02}", year, month)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month_lengths() {
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
    }

    #[test]
    fn test_days_in_month_rejects_bad_month() {
        assert!(matches!(days_in_month(2024, 0), Err(DateError::InvalidMonth(0))));
        assert!(matches!(days_in_month(2024, 13), Err(DateError::InvalidMonth(13))));
    }

    #[test]
    fn test_leap_year_outside_chrono_range() {
        assert!(is_leap_year(400_000));
        assert!(!is_leap_year(300_100));
    }
}
