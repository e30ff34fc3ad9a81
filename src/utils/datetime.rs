//! Date and time utility functions
//!
//! Formatting, parsing, ordering and day-boundary helpers. Every function takes
//! its time zone explicitly, either through the `DateTime<Tz>` it operates on
//! or as a parameter, so results never depend on the process default zone
//! unless the caller passes [`chrono::Local`].

use std::fmt::{Display, Write as _};

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{DateTime, Days, NaiveDateTime, NaiveTime, ParseError, ParseResult, TimeZone, Utc};

use crate::constants::DEFAULT_DATE_PATTERN;
use crate::error::{DateError, Result};
use crate::utils::pattern::Pattern;

/// Format the current instant in `tz` with a conventional pattern
/// (`y` year, `M` month, `d` day, `H` 24-hour, `h` 12-hour, `m` minute, `s` second).
pub fn current_date<Tz>(tz: &Tz, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_date(&Utc::now().with_timezone(tz), pattern)
}

/// Format a timestamp with a conventional pattern
pub fn format_date<Tz>(date: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let compiled = Pattern::compile(pattern)?;
    format_with(date, &compiled)
}

/// Format a timestamp with an already compiled pattern
pub fn format_with<Tz>(date: &DateTime<Tz>, pattern: &Pattern) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", date.format(pattern.as_strftime())).map_err(|_| DateError::InvalidPattern {
        pattern: pattern.source().to_string(),
        reason: format!("cannot format {}", date.naive_local()),
    })?;
    Ok(out)
}

/// Returns true when `first` is strictly before `second`
pub fn is_before<Tz: TimeZone>(first: &DateTime<Tz>, second: &DateTime<Tz>) -> bool {
    first < second
}

/// Parse a `yyyy-MM-dd` string to local midnight in `tz`
///
/// # Arguments
/// * `input` - Date string in yyyy-MM-dd format
/// * `tz` - Time zone the midnight is resolved in
pub fn parse_date<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    parse_date_with(input, DEFAULT_DATE_PATTERN, tz)
}

/// Parse a string with any conventional pattern and resolve it in `tz`
///
/// Fields the pattern lacks default to 1970-01-01 00:00:00 (`yyyy-MM` is the
/// first of the month, `HH:mm` a time on 1970-01-01). When the pattern carries an
/// offset (`Z`, `XXX`) the parsed instant is converted into `tz` instead.
pub fn parse_date_with<Tz: TimeZone>(input: &str, pattern: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let compiled = Pattern::compile(pattern)?;
    let parsed = parse_fields(input, &compiled)?;

    if compiled.has_offset() {
        let instant = parsed.to_datetime().map_err(|source| parse_error(input, &compiled, source))?;
        return Ok(instant.with_timezone(tz));
    }

    let naive = parsed
        .to_naive_datetime_with_offset(0)
        .map_err(|source| parse_error(input, &compiled, source))?;
    resolve_local(tz, naive)
}

/// Parse a string into a wall-clock date-time without attaching a zone
///
/// An offset field, if present, is read but not applied.
pub fn parse_naive(input: &str, pattern: &str) -> Result<NaiveDateTime> {
    let compiled = Pattern::compile(pattern)?;
    parse_fields(input, &compiled)?
        .to_naive_datetime_with_offset(0)
        .map_err(|source| parse_error(input, &compiled, source))
}

fn parse_fields(input: &str, pattern: &Pattern) -> Result<Parsed> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, input, StrftimeItems::new(pattern.as_strftime()))
        .and_then(|()| fill_missing(&mut parsed))
        .map_err(|source| parse_error(input, pattern, source))?;
    Ok(parsed)
}

/// Default every field the input did not set, leaving parsed ones untouched
fn fill_missing(parsed: &mut Parsed) -> ParseResult<()> {
    if parsed.year().is_none() && parsed.year_div_100().is_none() && parsed.year_mod_100().is_none() {
        parsed.set_year(1970)?;
    }
    if parsed.month().is_none() {
        parsed.set_month(1)?;
    }
    if parsed.day().is_none() {
        parsed.set_day(1)?;
    }
    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        // 12-hour clock without a marker reads as AM
        (None, Some(_)) => parsed.set_ampm(false)?,
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    Ok(())
}

fn parse_error(input: &str, pattern: &Pattern, source: ParseError) -> DateError {
    DateError::Parse {
        input: input.to_string(),
        pattern: pattern.source().to_string(),
        source,
    }
}

/// Attach `tz` to a wall-clock date-time
///
/// Ambiguous times (clocks turned back) resolve to the earlier instant.
pub fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or(DateError::NonexistentLocalTime(naive))
}

/// Start of the calendar day of `date` (00:00:00.000)
pub fn day_start<Tz: TimeZone>(date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let naive = date.date_naive().and_time(NaiveTime::MIN);
    resolve_local(&date.timezone(), naive)
}

/// End of the calendar day of `date` (23:59:59.000)
pub fn day_end<Tz: TimeZone>(date: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let naive = date
        .date_naive()
        .and_hms_opt(23, 59, 59)
        .ok_or_else(|| DateError::OutOfRange(format!("end of day {}", date.date_naive())))?;
    resolve_local(&date.timezone(), naive)
}

/// Start of today in `tz`, e.g. 2014-12-12 00:00:00
pub fn today_start<Tz: TimeZone>(tz: &Tz) -> Result<DateTime<Tz>> {
    day_start(&Utc::now().with_timezone(tz))
}

/// End of today in `tz`, e.g. 2014-12-12 23:59:59
pub fn today_end<Tz: TimeZone>(tz: &Tz) -> Result<DateTime<Tz>> {
    day_end(&Utc::now().with_timezone(tz))
}

/// The date `days` calendar days after `date` (before it when negative)
///
/// The wall-clock time is kept, so crossing a DST change does not shift the hour.
pub fn offset_days<Tz: TimeZone>(date: &DateTime<Tz>, days: i64) -> Result<DateTime<Tz>> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.clone().checked_add_days(magnitude)
    } else {
        date.clone().checked_sub_days(magnitude)
    };

    shifted.ok_or_else(|| DateError::OutOfRange(format!("{} days from {}", days, date.naive_local())))
}
