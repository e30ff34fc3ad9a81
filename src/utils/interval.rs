//! Interval slicing

use chrono::{DateTime, Duration, TimeZone};

use crate::error::{DateError, Result};

/// Split `[start, end]` into `pieces` equal-width segments
///
/// Returns the `pieces + 1` boundaries, e.g. 2014-12-12 10:00:00 ~ 14:00:00 in two
/// pieces gives 10:00:00, 12:00:00 and 14:00:00. Segment width is whole
/// milliseconds; the last boundary is always `end`, so any remainder lands in
/// the final segment.
pub fn split_interval<Tz: TimeZone>(
    start: &DateTime<Tz>,
    end: &DateTime<Tz>,
    pieces: u32,
) -> Result<Vec<DateTime<Tz>>> {
    if pieces == 0 {
        return Err(DateError::ZeroPieces);
    }

    let start_ms = start.timestamp_millis();
    let end_ms = end.timestamp_millis();
    if end < start {
        return Err(DateError::InvalidOrder {
            earlier_ms: start_ms,
            later_ms: end_ms,
        });
    }

    let segment = (end_ms - start_ms) / i64::from(pieces);
    log::trace!("Splitting {} ms into {} pieces of {} ms", end_ms - start_ms, pieces, segment);

    let mut boundaries: Vec<DateTime<Tz>> = (0..pieces)
        .map(|i| start.clone() + Duration::milliseconds(segment * i64::from(i)))
        .collect();
    boundaries.push(end.clone());

    Ok(boundaries)
}
