use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use dateutils::{diff, diff_with, Cascade, DateError, DiffUnit};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn test_seconds_is_floor_of_millis() {
    let earlier = at(2024, 1, 1, 0, 0, 0);
    let later = earlier + Duration::milliseconds(12_999);
    assert_eq!(diff(&earlier, &later, DiffUnit::Second).unwrap(), 12);

    let later = earlier + Duration::milliseconds(999);
    assert_eq!(diff(&earlier, &later, DiffUnit::Second).unwrap(), 0);
}

#[test]
fn test_fixed_units() {
    let earlier = at(2024, 1, 1, 0, 0, 0);
    let later = at(2024, 1, 3, 5, 30, 15);
    let ms = later.timestamp_millis() - earlier.timestamp_millis();

    assert_eq!(diff(&earlier, &later, DiffUnit::Second).unwrap(), ms / 1000);
    assert_eq!(diff(&earlier, &later, DiffUnit::Minute).unwrap(), 2 * 24 * 60 + 5 * 60 + 30);
    assert_eq!(diff(&earlier, &later, DiffUnit::Hour).unwrap(), 53);
    assert_eq!(diff(&earlier, &later, DiffUnit::Day).unwrap(), 2);
    assert_eq!(diff(&earlier, &later, DiffUnit::Week).unwrap(), 0);
}

#[test]
fn test_week_is_days_over_seven() {
    let earlier = at(2024, 1, 1, 8, 0, 0);
    for days in [1, 6, 7, 13, 14, 15, 100, 365] {
        let later = earlier + Duration::days(days) + Duration::hours(3);
        let d = diff(&earlier, &later, DiffUnit::Day).unwrap();
        let w = diff(&earlier, &later, DiffUnit::Week).unwrap();
        assert_eq!(d, days);
        assert_eq!(w, d / 7);
    }
}

#[test]
fn test_year_ignores_time_of_day_on_same_month_and_day() {
    let earlier = at(2020, 3, 15, 10, 0, 0);
    let later = at(2023, 3, 15, 9, 0, 0);
    assert_eq!(diff(&earlier, &later, DiffUnit::Year).unwrap(), 3);
}

#[test]
fn test_year_one_day_short() {
    let earlier = at(2020, 3, 15, 0, 0, 0);
    let later = at(2023, 3, 14, 0, 0, 0);
    assert_eq!(diff(&earlier, &later, DiffUnit::Year).unwrap(), 2);
}

#[test]
fn test_year_cascade_on_month() {
    // earlier month in the later year but later day of month: still a full year short
    assert_eq!(diff(&at(2020, 5, 1, 0, 0, 0), &at(2023, 4, 30, 0, 0, 0), DiffUnit::Year).unwrap(), 2);
    // later month but earlier day: the month already decides it
    assert_eq!(diff(&at(2020, 1, 20, 0, 0, 0), &at(2023, 3, 10, 0, 0, 0), DiffUnit::Year).unwrap(), 3);
}

#[test]
fn test_year_with_datetime_cascade() {
    let earlier = at(2020, 3, 15, 10, 0, 0);
    assert_eq!(
        diff_with(&earlier, &at(2023, 3, 15, 9, 59, 59), DiffUnit::Year, Cascade::DateTime).unwrap(),
        2
    );
    assert_eq!(
        diff_with(&earlier, &at(2023, 3, 15, 10, 0, 0), DiffUnit::Year, Cascade::DateTime).unwrap(),
        3
    );
}

#[test]
fn test_leap_day_birthday() {
    let earlier = at(2020, 2, 29, 0, 0, 0);
    assert_eq!(diff(&earlier, &at(2021, 2, 28, 0, 0, 0), DiffUnit::Year).unwrap(), 0);
    assert_eq!(diff(&earlier, &at(2021, 3, 1, 0, 0, 0), DiffUnit::Year).unwrap(), 1);
}

#[test]
fn test_months_within_a_year() {
    assert_eq!(diff(&at(2020, 1, 15, 0, 0, 0), &at(2020, 3, 15, 0, 0, 0), DiffUnit::Month).unwrap(), 2);
    assert_eq!(diff(&at(2020, 1, 15, 0, 0, 0), &at(2020, 3, 14, 0, 0, 0), DiffUnit::Month).unwrap(), 1);
    assert_eq!(diff(&at(2020, 1, 15, 0, 0, 0), &at(2020, 1, 20, 0, 0, 0), DiffUnit::Month).unwrap(), 0);
}

#[test]
fn test_months_across_years() {
    assert_eq!(diff(&at(2020, 3, 15, 0, 0, 0), &at(2021, 3, 15, 0, 0, 0), DiffUnit::Month).unwrap(), 12);
    assert_eq!(diff(&at(2020, 3, 15, 0, 0, 0), &at(2021, 3, 14, 0, 0, 0), DiffUnit::Month).unwrap(), 11);
    assert_eq!(diff(&at(2020, 12, 15, 0, 0, 0), &at(2021, 1, 20, 0, 0, 0), DiffUnit::Month).unwrap(), 1);
    assert_eq!(diff(&at(2019, 11, 30, 0, 0, 0), &at(2022, 2, 28, 0, 0, 0), DiffUnit::Month).unwrap(), 26);
}

#[test]
fn test_month_end_is_not_a_full_month() {
    let earlier = at(2020, 1, 31, 0, 0, 0);
    assert_eq!(diff(&earlier, &at(2020, 2, 29, 0, 0, 0), DiffUnit::Month).unwrap(), 0);
    assert_eq!(diff(&earlier, &at(2020, 3, 31, 0, 0, 0), DiffUnit::Month).unwrap(), 2);
}

#[test]
fn test_equal_timestamps_rejected() {
    let t = at(2024, 6, 1, 12, 0, 0);
    for unit in DiffUnit::ALL {
        let err = diff(&t, &t, unit).unwrap_err();
        assert!(matches!(err, DateError::InvalidOrder { .. }));
    }
}

#[test]
fn test_reversed_timestamps_rejected() {
    let earlier = at(2024, 6, 1, 12, 0, 0);
    let later = at(2025, 6, 1, 12, 0, 0);
    for unit in DiffUnit::ALL {
        match diff(&later, &earlier, unit) {
            Err(DateError::InvalidOrder { earlier_ms, later_ms }) => {
                assert_eq!(earlier_ms, later.timestamp_millis());
                assert_eq!(later_ms, earlier.timestamp_millis());
            }
            other => panic!("expected InvalidOrder, got {:?}", other),
        }
    }
}

#[test]
fn test_fixed_offset_timestamps() {
    let tz = FixedOffset::east_opt(8 * 3600).unwrap();
    let earlier = tz.with_ymd_and_hms(2014, 12, 12, 10, 0, 0).unwrap();
    let later = tz.with_ymd_and_hms(2015, 12, 12, 10, 0, 0).unwrap();
    assert_eq!(diff(&earlier, &later, DiffUnit::Year).unwrap(), 1);
    assert_eq!(diff(&earlier, &later, DiffUnit::Month).unwrap(), 12);
    assert_eq!(diff(&earlier, &later, DiffUnit::Day).unwrap(), 365);
    assert_eq!(diff(&earlier, &later, DiffUnit::Week).unwrap(), 52);
}

#[test]
fn test_unit_from_str() {
    assert_eq!("Month".parse::<DiffUnit>().unwrap(), DiffUnit::Month);
    assert!(matches!("decade".parse::<DiffUnit>(), Err(DateError::UnsupportedUnit(_))));
}
