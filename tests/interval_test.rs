use chrono::{DateTime, Duration, TimeZone, Utc};
use dateutils::{split_interval, DateError};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

#[test]
fn test_split_in_two() {
    let start = at(2014, 12, 12, 10, 0, 0);
    let end = at(2014, 12, 12, 14, 0, 0);
    let pieces = split_interval(&start, &end, 2).unwrap();
    assert_eq!(pieces, vec![start, at(2014, 12, 12, 12, 0, 0), end]);
}

#[test]
fn test_single_piece() {
    let start = at(2014, 12, 12, 10, 0, 0);
    let end = at(2014, 12, 13, 10, 0, 0);
    assert_eq!(split_interval(&start, &end, 1).unwrap(), vec![start, end]);
}

#[test]
fn test_remainder_lands_in_last_piece() {
    let start = at(2014, 12, 12, 10, 0, 0);
    // 10 seconds and 1 ms into 3 pieces of 3333 ms
    let end = start + Duration::milliseconds(10_001);
    let pieces = split_interval(&start, &end, 3).unwrap();

    assert_eq!(pieces.len(), 4);
    assert_eq!(pieces[1], start + Duration::milliseconds(3_333));
    assert_eq!(pieces[2], start + Duration::milliseconds(6_666));
    assert_eq!(pieces[3], end);
}

#[test]
fn test_boundaries_are_ordered() {
    let start = at(2024, 1, 1, 0, 0, 0);
    let end = at(2024, 12, 31, 23, 59, 59);
    let pieces = split_interval(&start, &end, 7).unwrap();
    assert_eq!(pieces.len(), 8);
    assert!(pieces.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(pieces.first(), Some(&start));
    assert_eq!(pieces.last(), Some(&end));
}

#[test]
fn test_empty_interval() {
    let t = at(2024, 1, 1, 0, 0, 0);
    assert_eq!(split_interval(&t, &t, 3).unwrap(), vec![t; 4]);
}

#[test]
fn test_zero_pieces_rejected() {
    let start = at(2024, 1, 1, 0, 0, 0);
    let end = at(2024, 1, 2, 0, 0, 0);
    assert!(matches!(split_interval(&start, &end, 0), Err(DateError::ZeroPieces)));
}

#[test]
fn test_reversed_interval_rejected() {
    let start = at(2024, 1, 2, 0, 0, 0);
    let end = at(2024, 1, 1, 0, 0, 0);
    assert!(matches!(split_interval(&start, &end, 2), Err(DateError::InvalidOrder { .. })));
}
