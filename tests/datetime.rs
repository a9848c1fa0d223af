use chrono::{Local, NaiveDate, Utc};
use takelys::utils::datetime::*;

#[test]
fn test_format_ymd() {
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    assert_eq!(format_ymd(date), "2025-01-15");
}

#[test]
fn test_rfc3339_converts_to_local() {
    let text = "2024-03-01T12:00:00Z";
    let expected = text.parse::<chrono::DateTime<Utc>>().unwrap().with_timezone(&Local);
    assert_eq!(parse_datetime(text), Some(expected));
}

#[test]
fn test_date_like_conversions() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let from_naive = DateLike::from(date).resolve().unwrap();
    let from_text = DateLike::from("2024-03-01").resolve().unwrap();
    assert_eq!(from_naive, from_text);

    let now = Local::now();
    assert_eq!(DateLike::from(now).resolve().unwrap(), now);
}

#[test]
fn test_millis_round_trip() {
    let ms = 1_709_294_400_000;
    let dt = DateLike::Millis(ms).resolve().unwrap();
    assert_eq!(dt.timestamp_millis(), ms);
}

#[test]
fn test_moment_accessors() {
    let moment = DateLike::from("2024-12-31").moment();
    assert!(moment.is_valid());
    assert_eq!(moment.year_month(), Some((2024, 11)));
    assert_eq!(Moment::Invalid.date(), None);
}

#[test]
fn test_add_days_crosses_year() {
    let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    assert_eq!(add_days(date, 1), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
}
