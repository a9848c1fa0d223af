//! Date and time utility functions
//!
//! This module turns the loosely typed date values handled by the task list
//! (epoch milliseconds, resolved instants, or date strings) into local
//! instants, and provides the small calendar helpers the formatters share.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Calendar date format used for normalized `YYYY-MM-DD` output
pub const CALENDAR_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sentinel rendered wherever an unparseable date is formatted
pub const INVALID_DATE: &str = "Invalid Date";

const LOCAL_DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Errors produced by strict date resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("No date given")]
    Blank,

    #[error("Unrecognized date text: {0}")]
    Unparseable(String),

    #[error("Timestamp out of range: {0}")]
    OutOfRange(i64),
}

/// A date-like value as it arrives from forms, storage, or callers.
#[derive(Debug, Clone, PartialEq)]
pub enum DateLike {
    /// Milliseconds since the Unix epoch
    Millis(i64),
    /// An already-resolved local instant
    Instant(DateTime<Local>),
    /// A date string such as `2024-03-01` or `2024-03-01T09:30:00Z`
    Text(String),
}

/// The outcome of resolving a [`DateLike`].
///
/// `Invalid` plays the role of an invalid-date sentinel: every comparison
/// against it is false and every formatter renders it as [`INVALID_DATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Moment {
    Valid(DateTime<Local>),
    Invalid,
}

impl DateLike {
    /// Whether this value counts as "no date": empty text or the zero timestamp.
    pub fn is_blank(&self) -> bool {
        match self {
            DateLike::Millis(ms) => *ms == 0,
            DateLike::Instant(_) => false,
            DateLike::Text(text) => text.is_empty(),
        }
    }

    /// Resolve to a local instant, or `Moment::Invalid` when that is impossible.
    pub fn moment(&self) -> Moment {
        match self.resolve() {
            Ok(dt) => Moment::Valid(dt),
            Err(e) => {
                log::debug!("Treating date input as invalid: {}", e);
                Moment::Invalid
            }
        }
    }

    /// Resolve to a local instant, reporting why resolution failed.
    pub fn resolve(&self) -> Result<DateTime<Local>, DateError> {
        match self {
            DateLike::Millis(ms) => DateTime::from_timestamp_millis(*ms)
                .map(|dt| dt.with_timezone(&Local))
                .ok_or(DateError::OutOfRange(*ms)),
            DateLike::Instant(dt) => Ok(*dt),
            DateLike::Text(text) if text.is_empty() => Err(DateError::Blank),
            DateLike::Text(text) => parse_datetime(text).ok_or_else(|| DateError::Unparseable(text.clone())),
        }
    }
}

impl Moment {
    pub fn is_valid(&self) -> bool {
        matches!(self, Moment::Valid(_))
    }

    /// The resolved instant, if any
    pub fn datetime(&self) -> Option<DateTime<Local>> {
        match self {
            Moment::Valid(dt) => Some(*dt),
            Moment::Invalid => None,
        }
    }

    /// The local calendar day of this moment
    pub fn date(&self) -> Option<NaiveDate> {
        self.datetime().map(|dt| dt.date_naive())
    }

    /// Local year and zero-based month, mirroring how the calendar fields are compared
    pub fn year_month(&self) -> Option<(i32, u32)> {
        self.date().map(|d| (d.year(), d.month0()))
    }
}

impl From<i64> for DateLike {
    fn from(ms: i64) -> Self {
        DateLike::Millis(ms)
    }
}

impl From<DateTime<Local>> for DateLike {
    fn from(dt: DateTime<Local>) -> Self {
        DateLike::Instant(dt)
    }
}

impl From<DateTime<Utc>> for DateLike {
    fn from(dt: DateTime<Utc>) -> Self {
        DateLike::Instant(dt.with_timezone(&Local))
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(dt: NaiveDateTime) -> Self {
        DateLike::Instant(local_from_naive(&dt))
    }
}

impl From<NaiveDate> for DateLike {
    fn from(d: NaiveDate) -> Self {
        DateLike::Instant(local_midnight(d))
    }
}

impl From<&str> for DateLike {
    fn from(text: &str) -> Self {
        DateLike::Text(text.to_string())
    }
}

impl From<String> for DateLike {
    fn from(text: String) -> Self {
        DateLike::Text(text)
    }
}

/// Parse a date or datetime string into a local instant
///
/// Tries, in order: RFC3339 with any offset, local wall-clock datetimes in
/// ISO 8601 or space-separated form, and finally a bare `YYYY-MM-DD` date,
/// which is taken as local midnight.
pub fn parse_datetime(text: &str) -> Option<DateTime<Local>> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local));
    }

    for format in LOCAL_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(local_from_naive(&dt));
        }
    }

    parse_date(text).ok().map(local_midnight)
}

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, CALENDAR_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(CALENDAR_DATE_FORMAT).to_string()
}

/// Local midnight at the start of the given day
pub fn local_midnight(d: NaiveDate) -> DateTime<Local> {
    local_from_naive(&d.and_time(NaiveTime::MIN))
}

/// Interpret a wall-clock datetime in the local timezone
///
/// Wall times skipped by a DST transition fall back to being read as UTC.
pub fn local_from_naive(dt: &NaiveDateTime) -> DateTime<Local> {
    Local
        .from_local_datetime(dt)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(dt))
}

/// Shift a date by whole days, saturating at the calendar's bounds
pub fn add_days(d: NaiveDate, days: i64) -> NaiveDate {
    d.checked_add_signed(Duration::days(days)).unwrap_or(d)
}

/// First day of the Sunday-based week containing `d`
pub fn week_start(d: NaiveDate) -> NaiveDate {
    add_days(d, -(d.weekday().num_days_from_sunday() as i64))
}

/// Year and zero-based month of the month following `(year, month0)`
pub fn next_month(year: i32, month0: u32) -> (i32, u32) {
    let next = (month0 + 1) % 12;
    if next == 0 {
        (year + 1, next)
    } else {
        (year, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(DateLike::Millis(0).is_blank());
        assert!(DateLike::from("").is_blank());
        assert!(!DateLike::from("2024-03-01").is_blank());
        assert!(!DateLike::Millis(1).is_blank());
    }

    #[test]
    fn test_date_only_is_local_midnight() {
        let dt = DateLike::from("2024-03-01").resolve().unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(dt.format("%H:%M").to_string(), "00:00");
    }

    #[test]
    fn test_local_datetime_formats() {
        for text in ["2024-03-01T09:30:00", "2024-03-01T09:30", "2024-03-01 09:30:00", "2024-03-01 09:30"] {
            let dt = parse_datetime(text).unwrap();
            assert_eq!(dt.format("%Y-%m-%d %H:%M").to_string(), "2024-03-01 09:30", "{}", text);
        }
    }

    #[test]
    fn test_unparseable_text() {
        assert_eq!(
            DateLike::from("not a date").resolve(),
            Err(DateError::Unparseable("not a date".to_string()))
        );
        assert_eq!(DateLike::from("").resolve(), Err(DateError::Blank));
        assert_eq!(DateLike::from("2024-13-45").moment(), Moment::Invalid);
    }

    #[test]
    fn test_out_of_range_millis() {
        assert_eq!(DateLike::Millis(i64::MAX).resolve(), Err(DateError::OutOfRange(i64::MAX)));
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-03-13 is a Wednesday
        let wednesday = NaiveDate::from_ymd_opt(2024, 3, 13).unwrap();
        assert_eq!(week_start(wednesday), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());

        let sunday = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(week_start(sunday), sunday);
    }

    #[test]
    fn test_next_month_wraps_year() {
        assert_eq!(next_month(2024, 11), (2025, 0));
        assert_eq!(next_month(2024, 2), (2024, 3));
    }
}
