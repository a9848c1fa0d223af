//! Date label formatting
//!
//! Renders task dates the way the task list shows them: day-first with
//! Afrikaans month abbreviations (`15 Mrt 2024`), collapsing a start/due
//! pair into the shortest unambiguous range.

use crate::constants::{DAY_RANGE_SEPARATOR, MONTH_ABBREVIATIONS, RANGE_SEPARATOR};
use crate::utils::datetime::{format_ymd, DateLike, Moment, INVALID_DATE};
use chrono::Datelike;
use serde::{Serialize, Serializer};
use std::fmt;

/// A due date with an optional start date, as carried by a task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateSpan {
    pub due_date: Option<DateLike>,
    pub start_date: Option<DateLike>,
}

impl DateSpan {
    pub fn new(due_date: Option<DateLike>, start_date: Option<DateLike>) -> Self {
        Self { due_date, start_date }
    }
}

/// Result of [`format_date`].
///
/// A missing date yields the number zero rather than an empty string, so a
/// caller testing for truthiness sees it as "no date".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarDate {
    Zero,
    Day(String),
}

impl CalendarDate {
    pub fn is_zero(&self) -> bool {
        matches!(self, CalendarDate::Zero)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarDate::Zero => write!(f, "0"),
            CalendarDate::Day(day) => f.write_str(day),
        }
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CalendarDate::Zero => serializer.serialize_u8(0),
            CalendarDate::Day(day) => serializer.serialize_str(day),
        }
    }
}

/// Which calendar fields a label includes
#[derive(Debug, Clone, Copy)]
enum Parts {
    DayMonthYear,
    DayMonth,
    MonthYear,
}

fn present(date: Option<&DateLike>) -> Option<&DateLike> {
    date.filter(|d| !d.is_blank())
}

fn month_abbreviation(month0: u32) -> &'static str {
    MONTH_ABBREVIATIONS[month0 as usize % 12]
}

fn render(moment: Moment, parts: Parts) -> String {
    let Some(date) = moment.date() else {
        return INVALID_DATE.to_string();
    };
    let month = month_abbreviation(date.month0());

    match parts {
        Parts::DayMonthYear => format!("{} {} {}", date.day(), month, date.year()),
        Parts::DayMonth => format!("{} {}", date.day(), month),
        Parts::MonthYear => format!("{} {}", month, date.year()),
    }
}

/// Format a task's date span
///
/// # Examples
/// * due only: `15 Mrt 2024`
/// * same month: `1-15 Mrt 2024`
/// * same year: `1 Mrt - 1 Apr 2024`
/// * different years: `31 Des 2023 - 1 Jan 2024`
pub fn display_date(span: &DateSpan) -> String {
    let Some(due) = present(span.due_date.as_ref()) else {
        return String::new();
    };
    let due = due.moment();

    let Some(start) = present(span.start_date.as_ref()) else {
        return render(due, Parts::DayMonthYear);
    };
    let start = start.moment();

    match (start, due) {
        (Moment::Valid(s), Moment::Valid(d)) if s == d => render(start, Parts::DayMonthYear),
        (Moment::Valid(s), Moment::Valid(d)) if s.year() == d.year() && s.month0() == d.month0() => format!(
            "{}{}{} {}",
            s.day(),
            DAY_RANGE_SEPARATOR,
            d.day(),
            render(start, Parts::MonthYear)
        ),
        (Moment::Valid(s), Moment::Valid(d)) if s.year() == d.year() => format!(
            "{}{}{}",
            render(start, Parts::DayMonth),
            RANGE_SEPARATOR,
            render(due, Parts::DayMonthYear)
        ),
        _ => format!(
            "{}{}{}",
            render(start, Parts::DayMonthYear),
            RANGE_SEPARATOR,
            render(due, Parts::DayMonthYear)
        ),
    }
}

/// Format a date as day and abbreviated month, e.g. `15 Mrt`
pub fn display_date_short(date: Option<&DateLike>) -> String {
    match present(date) {
        Some(date) => render(date.moment(), Parts::DayMonth),
        None => String::new(),
    }
}

/// Normalize a date to its `YYYY-MM-DD` calendar day
pub fn format_date(date: Option<&DateLike>) -> CalendarDate {
    match present(date) {
        Some(date) => CalendarDate::Day(
            date.moment()
                .date()
                .map(format_ymd)
                .unwrap_or_else(|| INVALID_DATE.to_string()),
        ),
        None => CalendarDate::Zero,
    }
}
