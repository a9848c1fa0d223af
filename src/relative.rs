//! Humanized relative date labels
//!
//! Buckets a date relative to "now" into one of a fixed set of Afrikaans
//! labels, in the order the task list groups them.

use crate::constants::{
    LABEL_DAY_AFTER_TOMORROW, LABEL_LATER, LABEL_NEXT_MONTH, LABEL_NO_DATE, LABEL_PAST, LABEL_THIS_MONTH,
    LABEL_THIS_WEEK, LABEL_TODAY, LABEL_TOMORROW,
};
use crate::utils::datetime::{add_days, local_midnight, next_month, week_start, DateLike, Moment};
use chrono::{DateTime, Datelike, Local};
use std::fmt;

/// Relative position of a date with respect to the evaluation day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeLabel {
    NoDate,
    Past,
    Today,
    Tomorrow,
    DayAfterTomorrow,
    ThisWeek,
    ThisMonth,
    NextMonth,
    Later,
}

impl RelativeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeLabel::NoDate => LABEL_NO_DATE,
            RelativeLabel::Past => LABEL_PAST,
            RelativeLabel::Today => LABEL_TODAY,
            RelativeLabel::Tomorrow => LABEL_TOMORROW,
            RelativeLabel::DayAfterTomorrow => LABEL_DAY_AFTER_TOMORROW,
            RelativeLabel::ThisWeek => LABEL_THIS_WEEK,
            RelativeLabel::ThisMonth => LABEL_THIS_MONTH,
            RelativeLabel::NextMonth => LABEL_NEXT_MONTH,
            RelativeLabel::Later => LABEL_LATER,
        }
    }
}

impl fmt::Display for RelativeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a date relative to `now`
///
/// Anything earlier than local midnight of `now` is in the past, whatever its
/// time of day. The remaining buckets compare local calendar days. An invalid
/// date fails every comparison and ends up as [`RelativeLabel::Later`].
pub fn classify_at(date: Option<&DateLike>, now: DateTime<Local>) -> RelativeLabel {
    let date = match date {
        Some(date) if !date.is_blank() => date,
        _ => return RelativeLabel::NoDate,
    };

    let today = now.date_naive();
    let Moment::Valid(instant) = date.moment() else {
        return RelativeLabel::Later;
    };

    if instant < local_midnight(today) {
        return RelativeLabel::Past;
    }

    let day = instant.date_naive();
    if day == today {
        return RelativeLabel::Today;
    }
    if day == add_days(today, 1) {
        return RelativeLabel::Tomorrow;
    }
    if day == add_days(today, 2) {
        return RelativeLabel::DayAfterTomorrow;
    }

    let this_week_start = week_start(today);
    let this_week_end = add_days(this_week_start, 6);
    if day >= this_week_start && day <= this_week_end {
        return RelativeLabel::ThisWeek;
    }

    let current = (today.year(), today.month0());
    let input = (day.year(), day.month0());
    if input == current {
        return RelativeLabel::ThisMonth;
    }
    if input == next_month(current.0, current.1) {
        return RelativeLabel::NextMonth;
    }

    RelativeLabel::Later
}

/// Label a date relative to an explicit evaluation instant
pub fn display_pretty_date_at(date: Option<&DateLike>, now: DateTime<Local>) -> &'static str {
    classify_at(date, now).as_str()
}

/// Label a date relative to the current local time
pub fn display_pretty_date(date: Option<&DateLike>) -> &'static str {
    display_pretty_date_at(date, Local::now())
}
