//! Deadline countdown and labels.
//!
//! # Invariants
//! - Both sides are reduced to calendar dates before subtracting, so the
//!   count only changes at midnight.
//! - Negative counts mean overdue.

use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Callers highlight deadlines at or below this many days.
pub const URGENT_THRESHOLD_DAYS: i64 = 3;

const MILLIS_PER_DAY: i64 = 86_400_000;

static DATE_PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:[T ].*)?$").expect("valid date prefix regex")
});

/// Deadline input that is neither `YYYY-MM-DD` nor a datetime starting
/// with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineParseError {
    pub input: String,
}

impl Display for DeadlineParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid deadline `{}`; expected YYYY-MM-DD", self.input)
    }
}

impl Error for DeadlineParseError {}

/// Current calendar date in local time.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a deadline field, dropping any time-of-day part.
pub fn parse_deadline(input: &str) -> Result<NaiveDate, DeadlineParseError> {
    let trimmed = input.trim();
    DATE_PREFIX_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .and_then(|date| NaiveDate::parse_from_str(date.as_str(), "%Y-%m-%d").ok())
        .ok_or_else(|| DeadlineParseError {
            input: trimmed.to_string(),
        })
}

/// Signed whole days from `today` to `deadline`, rounded up.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    let diff_ms = deadline.signed_duration_since(today).num_milliseconds();
    let days = diff_ms / MILLIS_PER_DAY;
    if diff_ms % MILLIS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

/// Same as `days_remaining`, measured from a wall-clock instant.
pub fn days_remaining_at(deadline: NaiveDate, now: NaiveDateTime) -> i64 {
    days_remaining(deadline, now.date())
}

/// Parses `deadline` and counts days from `today`.
pub fn days_remaining_from_str(
    deadline: &str,
    today: NaiveDate,
) -> Result<i64, DeadlineParseError> {
    Ok(days_remaining(parse_deadline(deadline)?, today))
}

/// Human label for a countdown; `None` when no deadline is set.
pub fn deadline_message(days_remaining: Option<i64>) -> Option<String> {
    let days = days_remaining?;
    let message = match days {
        n if n < 0 => format!("Overdue by {} days", n.unsigned_abs()),
        0 => "Due today!".to_string(),
        1 => "1 day remaining".to_string(),
        n => format!("{n} days remaining"),
    };
    Some(message)
}

/// Whether a countdown falls within `URGENT_THRESHOLD_DAYS` (overdue
/// included).
pub fn is_urgent(days_remaining: i64) -> bool {
    days_remaining <= URGENT_THRESHOLD_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_remaining_is_signed_day_distance() {
        let deadline = date(2025, 1, 10);
        assert_eq!(days_remaining(deadline, date(2025, 1, 10)), 0);
        assert_eq!(days_remaining(deadline, date(2025, 1, 5)), 5);
        assert_eq!(days_remaining(deadline, date(2025, 1, 15)), -5);
    }

    #[test]
    fn time_of_day_is_ignored() {
        let now = date(2025, 1, 10).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(days_remaining_at(date(2025, 1, 10), now), 0);
        assert_eq!(days_remaining_at(date(2025, 1, 11), now), 1);
    }

    #[test]
    fn parse_accepts_dates_and_datetimes() {
        assert_eq!(parse_deadline("2025-01-10"), Ok(date(2025, 1, 10)));
        assert_eq!(parse_deadline(" 2025-01-10T18:30:00Z "), Ok(date(2025, 1, 10)));
        assert!(parse_deadline("10/01/2025").is_err());
        assert!(parse_deadline("2025-02-30").is_err());
        assert_eq!(
            days_remaining_from_str("2025-01-10", date(2025, 1, 5)),
            Ok(5)
        );
    }

    #[test]
    fn messages_cover_each_band() {
        assert_eq!(deadline_message(None), None);
        assert_eq!(deadline_message(Some(0)).as_deref(), Some("Due today!"));
        assert_eq!(deadline_message(Some(1)).as_deref(), Some("1 day remaining"));
        assert_eq!(deadline_message(Some(7)).as_deref(), Some("7 days remaining"));
        assert_eq!(deadline_message(Some(-2)).as_deref(), Some("Overdue by 2 days"));
    }

    #[test]
    fn urgency_threshold_is_three_days() {
        assert!(is_urgent(3));
        assert!(is_urgent(0));
        assert!(is_urgent(-1));
        assert!(!is_urgent(4));
    }
}
