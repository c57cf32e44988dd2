//! Time-of-day handling for daily recurring services.
//!
//! Catalog times are "HH:MM:SS" strings with no date. A ticket runs every
//! day, so all arithmetic here is on a 24-hour clock: the gap from one time
//! to another always moves forward and wraps past midnight.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day, with second precision.
///
/// # Examples
///
/// ```
/// use tour_planner::domain::TimeOfDay;
///
/// let time = TimeOfDay::parse_hhmmss("14:30:05").unwrap();
/// assert_eq!(time.to_string(), "14:30:05");
///
/// assert!(TimeOfDay::parse_hhmmss("14:30").is_err());
/// assert!(TimeOfDay::parse_hhmmss("24:00:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Create a time of day from hours, minutes and seconds.
    ///
    /// Returns `None` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Parse a time from "HH:MM:SS" format.
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Self::from_hms(hour, minute, second).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the forward gap from this time to the next occurrence of `later`.
    ///
    /// If `later` is earlier in the day than `self`, it is pushed forward by
    /// 24 hours, so the result always lies in `[0, 24h)`. Equal times give zero.
    ///
    /// This is both the ride duration of a ticket (departure to arrival) and
    /// the wait for a daily departure (arrival clock to departure).
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Duration;
    /// use tour_planner::domain::TimeOfDay;
    ///
    /// let ten = TimeOfDay::parse_hhmmss("10:00:00").unwrap();
    /// let eight = TimeOfDay::parse_hhmmss("08:00:00").unwrap();
    ///
    /// // Tomorrow's 08:00 departure
    /// assert_eq!(ten.until(eight), Duration::hours(22));
    /// assert_eq!(eight.until(ten), Duration::hours(2));
    /// assert_eq!(ten.until(ten), Duration::zero());
    /// ```
    pub fn until(&self, later: TimeOfDay) -> Duration {
        let gap = later.0.signed_duration_since(self.0);
        if gap < Duration::zero() {
            gap + Duration::days(1)
        } else {
            gap
        }
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({})", self)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

/// Format a duration compactly, e.g. "23h0m0s", "45m10s" or "0s".
///
/// Hours are not wrapped at 24, so itinerary totals spanning several days
/// read as e.g. "50h30m0s".
pub fn format_span(span: Duration) -> String {
    let total = span.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if hours > 0 {
        format!("{sign}{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{sign}{minutes}m{seconds}s")
    } else {
        format!("{sign}{seconds}s")
    }
}
