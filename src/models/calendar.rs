//! Weekly time model.
//!
//! Defines clock times, half-open time windows, weekly meeting patterns
//! and the quarter-hour cells a student can block out.
//!
//! # Time Model
//! All times are minutes since midnight on a single weekday. A meeting
//! pattern repeats the same window on every day in its weekday set.
//!
//! # Interval semantics
//! Windows are half-open: `[start, end)`. A class ending at 10:00 does not
//! collide with a class starting at 10:00, and a blocked cell at the exact
//! end minute of a class does not touch it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::weekday::{Weekday, WeekdaySet};
use crate::error::TimeParseError;

/// A wall-clock time of day, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a clock time, validating hour and minute ranges.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self(hour as u16 * 60 + minute as u16))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    #[inline]
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }

    /// 12-hour rendering, e.g. `"1:05 PM"`.
    pub fn to_12h(self) -> String {
        let hour = self.hour();
        let period = if hour >= 12 { "PM" } else { "AM" };
        let display_hour = match hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        };
        format!("{display_hour}:{:02} {period}", self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = TimeParseError;

    /// Accepts `HH:MM`, `H:MM`, `HHMM` and `HMM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let malformed = || TimeParseError::MalformedTime(raw.to_string());
        if !raw.is_ascii() {
            return Err(malformed());
        }

        let (h, m) = match raw.split_once(':') {
            Some((h, m)) => (h, m),
            None if raw.len() == 3 || raw.len() == 4 => raw.split_at(raw.len() - 2),
            None => return Err(malformed()),
        };
        if h.is_empty()
            || h.len() > 2
            || m.len() != 2
            || !h.bytes().all(|b| b.is_ascii_digit())
            || !m.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let hour: u8 = h.parse().map_err(|_| malformed())?;
        let minute: u8 = m.parse().map_err(|_| malformed())?;
        ClockTime::new(hour, minute).ok_or_else(|| TimeParseError::OutOfRange(raw.to_string()))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Renders a raw clock string in 12-hour form, or `"TBA"`.
///
/// Unparseable strings are shown unchanged.
pub fn format_time(time: Option<&str>) -> String {
    match time {
        None => "TBA".to_string(),
        Some(raw) => raw
            .parse::<ClockTime>()
            .map(ClockTime::to_12h)
            .unwrap_or_else(|_| raw.to_string()),
    }
}

/// A time interval [start, end) within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a window. Returns `None` if `end <= start`.
    pub fn new(start: ClockTime, end: ClockTime) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    /// Duration in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether a time falls within this window.
    #[inline]
    pub fn contains(&self, time: ClockTime) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A weekly recurring meeting: the same window on each listed day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingPattern {
    pub days: WeekdaySet,
    pub window: TimeWindow,
}

impl MeetingPattern {
    /// Parses raw registrar strings into a meeting pattern.
    pub fn parse(days: &str, start: &str, end: &str) -> Result<Self, TimeParseError> {
        let days = WeekdaySet::parse(days)?;
        let start_time: ClockTime = start.parse()?;
        let end_time: ClockTime = end.parse()?;
        let window = TimeWindow::new(start_time, end_time).ok_or_else(|| {
            TimeParseError::EmptyInterval {
                start: start.to_string(),
                end: end.to_string(),
            }
        })?;
        Ok(Self { days, window })
    }

    /// Whether the two meetings share a weekday and overlapping windows.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.days.intersects(other.days) && self.window.overlaps(&other.window)
    }

    /// Whether a blocked cell falls inside this meeting.
    ///
    /// Only the cell's start minute is tested, against `[start, end)`.
    pub fn covers(&self, cell: &BlockedTimeCell) -> bool {
        if !self.days.contains(cell.day) {
            return false;
        }
        cell.time().is_some_and(|t| self.window.contains(t))
    }
}

/// One quarter-hour a student has marked unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockedTimeCell {
    pub day: Weekday,
    /// Hour of day, 0..=23.
    pub hour: u8,
    /// Minute of hour: 0, 15, 30 or 45.
    pub minute: u8,
}

impl BlockedTimeCell {
    /// Creates a blocked cell.
    pub fn new(day: Weekday, hour: u8, minute: u8) -> Self {
        Self { day, hour, minute }
    }

    /// Start of the cell, or `None` if hour/minute are out of range.
    pub fn time(&self) -> Option<ClockTime> {
        ClockTime::new(self.hour, self.minute)
    }
}

/// Anything with a registrar-style meeting time.
///
/// Input records keep the raw strings they were scraped with; the
/// parsed [`MeetingPattern`] is derived on demand.
pub trait Meeting {
    fn meeting_days(&self) -> Option<&str>;
    fn start_time(&self) -> Option<&str>;
    fn end_time(&self) -> Option<&str>;

    /// Parsed meeting pattern.
    ///
    /// `None` if any field is missing or unparseable. Without a pattern a
    /// record occupies no time: it conflicts with nothing and no blocked
    /// cell touches it.
    fn meeting_pattern(&self) -> Option<MeetingPattern> {
        let days = self.meeting_days()?;
        let start = self.start_time()?;
        let end = self.end_time()?;
        MeetingPattern::parse(days, start, end).ok()
    }

    /// Whether meeting days and a start time are present and parseable.
    ///
    /// The end time is not consulted; a record lacking one can still be
    /// scheduled.
    fn has_fixed_start(&self) -> bool {
        let days = self.meeting_days().map(WeekdaySet::parse);
        let start = self.start_time().map(str::parse::<ClockTime>);
        matches!((days, start), (Some(Ok(_)), Some(Ok(_))))
    }
}
