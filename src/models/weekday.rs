//! Weekday model.
//!
//! Registrar data encodes meeting days as single letters: `M`, `T`, `W`,
//! `R` (Thursday) and `F`. Weekend letters never appear in class meeting
//! patterns and are rejected rather than guessed at.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TimeParseError;

/// A teaching weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "M")]
    Monday,
    #[serde(rename = "T")]
    Tuesday,
    #[serde(rename = "W")]
    Wednesday,
    #[serde(rename = "R")]
    Thursday,
    #[serde(rename = "F")]
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Parses a single-letter registrar code. Codes are uppercase only.
    pub fn from_code(code: char) -> Result<Self, TimeParseError> {
        match code {
            'M' => Ok(Weekday::Monday),
            'T' => Ok(Weekday::Tuesday),
            'W' => Ok(Weekday::Wednesday),
            'R' => Ok(Weekday::Thursday),
            'F' => Ok(Weekday::Friday),
            other => Err(TimeParseError::UnknownWeekday(other)),
        }
    }

    /// Single-letter registrar code.
    pub fn code(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
        }
    }

    /// Three-letter display name.
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A set of weekdays, stored as a 5-bit mask.
///
/// Serialized as its letter string in calendar order, e.g. `"MWF"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Parses a meeting-days string such as `"MWF"` or `"TR"`.
    ///
    /// Letter order is irrelevant and repeats collapse. Whitespace is
    /// ignored. An empty string or any letter outside `MTWRF` is an error.
    pub fn parse(days: &str) -> Result<Self, TimeParseError> {
        let mut set = WeekdaySet::EMPTY;
        for c in days.chars().filter(|c| !c.is_whitespace()) {
            set = set.with(Weekday::from_code(c)?);
        }
        if set.is_empty() {
            return Err(TimeParseError::EmptyDays);
        }
        Ok(set)
    }

    /// Returns a copy with `day` added.
    pub fn with(self, day: Weekday) -> Self {
        Self(self.0 | day.bit())
    }

    /// Whether `day` is in the set.
    #[inline]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Set intersection.
    #[inline]
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Whether the two sets share at least one day.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        !self.intersection(other).is_empty()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Days in calendar order.
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        Weekday::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Human-readable list, e.g. `"Mon, Wed, Fri"`.
    pub fn display_names(self) -> String {
        self.iter()
            .map(Weekday::short_name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        iter.into_iter().fold(WeekdaySet::EMPTY, WeekdaySet::with)
    }
}

impl fmt::Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.code())?;
        }
        Ok(())
    }
}

impl From<WeekdaySet> for String {
    fn from(set: WeekdaySet) -> Self {
        set.to_string()
    }
}

impl TryFrom<String> for WeekdaySet {
    type Error = TimeParseError;

    fn try_from(days: String) -> Result<Self, Self::Error> {
        WeekdaySet::parse(&days)
    }
}

/// Renders a raw meeting-days string for display, or `"TBA"`.
pub fn format_days(days: Option<&str>) -> String {
    match days.map(WeekdaySet::parse) {
        Some(Ok(set)) => set.display_names(),
        Some(Err(_)) => days.unwrap_or_default().to_string(),
        None => "TBA".to_string(),
    }
}
