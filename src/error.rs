//! Error types.
//!
//! Expected infeasibility (no conflict-free combination, exhausted search
//! budget) is not an error; generation reports it as an empty result.
//! These types cover malformed input text and the feasibility pre-check.

use thiserror::Error;

/// Failure to parse a meeting-day or clock-time string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// The meeting-days string was empty.
    #[error("meeting days string is empty")]
    EmptyDays,

    /// A character outside the M/T/W/R/F alphabet.
    #[error("unknown weekday code '{0}'")]
    UnknownWeekday(char),

    /// The clock string is not `HH:MM`, `H:MM`, `HHMM` or `HMM`.
    #[error("malformed clock time '{0}'")]
    MalformedTime(String),

    /// Hour or minute outside 0..=23 / 0..=59.
    #[error("clock time '{0}' is out of range")]
    OutOfRange(String),

    /// The meeting ends at or before it starts.
    #[error("meeting ends at {end} but starts at {start}")]
    EmptyInterval { start: String, end: String },
}
