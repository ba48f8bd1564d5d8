//! Schedule compactness metrics.
//!
//! Computes the figures used for ranking and display from a finished
//! combination of sections.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total gap | Sum over weekdays of idle minutes between consecutive classes |
//! | Earliest start | Earliest start time across the week |
//! | Latest end | Latest end time across the week |
//! | Distinct starts | Number of different start times used |
//! | Avg seats | Mean open seats per section (opt-in) |

use std::collections::HashSet;

use crate::models::{ClockTime, Meeting, OptionMetadata, ScheduleSection, Weekday};

/// Compactness figures for one combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleMetrics {
    /// Idle minutes between classes, summed over all weekdays.
    pub total_gap_minutes: u32,
    /// Start time string of the earliest-starting section.
    pub earliest_start: Option<String>,
    /// End time string of the latest-ending section.
    pub latest_end: Option<String>,
    /// Number of distinct start times.
    pub distinct_start_times: usize,
    /// Mean open seats per section.
    pub average_seats_available: f64,
}

impl ScheduleMetrics {
    /// Computes metrics for a combination.
    ///
    /// Start figures count every section with days and a start time. Gaps
    /// and the latest end need a full meeting window.
    pub fn calculate(sections: &[ScheduleSection]) -> Self {
        let starts: Vec<(&ScheduleSection, ClockTime)> = sections
            .iter()
            .filter(|s| s.has_fixed_start())
            .filter_map(|s| Some((s, s.start_time.as_deref()?.parse::<ClockTime>().ok()?)))
            .collect();

        let earliest_start = starts
            .iter()
            .min_by_key(|(_, start)| *start)
            .and_then(|(s, _)| s.start_time.clone());
        let latest_end = sections
            .iter()
            .filter_map(|s| s.meeting_pattern().map(|p| (s, p.window.end)))
            .max_by_key(|(_, end)| *end)
            .and_then(|(s, _)| s.end_time.clone());

        let distinct_start_times = starts
            .iter()
            .map(|(_, start)| *start)
            .collect::<HashSet<ClockTime>>()
            .len();

        let average_seats_available = if sections.is_empty() {
            0.0
        } else {
            let seats: u64 = sections.iter().map(|s| s.seats_available as u64).sum();
            seats as f64 / sections.len() as f64
        };

        Self {
            total_gap_minutes: total_gap_minutes(sections),
            earliest_start,
            latest_end,
            distinct_start_times,
            average_seats_available,
        }
    }

    /// Converts to option metadata.
    ///
    /// The seat average is reported only when `include_seats` is set.
    pub fn to_metadata(&self, include_seats: bool) -> OptionMetadata {
        OptionMetadata {
            earliest_start: self.earliest_start.clone(),
            latest_end: self.latest_end.clone(),
            total_gap_minutes: self.total_gap_minutes,
            average_seats_available: if include_seats {
                self.average_seats_available
            } else {
                0.0
            },
        }
    }
}

/// Idle minutes between consecutive classes, summed over all weekdays.
///
/// Classes on each day are ordered by start time. When a class starts
/// before the previous one ends, the difference counts as zero.
pub fn total_gap_minutes(sections: &[ScheduleSection]) -> u32 {
    let patterns: Vec<_> = sections.iter().filter_map(Meeting::meeting_pattern).collect();
    let mut total = 0u32;

    for day in Weekday::ALL {
        let mut windows: Vec<_> = patterns
            .iter()
            .filter(|p| p.days.contains(day))
            .map(|p| p.window)
            .collect();
        windows.sort_by_key(|w| w.start);

        for pair in windows.windows(2) {
            let gap = pair[1].start.minutes().saturating_sub(pair[0].end.minutes());
            total += gap as u32;
        }
    }

    total
}
