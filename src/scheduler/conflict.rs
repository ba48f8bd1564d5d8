//! Time-conflict checks.
//!
//! Two sections conflict iff they share a weekday and their `[start, end)`
//! windows overlap. A section with no fixed meeting time conflicts with
//! nothing. Blocked cells are tested by their start minute only.

use std::borrow::Borrow;

use crate::models::{BlockedTimeCell, Meeting, MeetingPattern};

/// Whether two meetings overlap on at least one shared weekday.
///
/// Symmetric. Returns `false` if either side lacks days or times.
pub fn has_time_conflict<A, B>(a: &A, b: &B) -> bool
where
    A: Meeting + ?Sized,
    B: Meeting + ?Sized,
{
    match (a.meeting_pattern(), b.meeting_pattern()) {
        (Some(pa), Some(pb)) => pa.overlaps(&pb),
        _ => false,
    }
}

/// Whether `candidate` conflicts with any already-chosen meeting.
pub fn conflicts_with_any<C, S>(candidate: &C, chosen: &[S]) -> bool
where
    C: Meeting + ?Sized,
    S: Meeting,
{
    let Some(pattern) = candidate.meeting_pattern() else {
        return false;
    };
    overlaps_any(&pattern, chosen.iter().filter_map(Meeting::meeting_pattern))
}

/// Whether `pattern` overlaps any of `others`.
pub fn overlaps_any<I>(pattern: &MeetingPattern, others: I) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<MeetingPattern>,
{
    others.into_iter().any(|other| pattern.overlaps(other.borrow()))
}

/// Whether `candidate` meets during any blocked cell.
///
/// A cell conflicts when its weekday is a meeting day and its start
/// minute lies in `[start, end)` of the meeting.
pub fn conflicts_with_blocked<C>(candidate: &C, blocked: &[BlockedTimeCell]) -> bool
where
    C: Meeting + ?Sized,
{
    if blocked.is_empty() {
        return false;
    }
    let Some(pattern) = candidate.meeting_pattern() else {
        return false;
    };
    blocked.iter().any(|cell| pattern.covers(cell))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, Weekday};

    fn section(id: &str, days: &str, start: &str, end: &str) -> Section {
        Section::new(id, id, "1")
            .with_meeting(days, start, end)
            .with_enrollment(0, 30)
    }

    #[test]
    fn test_touching_endpoints_do_not_conflict() {
        let a = section("a", "MW", "09:00", "10:00");
        let b = section("b", "MW", "10:00", "10:50");
        assert!(!has_time_conflict(&a, &b));
        assert!(!has_time_conflict(&b, &a));
    }

    #[test]
    fn test_one_minute_overlap_conflicts() {
        let a = section("a", "MW", "09:00", "10:01");
        let b = section("b", "W", "10:00", "10:50");
        assert!(has_time_conflict(&a, &b));
        assert!(has_time_conflict(&b, &a));
    }

    #[test]
    fn test_different_days_never_conflict() {
        let a = section("a", "MWF", "10:00", "10:50");
        let b = section("b", "TR", "10:00", "11:15");
        assert!(!has_time_conflict(&a, &b));
    }

    #[test]
    fn test_colonless_times_compare_like_colon_times() {
        let a = section("a", "M", "1300", "1350");
        let b = section("b", "M", "13:30", "14:20");
        assert!(has_time_conflict(&a, &b));
    }

    #[test]
    fn test_missing_times_never_conflict() {
        let arranged = Section::new("x", "x", "1");
        let a = section("a", "MTWRF", "00:00", "23:59");
        assert!(!has_time_conflict(&arranged, &a));
        assert!(!conflicts_with_any(&arranged, &[a.clone()]));
        assert!(!conflicts_with_blocked(
            &arranged,
            &[BlockedTimeCell::new(Weekday::Monday, 9, 0)]
        ));
    }

    #[test]
    fn test_conflicts_with_any() {
        let chosen = vec![
            section("a", "MW", "08:00", "08:50"),
            section("b", "TR", "11:00", "12:15"),
        ];
        assert!(conflicts_with_any(&section("c", "R", "12:00", "12:50"), &chosen));
        assert!(!conflicts_with_any(&section("d", "F", "12:00", "12:50"), &chosen));
        let none: [Section; 0] = [];
        assert!(!conflicts_with_any(&section("e", "M", "08:00", "09:00"), &none));
    }

    #[test]
    fn test_blocked_cell_inside_meeting() {
        let s = section("a", "TR", "09:00", "09:50");
        assert!(conflicts_with_blocked(
            &s,
            &[BlockedTimeCell::new(Weekday::Tuesday, 9, 30)]
        ));
    }

    #[test]
    fn test_blocked_cell_at_end_minute_is_free() {
        let s = section("a", "M", "09:00", "09:45");
        assert!(!conflicts_with_blocked(
            &s,
            &[BlockedTimeCell::new(Weekday::Monday, 9, 45)]
        ));
    }

    #[test]
    fn test_blocked_cell_on_other_day_is_ignored() {
        let s = section("a", "MW", "09:00", "09:50");
        assert!(!conflicts_with_blocked(
            &s,
            &[BlockedTimeCell::new(Weekday::Friday, 9, 0)]
        ));
    }

    #[test]
    fn test_cell_before_start_does_not_reach_into_class() {
        // The 8:45 cell covers 8:45-9:00 and ends as class begins.
        let s = section("a", "M", "09:00", "09:50");
        assert!(!conflicts_with_blocked(
            &s,
            &[BlockedTimeCell::new(Weekday::Monday, 8, 45)]
        ));
    }
}
