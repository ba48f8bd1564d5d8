//! Budgeted combination enumeration.
//!
//! # Algorithm
//!
//! Backtracking over the pool, one course per level, in two phases:
//!
//! 1. Pick one section for every required course. If no conflict-free
//!    pick exists, stop: optional courses are never a fallback.
//! 2. From each phase-1 result (or from an empty schedule when nothing is
//!    required), extend with optional courses. Each optional course either
//!    contributes one of its sections or is omitted.
//!
//! Sections that are full, lack meeting days or a start time, or meet
//! during a blocked cell never enter the search tree. A section with days
//! and a start but no usable end time is kept and occupies no time. A
//! section that overlaps one already chosen is skipped.
//!
//! # Budget
//!
//! One [`ExpansionBudget`] is shared by both phases. Every descent spends
//! one unit. Once it runs out no new branch is opened; a partial schedule
//! whose outstanding courses are all optional is still complete (they are
//! simply omitted) and is kept, while one still missing a required course
//! is dropped.
//!
//! # Complexity
//! Bounded by the budget: O(budget * depth) conflict tests.

use tracing::{debug, trace};

use super::conflict::{conflicts_with_blocked, overlaps_any};
use crate::models::{BlockedTimeCell, Meeting, MeetingPattern, PoolEntry, ScheduleSection};

/// Counter of recursive expansions for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionBudget {
    limit: usize,
    used: usize,
}

impl ExpansionBudget {
    /// Creates a budget of `limit` expansions.
    pub fn new(limit: usize) -> Self {
        Self { limit, used: 0 }
    }

    /// Spends one unit. Returns `false`, spending nothing, when exhausted.
    pub fn try_spend(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.used += 1;
        true
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.used >= self.limit
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.used)
    }
}

/// Outcome of an enumeration run.
#[derive(Debug, Clone, Default)]
pub struct Enumeration {
    /// Complete, conflict-free combinations in discovery order.
    pub combinations: Vec<Vec<ScheduleSection>>,
    /// Required courses exist but cannot be scheduled together.
    pub required_infeasible: bool,
    /// The budget ran out before the search finished.
    pub budget_exhausted: bool,
    /// Expansions spent.
    pub expansions: usize,
}

/// A section that survived pre-filtering, with its parsed meeting.
///
/// `pattern` is `None` for a section with days and a start but no usable
/// end time; it occupies no time.
#[derive(Debug)]
struct Candidate {
    section: ScheduleSection,
    pattern: Option<MeetingPattern>,
}

/// One pool entry and its usable sections.
#[derive(Debug)]
struct CourseCandidates {
    required: bool,
    candidates: Vec<Candidate>,
}

impl CourseCandidates {
    fn prepare(entry: &PoolEntry, blocked: &[BlockedTimeCell]) -> Self {
        let course = &entry.course;
        let candidates: Vec<Candidate> = course
            .sections
            .iter()
            .filter(|s| s.is_schedulable())
            .filter(|s| !conflicts_with_blocked(*s, blocked))
            .map(|s| Candidate {
                section: ScheduleSection::from_section(s, course),
                pattern: s.meeting_pattern(),
            })
            .collect();

        trace!(
            course = %course.code(),
            required = entry.is_required,
            sections = course.sections.len(),
            usable = candidates.len(),
            "prepared course candidates"
        );

        Self {
            required: entry.is_required,
            candidates,
        }
    }
}

type Partial<'a> = Vec<&'a Candidate>;

/// Enumerates conflict-free section combinations for a pool.
///
/// Every returned combination holds exactly one section per required
/// course, at most one per optional course, and at least one section.
pub fn enumerate_combinations(
    pool: &[PoolEntry],
    blocked: &[BlockedTimeCell],
    max_expansions: usize,
) -> Enumeration {
    if pool.is_empty() {
        return Enumeration::default();
    }

    let (required, optional): (Vec<_>, Vec<_>) = pool
        .iter()
        .map(|entry| CourseCandidates::prepare(entry, blocked))
        .partition(|c| c.required);

    let mut budget = ExpansionBudget::new(max_expansions);

    let bases: Vec<Partial<'_>> = if required.is_empty() {
        vec![Vec::new()]
    } else {
        let mut found = Vec::new();
        extend(&required, 0, &mut Vec::new(), &mut found, &mut budget);
        debug!(
            required = required.len(),
            combinations = found.len(),
            expansions = budget.used(),
            "required phase finished"
        );
        if found.is_empty() {
            return Enumeration {
                combinations: Vec::new(),
                required_infeasible: true,
                budget_exhausted: budget.is_exhausted(),
                expansions: budget.used(),
            };
        }
        found
    };

    let mut complete: Vec<Partial<'_>> = Vec::new();
    for mut base in bases {
        extend(&optional, 0, &mut base, &mut complete, &mut budget);
    }
    complete.retain(|c| !c.is_empty());

    if budget.is_exhausted() {
        debug!(
            limit = max_expansions,
            combinations = complete.len(),
            "expansion budget exhausted, search truncated"
        );
    }

    Enumeration {
        combinations: complete
            .into_iter()
            .map(|partial| partial.into_iter().map(|c| c.section.clone()).collect())
            .collect(),
        required_infeasible: false,
        budget_exhausted: budget.is_exhausted(),
        expansions: budget.used(),
    }
}

/// Backtracks over `courses[index..]`, appending finished combinations.
fn extend<'a>(
    courses: &'a [CourseCandidates],
    index: usize,
    chosen: &mut Partial<'a>,
    out: &mut Vec<Partial<'a>>,
    budget: &mut ExpansionBudget,
) {
    let remaining = &courses[index..];

    if budget.is_exhausted() {
        if remaining.iter().all(|c| !c.required) {
            out.push(chosen.clone());
        }
        return;
    }

    let Some(course) = remaining.first() else {
        out.push(chosen.clone());
        return;
    };

    for candidate in &course.candidates {
        if let Some(pattern) = &candidate.pattern {
            if overlaps_any(pattern, chosen.iter().filter_map(|c| c.pattern.as_ref())) {
                continue;
            }
        }
        if !budget.try_spend() {
            break;
        }
        chosen.push(candidate);
        extend(courses, index + 1, chosen, out, budget);
        chosen.pop();
    }

    if !course.required {
        // Omit this course. With the budget spent the callee closes the
        // branch as-is.
        budget.try_spend();
        extend(courses, index + 1, chosen, out, budget);
    }
}
