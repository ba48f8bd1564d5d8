//! Automatic schedule generation.
//!
//! Turns a pool of courses and a set of blocked quarter-hours into a short,
//! ranked list of conflict-free section combinations.
//!
//! # Algorithm
//!
//! Budgeted backtracking (`enumerate`) finds conflict-free combinations,
//! required courses first. Each combination is measured (`metrics`),
//! scored by a greedy compactness heuristic with a small random tie-break
//! (`scoring`), then sorted and deduplicated by section set (`generator`).
//! The result is a heuristic ranking, not a proven optimum.
//!
//! # Components
//!
//! - [`conflict`]: section/section and section/blocked-cell overlap tests
//! - [`metrics`]: idle-minute gaps, earliest start, latest end
//! - [`scoring`]: the ranking formula
//! - [`enumerate`]: the two-phase search and its expansion budget
//! - [`generator`]: ranking, deduplication and the entry point

pub mod conflict;
pub mod enumerate;
pub mod generator;
pub mod metrics;
pub mod scoring;

pub use conflict::{conflicts_with_any, conflicts_with_blocked, has_time_conflict};
pub use enumerate::{enumerate_combinations, Enumeration, ExpansionBudget};
pub use generator::{generate_schedules, ScheduleGenerator};
pub use metrics::{total_gap_minutes, ScheduleMetrics};
pub use scoring::score_schedule;
