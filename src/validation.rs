//! Feasibility pre-check for schedule generation.
//!
//! A fast, per-course check run before enumeration so the UI can explain
//! early why nothing will be generated. For every required course:
//! - at least one section must be open, with meeting days and a start time
//! - at least one such section must avoid every blocked cell
//!
//! Optional courses are not checked. Passing is necessary but not
//! sufficient: two required courses may each be schedulable alone yet
//! collide with each other, which only enumeration detects.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{BlockedTimeCell, Course, PoolEntry};
use crate::scheduler::conflicts_with_blocked;

/// Why a required course makes generation hopeless.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeasibilityError {
    /// Every section is full or lacks meeting days or a start time.
    #[error("{course} has no available sections")]
    NoAvailableSections { course: String },

    /// Every available section meets during a blocked cell.
    #[error("All sections of {course} conflict with your blocked times")]
    AllSectionsBlocked { course: String },
}

impl FeasibilityError {
    /// Display code of the offending course.
    pub fn course(&self) -> &str {
        match self {
            FeasibilityError::NoAvailableSections { course }
            | FeasibilityError::AllSectionsBlocked { course } => course,
        }
    }
}

/// Result of the pre-check in the shape the UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<(), FeasibilityError>> for FeasibilityReport {
    fn from(result: Result<(), FeasibilityError>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                error: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Checks required courses in pool order, stopping at the first failure.
pub fn check_feasibility(
    pool: &[PoolEntry],
    blocked: &[BlockedTimeCell],
) -> Result<(), FeasibilityError> {
    pool.iter()
        .filter(|entry| entry.is_required)
        .try_for_each(|entry| check_course(&entry.course, blocked))
}

/// Pre-check in report form.
pub fn can_generate_schedules(
    pool: &[PoolEntry],
    blocked: &[BlockedTimeCell],
) -> FeasibilityReport {
    check_feasibility(pool, blocked).into()
}

fn check_course(course: &Course, blocked: &[BlockedTimeCell]) -> Result<(), FeasibilityError> {
    let mut available = course.schedulable_sections().peekable();
    if available.peek().is_none() {
        return Err(FeasibilityError::NoAvailableSections {
            course: course.code(),
        });
    }

    if available.all(|s| conflicts_with_blocked(s, blocked)) {
        return Err(FeasibilityError::AllSectionsBlocked {
            course: course.code(),
        });
    }

    Ok(())
}
