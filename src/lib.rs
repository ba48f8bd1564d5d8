//! Course schedule generation for a university catalog.
//!
//! Given a pool of courses (each with several sections), a flag per course
//! saying whether it is required, and the quarter-hours a student has
//! blocked out, produces a ranked list of distinct, conflict-free weekly
//! schedules. Everything runs in-process on plain data; fetching courses
//! and persisting the chosen schedule belong to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Section`, `PoolEntry`,
//!   `BlockedTimeCell`, `ScheduleSection`, `GeneratedScheduleOption`, and
//!   the weekly time model (`Weekday`, `ClockTime`, `MeetingPattern`)
//! - **`scheduler`**: Conflict checks, gap metrics, scoring, budgeted
//!   enumeration and ranking
//! - **`validation`**: Per-course feasibility pre-check
//! - **`config`**: Search budget, option count and score weights
//!
//! # Entry points
//!
//! - [`generate_schedules`]
//! - [`can_generate_schedules`]
//!
//! # Example
//!
//! ```
//! use course_schedule::models::{BlockedTimeCell, Course, PoolEntry, Section, Weekday};
//! use course_schedule::{can_generate_schedules, generate_schedules};
//!
//! let coms = Course::new("c1", "COMS", "227")
//!     .with_credits("4")
//!     .with_section(Section::new("s1", "1", "1").with_meeting("MW", "10:00", "10:50").with_enrollment(20, 20))
//!     .with_section(Section::new("s2", "2", "2").with_meeting("TR", "09:00", "09:50").with_enrollment(5, 20));
//! let pool = vec![PoolEntry::required(coms)];
//!
//! let options = generate_schedules(&pool, &[], None);
//! assert_eq!(options.len(), 1);
//! assert_eq!(options[0].sections[0].id, "s2");
//!
//! let blocked = [BlockedTimeCell::new(Weekday::Tuesday, 9, 0)];
//! assert!(!can_generate_schedules(&pool, &blocked).valid);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::TimeParseError;
pub use scheduler::{generate_schedules, ScheduleGenerator};
pub use validation::{
    can_generate_schedules, check_feasibility, FeasibilityError, FeasibilityReport,
};
