//! Course scheduling domain models.
//!
//! Provides the data types exchanged with the catalog layer (courses,
//! sections, pool entries, blocked cells) and the generator's output
//! (schedule sections and ranked options), plus the weekly time model the
//! conflict checks are built on.
//!
//! # Domain Mappings
//!
//! | course-schedule | Registrar | Student UI |
//! |-----------------|-----------|------------|
//! | Course | Catalog entry | Pool card |
//! | Section | CRN offering | Calendar block |
//! | BlockedTimeCell | - | Greyed-out quarter hour |
//! | GeneratedScheduleOption | - | "Option 1", "Option 2", ... |

mod calendar;
mod course;
mod schedule;
mod weekday;

pub use calendar::{format_time, BlockedTimeCell, ClockTime, Meeting, MeetingPattern, TimeWindow};
pub use course::{parse_credits, Course, PoolEntry, Section};
pub use schedule::{section_key, GeneratedScheduleOption, OptionMetadata, ScheduleSection};
pub use weekday::{format_days, Weekday, WeekdaySet};
