//! Course catalog model.
//!
//! A course owns one or more sections; a section is one concrete offering
//! with its own meeting time, instructor and enrollment counts. Records
//! arrive fully resolved from the catalog store and are never mutated here.

use serde::{Deserialize, Serialize};

use super::calendar::Meeting;

/// A catalog course with its offered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Subject code, e.g. `"COMS"`.
    pub subject: String,
    /// Course number within the subject, e.g. `"227"`.
    pub course_number: String,
    pub title: String,
    /// Raw credit string: `"3"`, `"3-4"`, or absent.
    pub credits: Option<String>,
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        course_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            course_number: course_number.into(),
            title: String::new(),
            credits: None,
            sections: Vec::new(),
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the raw credit string.
    pub fn with_credits(mut self, credits: impl Into<String>) -> Self {
        self.credits = Some(credits.into());
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Display code, e.g. `"COMS 227"`.
    pub fn code(&self) -> String {
        format!("{} {}", self.subject, self.course_number)
    }

    /// Integer credit value (see [`parse_credits`]).
    pub fn credit_value(&self) -> u32 {
        parse_credits(self.credits.as_deref())
    }

    /// Sections a generator may pick: not full, with fixed days and start.
    pub fn schedulable_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_schedulable())
    }
}

/// One offering of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Unique section identifier.
    pub id: String,
    /// Course reference number shown by the registrar.
    pub crn: String,
    pub section_number: String,
    pub instructor: Option<String>,
    /// Letters from `MTWRF`, e.g. `"MWF"`.
    pub meeting_days: Option<String>,
    /// 24-hour clock, `"HH:MM"` or `"HHMM"`.
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub enrollment_max: u32,
    pub enrollment_current: u32,
}

impl Section {
    /// Creates a section with no meeting time and no seats.
    pub fn new(
        id: impl Into<String>,
        crn: impl Into<String>,
        section_number: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            crn: crn.into(),
            section_number: section_number.into(),
            instructor: None,
            meeting_days: None,
            start_time: None,
            end_time: None,
            location: None,
            enrollment_max: 0,
            enrollment_current: 0,
        }
    }

    /// Sets the weekly meeting time.
    pub fn with_meeting(
        mut self,
        days: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.meeting_days = Some(days.into());
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    /// Sets current and maximum enrollment.
    pub fn with_enrollment(mut self, current: u32, max: u32) -> Self {
        self.enrollment_current = current;
        self.enrollment_max = max;
        self
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Whether enrollment has reached capacity.
    pub fn is_full(&self) -> bool {
        self.enrollment_current >= self.enrollment_max
    }

    /// Open seats remaining (never negative).
    pub fn seats_available(&self) -> u32 {
        self.enrollment_max.saturating_sub(self.enrollment_current)
    }

    /// Not full, with meeting days and a start time.
    ///
    /// A missing end time does not disqualify the section; it is then
    /// treated as occupying no time.
    pub fn is_schedulable(&self) -> bool {
        !self.is_full() && self.has_fixed_start()
    }
}

impl Meeting for Section {
    fn meeting_days(&self) -> Option<&str> {
        self.meeting_days.as_deref()
    }

    fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }

    fn end_time(&self) -> Option<&str> {
        self.end_time.as_deref()
    }
}

/// A course placed in the generation pool.
///
/// Required courses appear in every generated option; optional ones are
/// added when they fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    pub course: Course,
    pub is_required: bool,
}

impl PoolEntry {
    pub fn required(course: Course) -> Self {
        Self {
            course,
            is_required: true,
        }
    }

    pub fn optional(course: Course) -> Self {
        Self {
            course,
            is_required: false,
        }
    }
}

/// Parses a credit string to an integer.
///
/// Takes the first run of digits, so a range such as `"3-4"` yields 3.
/// Absent or digit-free strings yield 0.
pub fn parse_credits(credits: Option<&str>) -> u32 {
    let Some(raw) = credits else {
        return 0;
    };
    raw.split(|c: char| !c.is_ascii_digit())
        .find(|run| !run.is_empty())
        .and_then(|run| run.parse().ok())
        .unwrap_or(0)
}
