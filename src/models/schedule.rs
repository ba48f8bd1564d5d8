//! Generated schedule model.
//!
//! A [`ScheduleSection`] is the flattened, display-ready view of one chosen
//! section. A [`GeneratedScheduleOption`] is one ranked combination of
//! them, returned to the caller and never modified afterwards.

use serde::{Deserialize, Serialize};

use super::calendar::Meeting;
use super::course::{parse_credits, Course, Section};

/// A chosen section, flattened with its course's display fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSection {
    /// Section identifier.
    pub id: String,
    /// Owning course identifier.
    pub course_id: String,
    pub subject: String,
    pub course_number: String,
    pub title: String,
    pub section_number: String,
    pub crn: String,
    pub instructor: Option<String>,
    pub meeting_days: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    /// Raw credit string copied from the course.
    pub credits: Option<String>,
    /// Open seats at the time of generation.
    pub seats_available: u32,
}

impl ScheduleSection {
    /// Flattens a section and its course.
    pub fn from_section(section: &Section, course: &Course) -> Self {
        Self {
            id: section.id.clone(),
            course_id: course.id.clone(),
            subject: course.subject.clone(),
            course_number: course.course_number.clone(),
            title: course.title.clone(),
            section_number: section.section_number.clone(),
            crn: section.crn.clone(),
            instructor: section.instructor.clone(),
            meeting_days: section.meeting_days.clone(),
            start_time: section.start_time.clone(),
            end_time: section.end_time.clone(),
            location: section.location.clone(),
            credits: course.credits.clone(),
            seats_available: section.seats_available(),
        }
    }

    /// Integer credit value.
    pub fn credit_value(&self) -> u32 {
        parse_credits(self.credits.as_deref())
    }

    /// Display code, e.g. `"COMS 227"`.
    pub fn course_code(&self) -> String {
        format!("{} {}", self.subject, self.course_number)
    }
}

impl Meeting for ScheduleSection {
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

/// Derived figures describing an option's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionMetadata {
    /// Earliest start time string across the week.
    pub earliest_start: Option<String>,
    /// Latest end time string across the week.
    pub latest_end: Option<String>,
    /// Idle minutes between consecutive classes, summed over all weekdays.
    pub total_gap_minutes: u32,
    /// Mean open seats per section, or 0 when not reported.
    pub average_seats_available: f64,
}

/// One ranked, conflict-free schedule option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedScheduleOption {
    /// Display identifier: `"option-1"`, `"option-2"`, ...
    pub id: String,
    pub sections: Vec<ScheduleSection>,
    pub total_credits: u32,
    pub score: f64,
    pub metadata: OptionMetadata,
}

impl GeneratedScheduleOption {
    /// Number of scheduled sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Finds the section chosen for a course.
    pub fn section_for_course(&self, course_id: &str) -> Option<&ScheduleSection> {
        self.sections.iter().find(|s| s.course_id == course_id)
    }

    /// Section identifiers, sorted. Two options with equal keys hold the
    /// same set of sections.
    pub fn section_key(&self) -> Vec<String> {
        section_key(&self.sections)
    }
}

/// Deduplication key: the sorted section ids.
pub fn section_key(sections: &[ScheduleSection]) -> Vec<String> {
    let mut ids: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course::new("c1", "COMS", "227")
            .with_title("Object-oriented Programming")
            .with_credits("3-4")
    }

    #[test]
    fn test_from_section_copies_display_fields() {
        let course = sample_course();
        let section = Section::new("s1", "12345", "A")
            .with_meeting("MWF", "10:00", "10:50")
            .with_instructor("Mitra")
            .with_location("Pearson 1115")
            .with_enrollment(12, 40);

        let ss = ScheduleSection::from_section(&section, &course);
        assert_eq!(ss.id, "s1");
        assert_eq!(ss.course_id, "c1");
        assert_eq!(ss.course_code(), "COMS 227");
        assert_eq!(ss.crn, "12345");
        assert_eq!(ss.instructor.as_deref(), Some("Mitra"));
        assert_eq!(ss.credit_value(), 3);
        assert_eq!(ss.seats_available, 28);
        assert!(ss.meeting_pattern().is_some());
    }

    #[test]
    fn test_section_key_is_order_independent() {
        let course = sample_course();
        let a = ScheduleSection::from_section(&Section::new("b", "2", "2"), &course);
        let b = ScheduleSection::from_section(&Section::new("a", "1", "1"), &course);
        assert_eq!(section_key(&[a.clone(), b.clone()]), vec!["a", "b"]);
        assert_eq!(section_key(&[b, a]), vec!["a", "b"]);
        assert!(section_key(&[]).is_empty());
    }

    #[test]
    fn test_section_key_keeps_ids_with_commas_apart() {
        let course = sample_course();
        let joined = ScheduleSection::from_section(&Section::new("a,b", "1", "1"), &course);
        let a = ScheduleSection::from_section(&Section::new("a", "2", "2"), &course);
        let b = ScheduleSection::from_section(&Section::new("b", "3", "3"), &course);
        assert_ne!(section_key(&[joined]), section_key(&[a, b]));
    }

    #[test]
    fn test_option_lookup() {
        let course = sample_course();
        let option = GeneratedScheduleOption {
            id: "option-1".into(),
            sections: vec![ScheduleSection::from_section(
                &Section::new("s1", "1", "1"),
                &course,
            )],
            total_credits: 3,
            score: 190.0,
            metadata: OptionMetadata::default(),
        };
        assert_eq!(option.section_count(), 1);
        assert!(option.section_for_course("c1").is_some());
        assert!(option.section_for_course("c9").is_none());
        assert_eq!(option.section_key(), vec!["s1"]);
    }

    #[test]
    fn test_option_serializes_camel_case() {
        let option = GeneratedScheduleOption {
            id: "option-1".into(),
            sections: Vec::new(),
            total_credits: 0,
            score: 0.0,
            metadata: OptionMetadata::default(),
        };
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["totalCredits"], 0);
        assert!(json["metadata"]["earliestStart"].is_null());
        assert_eq!(json["metadata"]["totalGapMinutes"], 0);
    }
}
