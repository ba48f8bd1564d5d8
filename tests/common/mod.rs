#![allow(dead_code)]

use course_schedule::models::{Course, Section};

/// Installs a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("course_schedule=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn section(id: &str, days: &str, start: &str, end: &str, current: u32, max: u32) -> Section {
    Section::new(id, format!("crn-{id}"), id)
        .with_meeting(days, start, end)
        .with_enrollment(current, max)
}

pub fn course(id: &str, subject: &str, number: &str, credits: &str, sections: Vec<Section>) -> Course {
    sections.into_iter().fold(
        Course::new(id, subject, number)
            .with_title(format!("{subject} {number}"))
            .with_credits(credits),
        Course::with_section,
    )
}
