//! Schedule option generation.
//!
//! # Algorithm
//!
//! 1. Enumerate conflict-free combinations within the expansion budget.
//! 2. Score each combination and sort descending.
//! 3. Walk the sorted list, skipping any combination whose set of section
//!    ids was already emitted, until `max_options` options are collected.
//!
//! An empty result means either the pool was empty or its required
//! courses cannot be scheduled together; it is not an error.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use super::enumerate::enumerate_combinations;
use super::metrics::ScheduleMetrics;
use super::scoring::score_with_metrics;
use crate::config::GeneratorConfig;
use crate::models::{
    section_key, BlockedTimeCell, GeneratedScheduleOption, PoolEntry, ScheduleSection,
};

/// Generates ranked schedule options from a course pool.
///
/// # Example
///
/// ```
/// use course_schedule::models::{Course, PoolEntry, Section};
/// use course_schedule::scheduler::ScheduleGenerator;
///
/// let course = Course::new("c1", "COMS", "227")
///     .with_credits("4")
///     .with_section(
///         Section::new("s1", "10001", "1")
///             .with_meeting("MWF", "10:00", "10:50")
///             .with_enrollment(10, 30),
///     );
/// let pool = vec![PoolEntry::required(course)];
///
/// let options = ScheduleGenerator::new().generate(&pool, &[], None);
/// assert_eq!(options.len(), 1);
/// assert_eq!(options[0].id, "option-1");
/// assert_eq!(options[0].total_credits, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates up to `max_options` options (configured default if `None`),
    /// using the thread-local RNG for tie-breaking.
    pub fn generate(
        &self,
        pool: &[PoolEntry],
        blocked: &[BlockedTimeCell],
        max_options: Option<usize>,
    ) -> Vec<GeneratedScheduleOption> {
        self.generate_with_rng(pool, blocked, max_options, &mut rand::rng())
    }

    /// Generates options, drawing the tie-break term from `rng`.
    pub fn generate_with_rng<R: Rng>(
        &self,
        pool: &[PoolEntry],
        blocked: &[BlockedTimeCell],
        max_options: Option<usize>,
        rng: &mut R,
    ) -> Vec<GeneratedScheduleOption> {
        let max_options = max_options.unwrap_or(self.config.default_max_options);
        if pool.is_empty() || max_options == 0 {
            return Vec::new();
        }

        let enumeration = enumerate_combinations(pool, blocked, self.config.max_combinations);
        if enumeration.required_infeasible {
            debug!(
                pool = pool.len(),
                expansions = enumeration.expansions,
                "required courses cannot be scheduled together"
            );
            return Vec::new();
        }

        let mut scored: Vec<ScoredCombination> = enumeration
            .combinations
            .into_iter()
            .map(|sections| {
                let metrics = ScheduleMetrics::calculate(&sections);
                let score =
                    score_with_metrics(sections.len(), &metrics, &self.config.weights, rng);
                ScoredCombination {
                    sections,
                    metrics,
                    score,
                }
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let found = scored.len();
        let options = self.rank(scored, max_options);

        debug!(
            pool = pool.len(),
            blocked = blocked.len(),
            combinations = found,
            options = options.len(),
            expansions = enumeration.expansions,
            truncated = enumeration.budget_exhausted,
            "generated schedule options"
        );

        options
    }

    /// Emits distinct options from score-sorted combinations.
    fn rank(
        &self,
        scored: Vec<ScoredCombination>,
        max_options: usize,
    ) -> Vec<GeneratedScheduleOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();

        for combo in scored {
            if !seen.insert(section_key(&combo.sections)) {
                continue;
            }

            let total_credits = combo.sections.iter().map(ScheduleSection::credit_value).sum();
            options.push(GeneratedScheduleOption {
                id: format!("option-{}", options.len() + 1),
                metadata: combo.metrics.to_metadata(self.config.report_seat_availability),
                sections: combo.sections,
                total_credits,
                score: combo.score,
            });

            if options.len() >= max_options {
                break;
            }
        }

        options
    }
}

struct ScoredCombination {
    sections: Vec<ScheduleSection>,
    metrics: ScheduleMetrics,
    score: f64,
}

/// Generates ranked schedule options with the default configuration.
///
/// `max_options` defaults to 5.
pub fn generate_schedules(
    pool: &[PoolEntry],
    blocked: &[BlockedTimeCell],
    max_options: Option<usize>,
) -> Vec<GeneratedScheduleOption> {
    ScheduleGenerator::new().generate(pool, blocked, max_options)
}
