//! Generator configuration.
//!
//! Defaults reproduce the stock ranking: 100 points per scheduled course,
//! half a point off per idle minute, a bonus for reusing start times and up
//! to 5 points of random jitter. Every field may be omitted when the config
//! is deserialized.

use serde::{Deserialize, Serialize};

/// Recursive expansions allowed per generation call.
pub const MAX_SCHEDULE_COMBINATIONS: usize = 1000;

/// Options returned when the caller does not ask for a count.
pub const DEFAULT_MAX_SCHEDULE_OPTIONS: usize = 5;

/// Weights of the ranking formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreWeights {
    /// Points per scheduled section.
    pub per_course: f64,
    /// Points lost per idle minute between classes.
    pub per_gap_minute: f64,
    /// Distinct start times below this count earn a bonus; above it, a penalty.
    pub start_time_cap: f64,
    /// Points per distinct start time under the cap.
    pub per_start_time: f64,
    /// Upper bound of the uniform tie-break term. 0 disables it.
    pub jitter: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            per_course: 100.0,
            per_gap_minute: 0.5,
            start_time_cap: 10.0,
            per_start_time: 10.0,
            jitter: 5.0,
        }
    }
}

impl ScoreWeights {
    /// Same weights without the random term.
    pub fn deterministic() -> Self {
        Self {
            jitter: 0.0,
            ..Self::default()
        }
    }
}

/// Schedule generator configuration.
///
/// # Example
///
/// ```
/// use course_schedule::config::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_max_combinations(200);
/// assert_eq!(config.max_combinations, 200);
/// assert_eq!(config.default_max_options, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Expansion budget shared by both search phases.
    pub max_combinations: usize,
    /// Option count used when the caller passes none.
    pub default_max_options: usize,
    pub weights: ScoreWeights,
    /// Fill `averageSeatsAvailable` from the seat snapshot in each section.
    pub report_seat_availability: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_combinations: MAX_SCHEDULE_COMBINATIONS,
            default_max_options: DEFAULT_MAX_SCHEDULE_OPTIONS,
            weights: ScoreWeights::default(),
            report_seat_availability: false,
        }
    }
}

impl GeneratorConfig {
    /// Sets the expansion budget.
    pub fn with_max_combinations(mut self, max_combinations: usize) -> Self {
        self.max_combinations = max_combinations;
        self
    }

    /// Sets the default option count.
    pub fn with_default_max_options(mut self, max_options: usize) -> Self {
        self.default_max_options = max_options;
        self
    }

    /// Sets the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Enables the seat-availability average in option metadata.
    pub fn with_seat_availability(mut self, enabled: bool) -> Self {
        self.report_seat_availability = enabled;
        self
    }
}
