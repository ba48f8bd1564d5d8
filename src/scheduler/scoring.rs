//! Schedule ranking heuristic.
//!
//! ```text
//! score = per_course * sections
//!       - per_gap_minute * total_gap_minutes
//!       + per_start_time * (start_time_cap - distinct_start_times)
//!       + uniform(0, jitter)
//! ```
//!
//! More courses win first; among equal course counts, fewer idle minutes
//! and fewer distinct start times win. The jitter term only reorders
//! near-ties, so repeated generation presents equally good options in
//! varying order. Past the cap the start-time term goes negative.

use rand::Rng;

use super::metrics::ScheduleMetrics;
use crate::config::ScoreWeights;
use crate::models::ScheduleSection;

/// Scores a combination from precomputed metrics. Higher is better.
pub fn score_with_metrics<R: Rng>(
    section_count: usize,
    metrics: &ScheduleMetrics,
    weights: &ScoreWeights,
    rng: &mut R,
) -> f64 {
    let mut score = weights.per_course * section_count as f64;
    score -= weights.per_gap_minute * metrics.total_gap_minutes as f64;
    score +=
        weights.per_start_time * (weights.start_time_cap - metrics.distinct_start_times as f64);
    if weights.jitter > 0.0 {
        score += rng.random_range(0.0..weights.jitter);
    }
    score
}

/// Scores a combination. Higher is better.
pub fn score_schedule<R: Rng>(
    sections: &[ScheduleSection],
    weights: &ScoreWeights,
    rng: &mut R,
) -> f64 {
    let metrics = ScheduleMetrics::calculate(sections);
    score_with_metrics(sections.len(), &metrics, weights, rng)
}
