//! Fall-protection penalty.

/// Multiplier applied to the aggregated score when no harness is worn
pub const HARNESS_PENALTY_MULTIPLIER: f64 = 1.45;

/// Ceiling of a penalised score
pub const PENALTY_CAP: f64 = 1.0;

/// Apply the missing-harness penalty to an aggregated score.
///
/// With a harness the score passes through untouched; without one it is
/// scaled by [`HARNESS_PENALTY_MULTIPLIER`] and capped at [`PENALTY_CAP`].
pub fn apply_harness_penalty(score: f64, harness_equipped: bool) -> f64 {
    if harness_equipped {
        score
    } else {
        (score * HARNESS_PENALTY_MULTIPLIER).min(PENALTY_CAP)
    }
}
