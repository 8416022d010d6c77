//! Recall Scoring
//!
//! Compares a recall attempt against the current hidden truth, classifies
//! severity and direction, awards points, and applies the stateful
//! adjustment-direction rule: a previous attempt on the same item and side
//! that was too high demands a strictly lower input this time (and vice
//! versa); a wrong or missing correction costs a penalty that grows with
//! the distance moved.
//!
//! `score` is pure. Finding "the previous attempt for the same item and
//! side" is the caller's job (most recent matching record in the
//! append-only history).

use rayon::prelude::*;

use crate::types::{
    AdjustDirection, AttemptScore, Direction, PreviousAttempt, ScoreInput, Severity,
    BASE_ADJUST_PENALTY, GRID_STEP, MAX_ADJUST_PENALTY,
};

/// Score one recall attempt against the hidden truth.
pub fn score(attempt_input: i32, truth: i32, previous: Option<PreviousAttempt>) -> AttemptScore {
    let delta = attempt_input - truth;
    let abs_error = delta.abs();

    let severity = Severity::from_abs_error(abs_error);
    let label = if abs_error == 0 {
        Direction::Perfect
    } else if delta < 0 {
        Direction::Early
    } else {
        Direction::Late
    };

    let base_points = (100 - abs_error).max(0);

    let (adjust_required, required_direction, adjust_correct, penalty) = match previous {
        Some(prev) if prev.delta != 0 => {
            let direction = if prev.delta > 0 {
                AdjustDirection::Lower
            } else {
                AdjustDirection::Higher
            };
            let met = match direction {
                AdjustDirection::Lower => attempt_input < prev.input,
                AdjustDirection::Higher => attempt_input > prev.input,
            };
            let penalty = if met {
                0
            } else {
                let moved = (attempt_input - prev.input).abs();
                // round(moved / 5) with integer arithmetic
                let scaled = (moved + GRID_STEP / 2) / GRID_STEP;
                (BASE_ADJUST_PENALTY + scaled).min(MAX_ADJUST_PENALTY)
            };
            (true, Some(direction), Some(met), penalty)
        }
        _ => (false, None, None, 0),
    };

    let points = (base_points - penalty).max(0);

    AttemptScore {
        delta,
        abs_error,
        severity,
        label,
        base_points,
        penalty,
        points,
        adjust_required,
        required_direction,
        adjust_correct,
    }
}

/// Score a batch of attempts in parallel.
pub fn batch_score(inputs: &[ScoreInput]) -> Vec<AttemptScore> {
    inputs
        .par_iter()
        .map(|input| score(input.input, input.truth, input.previous))
        .collect()
}
