//! Session configuration.

use serde::{Deserialize, Serialize};

use shotrecall_algo::MAX_STEP_BUDGET;

/// Tuning knobs for a training session. All fields are sanitized through
/// [`SessionConfig::normalized`] before use, so hostile or accidental
/// out-of-range values degrade to the nearest legal setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Grid steps the hidden truth may start away from its anchor (0..=4)
    pub initial_step_budget: u32,
    /// Drift every N submissions; 0 disables drift entirely
    pub drift_cadence: u32,
    /// Maximum grid steps per drift cycle; floored into 0..=4
    pub drift_max_steps: f64,
    /// Fixed RNG seed for reproducible sessions; None seeds from time
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_step_budget: 2,
            drift_cadence: 5,
            drift_max_steps: 1.0,
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Clamp every field into its legal range.
    pub fn normalized(&self) -> Self {
        Self {
            initial_step_budget: self.initial_step_budget.min(MAX_STEP_BUDGET),
            drift_cadence: self.drift_cadence,
            drift_max_steps: if self.drift_max_steps.is_finite() {
                self.drift_max_steps.clamp(0.0, MAX_STEP_BUDGET as f64)
            } else {
                0.0
            },
            seed: self.seed,
        }
    }

    /// Whole grid steps available to one drift cycle.
    pub fn drift_steps(&self) -> u32 {
        if self.drift_max_steps.is_finite() {
            self.drift_max_steps.floor().clamp(0.0, MAX_STEP_BUDGET as f64) as u32
        } else {
            0
        }
    }
}
