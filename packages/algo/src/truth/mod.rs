//! Hidden Truth Generation
//!
//! Builds the initial hidden sequence for one side from the user-entered
//! anchors: a bounded random offset per anchor, then isotonic projection
//! and strict-order enforcement so the sequence honors the session's order
//! permutation from the first attempt on.
//!
//! Called once per side at session start. The anchors themselves are kept
//! by the caller as the frozen "base" that later bounds drift.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::grid::{band_hi, band_lo, clamp_band, snap};
use crate::isotonic::project;
use crate::strict::enforce_strict;
use crate::types::{Side, GRID_STEP, MAX_STEP_BUDGET, SENTINEL};

/// The session-frozen order permutation for one side.
///
/// [`Side::Left`]: item indices sorted by anchor ascending (stable on
/// ties); hidden values read in it are strictly increasing.
/// [`Side::Right`]: the same sort reversed (the mirror convention); hidden
/// values read in it are strictly decreasing. Sentinel indices stay in the
/// permutation and are masked downstream.
pub fn order_for_side(anchors: &[i32], side: Side) -> Vec<usize> {
    let mut order: Vec<usize> = (0..anchors.len()).collect();
    order.sort_by_key(|&i| (anchors[i], i));
    if side == Side::Right {
        order.reverse();
    }
    order
}

/// The order in which the ascending projection/enforcement runs for a
/// side's permutation: the permutation itself for the left side, its
/// reverse for the mirrored right side.
pub(crate) fn ascending_view(order: &[usize], side: Side) -> Vec<usize> {
    match side {
        Side::Left => order.to_vec(),
        Side::Right => order.iter().rev().copied().collect(),
    }
}

/// Re-run projection and strict enforcement over a candidate sequence with
/// bounds derived from `anchors`. Shared by generation and drift.
pub(crate) fn reproject(
    candidate: &[i32],
    anchors: &[i32],
    order: &[usize],
    side: Side,
) -> Vec<i32> {
    let sentinel: Vec<bool> = anchors.iter().map(|&a| a == SENTINEL).collect();
    let lo: Vec<i32> = anchors.iter().map(|&a| band_lo(a)).collect();
    let hi: Vec<i32> = anchors.iter().map(|&a| band_hi(a)).collect();
    let asc = ascending_view(order, side);
    let projected = project(candidate, &lo, &hi, &asc, &sentinel);
    enforce_strict(&projected, anchors, &asc)
}

/// Hidden-truth generator owning its RNG
///
/// Usage scenarios:
/// - Session start: one `generate` call per side
/// - Deterministic tests: construct with [`TruthGenerator::with_seed`]
#[derive(Debug)]
pub struct TruthGenerator {
    rng: ChaCha8Rng,
}

impl TruthGenerator {
    /// Create a generator seeded from system time
    pub fn new() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::with_seed(seed)
    }

    /// Create a generator with a specific seed (for reproducibility)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate the hidden sequence for one side.
    ///
    /// Per non-sentinel anchor: draw an offset of `-budget..=budget` grid
    /// steps, clamp into the anchor band intersected with [0, 100], snap to
    /// the grid. Sentinel anchors map to sentinel hidden values
    /// unconditionally. The candidate then runs through projection and
    /// strict enforcement with anchor-derived bounds in `order`.
    pub fn generate(
        &mut self,
        anchors: &[i32],
        order: &[usize],
        side: Side,
        step_budget: u32,
    ) -> Vec<i32> {
        let budget = step_budget.min(MAX_STEP_BUDGET) as i32;

        let mut candidate = Vec::with_capacity(anchors.len());
        for &anchor in anchors {
            if anchor == SENTINEL {
                candidate.push(SENTINEL);
                continue;
            }
            let steps = if budget == 0 {
                0
            } else {
                self.rng.gen_range(-budget..=budget)
            };
            candidate.push(snap(clamp_band(anchor + steps * GRID_STEP, anchor)));
        }

        reproject(&candidate, anchors, order, side)
    }
}

impl Default for TruthGenerator {
    fn default() -> Self {
        Self::new()
    }
}
