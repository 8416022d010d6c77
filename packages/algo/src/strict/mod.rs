//! Strict Order Enforcement
//!
//! Post-processes the isotonic projector's output from non-decreasing into
//! strictly increasing with a minimum gap of one grid step, while staying
//! inside each point's anchor band.
//!
//! Forward pass: whenever a point fails to clear its predecessor, raise it
//! to `predecessor + 5`, capped at `anchor + 20`. When the cap blocks the
//! raise, cascade backward instead: lower earlier values by one step each
//! (respecting their own lower bounds and predecessors) until room appears
//! or nothing can move. A final clamp pass guarantees band membership and
//! applies a last-resort `predecessor + 5` fix for anything still out of
//! order.
//!
//! Sentinel points (anchor == 0) are invisible on both sides: neighbors
//! compare against their nearest non-sentinel neighbors, never through the
//! sentinel. The routine never panics; infeasible constraints degrade to
//! the best clamped approximation.

use crate::grid::{band_hi, band_lo, snap};
use crate::types::{GRID_STEP, SENTINEL};

/// Enforce strict ascending order (minimum gap of one grid step) over the
/// non-sentinel points of `values`, read in `order`. Bounds derive from
/// `anchors` (+/-20, clamped to [0, 100]); sentinel anchors pass their
/// value through untouched.
pub fn enforce_strict(values: &[i32], anchors: &[i32], order: &[usize]) -> Vec<i32> {
    let mut out = values.to_vec();

    // Non-sentinel positions in required order
    let active: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&i| i < anchors.len() && anchors[i] != SENTINEL)
        .collect();
    if active.len() < 2 {
        return out;
    }

    // Forward pass
    for k in 1..active.len() {
        let i = active[k];
        let prev = active[k - 1];
        if out[i] > out[prev] {
            continue;
        }

        let hi = band_hi(anchors[i]);
        let mut candidate = snap(out[prev] + GRID_STEP);
        while candidate > hi {
            if !lower_one(&mut out, &active, anchors, k - 1) {
                break;
            }
            candidate = snap(out[prev] + GRID_STEP);
        }
        out[i] = candidate.min(hi).max(band_lo(anchors[i]));
    }

    // Final clamp/ordering safety pass
    for k in 0..active.len() {
        let i = active[k];
        out[i] = snap(out[i].clamp(band_lo(anchors[i]), band_hi(anchors[i])));
        if k > 0 {
            let prev = active[k - 1];
            if out[i] <= out[prev] {
                out[i] = (out[prev] + GRID_STEP).min(band_hi(anchors[i]));
            }
        }
    }

    out
}

/// Lower the value at active position `k` by one grid step, recursively
/// lowering its predecessors first when they are in the way. Returns false
/// when no room can be made without breaking a lower bound.
fn lower_one(out: &mut [i32], active: &[usize], anchors: &[i32], k: usize) -> bool {
    let i = active[k];
    let lowered = out[i] - GRID_STEP;
    if lowered < band_lo(anchors[i]) {
        return false;
    }
    if k > 0 && lowered <= out[active[k - 1]] {
        if !lower_one(out, active, anchors, k - 1) {
            return false;
        }
        if lowered <= out[active[k - 1]] {
            return false;
        }
    }
    out[i] = lowered;
    true
}
