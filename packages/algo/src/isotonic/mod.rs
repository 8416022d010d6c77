//! Bounded Isotonic Projection
//!
//! Pool-adjacent-violators (PAVA) with box constraints over a permuted
//! order, skipping sentinel points.
//!
//! Given a target sequence, per-point bounds and the permutation that
//! defines the required ascending order, returns the closest non-decreasing
//! sequence (in the permuted order) that honors the bounds. Sentinel points
//! pass through unchanged and never participate in monotonic comparisons.
//!
//! The merge loop keeps a stack of growing blocks: each non-sentinel point
//! starts as its own block (value clamped into its box and snapped to the
//! grid); while the two most recent blocks violate non-decreasing order
//! they merge into one block whose bound range is the intersection of the
//! two and whose value is the snapped, clamped mean of the merged raw
//! inputs. This is the classic least-squares greedy PAVA result.

use crate::grid::snap;

/// One block on the PAVA stack
#[derive(Debug, Clone, Copy)]
struct Block {
    /// Intersected lower bound
    lo: i32,
    /// Intersected upper bound
    hi: i32,
    /// Current block value (clamped, on-grid)
    value: i32,
    /// Sum of the raw (pre-clamp) inputs merged into this block
    raw_sum: f64,
    /// Number of points merged into this block
    count: usize,
}

impl Block {
    fn resolve(raw_sum: f64, count: usize, lo: i32, hi: i32) -> i32 {
        let mean = raw_sum / count.max(1) as f64;
        snap(mean.round() as i32).clamp(lo, hi)
    }
}

/// Project `values` onto the closest bounded non-decreasing sequence in
/// `order`, leaving sentinel points untouched.
///
/// All slices share one length; `order` is a permutation of indices.
/// Infeasible bound intersections (lb > ub) are clamped defensively
/// rather than rejected; the function never panics on numeric input.
pub fn project(
    values: &[i32],
    lo: &[i32],
    hi: &[i32],
    order: &[usize],
    sentinel: &[bool],
) -> Vec<i32> {
    let mut out = values.to_vec();

    // Positions that actually take part, in required order
    let active: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&i| i < values.len() && !sentinel[i])
        .collect();
    if active.is_empty() {
        return out;
    }

    let mut blocks: Vec<Block> = Vec::with_capacity(active.len());
    for &i in &active {
        let (b_lo, b_hi) = feasible(lo[i], hi[i]);
        let raw = values[i] as f64;
        blocks.push(Block {
            lo: b_lo,
            hi: b_hi,
            value: Block::resolve(raw, 1, b_lo, b_hi),
            raw_sum: raw,
            count: 1,
        });

        // Merge leftward while the last two blocks violate the order
        while blocks.len() >= 2 {
            let n = blocks.len();
            if blocks[n - 2].value <= blocks[n - 1].value {
                break;
            }
            let right = blocks[n - 1];
            let left = blocks[n - 2];
            blocks.truncate(n - 2);
            let (m_lo, m_hi) = feasible(left.lo.max(right.lo), left.hi.min(right.hi));
            let raw_sum = left.raw_sum + right.raw_sum;
            let count = left.count + right.count;
            blocks.push(Block {
                lo: m_lo,
                hi: m_hi,
                value: Block::resolve(raw_sum, count, m_lo, m_hi),
                raw_sum,
                count,
            });
        }
    }

    // Expand blocks back into their constituent positions
    let mut cursor = 0usize;
    for block in &blocks {
        for _ in 0..block.count {
            let i = active[cursor];
            let (p_lo, p_hi) = feasible(lo[i], hi[i]);
            out[i] = snap(block.value).clamp(p_lo, p_hi);
            cursor += 1;
        }
    }

    out
}

/// Collapse an infeasible range (lb > ub) instead of failing
fn feasible(lo: i32, hi: i32) -> (i32, i32) {
    if lo > hi {
        (hi, hi)
    } else {
        (lo, hi)
    }
}
