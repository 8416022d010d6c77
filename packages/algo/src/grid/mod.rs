//! Grid Quantization
//!
//! Numeric hygiene for the 5-grid value domain.
//!
//! Functions:
//! - Quantization of real inputs onto the 5-grid in [0, 100]
//! - Anchor-band edges and clamping (+/-20 around the anchor)
//!
//! All functions are total: non-finite input maps to the minimum value
//! instead of propagating garbage.

use crate::types::{ANCHOR_BAND, GRID_STEP, VALUE_MAX, VALUE_MIN};

/// Round a real number to the nearest multiple of 5, clamped to [0, 100].
///
/// Total over all reals; NaN and infinities map to 0.
pub fn quantize(x: f64) -> i32 {
    if !x.is_finite() {
        return VALUE_MIN;
    }
    let stepped = (x / GRID_STEP as f64).round() * GRID_STEP as f64;
    stepped.clamp(VALUE_MIN as f64, VALUE_MAX as f64) as i32
}

/// Integer variant of [`quantize`]: snap onto the grid and clamp.
pub fn snap(v: i32) -> i32 {
    quantize(v as f64)
}

/// Lower edge of the legal band around `anchor`, clamped to [0, 100]
pub fn band_lo(anchor: i32) -> i32 {
    (anchor - ANCHOR_BAND).max(VALUE_MIN)
}

/// Upper edge of the legal band around `anchor`, clamped to [0, 100]
pub fn band_hi(anchor: i32) -> i32 {
    (anchor + ANCHOR_BAND).min(VALUE_MAX)
}

/// Clamp `v` into the legal band around `anchor`
pub fn clamp_band(v: i32, anchor: i32) -> i32 {
    v.clamp(band_lo(anchor), band_hi(anchor))
}
