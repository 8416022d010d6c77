//! Common Types and Constants
//!
//! Shared data structures used across all engine modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Value grid step: every legal value is a multiple of 5
pub const GRID_STEP: i32 = 5;

/// Minimum legal value
pub const VALUE_MIN: i32 = 0;

/// Maximum legal value
pub const VALUE_MAX: i32 = 100;

/// Half-width of the legal band around an anchor
pub const ANCHOR_BAND: i32 = 20;

/// Sentinel value: "this shot is not reachable from this side"
pub const SENTINEL: i32 = 0;

/// Maximum random step budget, in grid units (initial offset and drift)
pub const MAX_STEP_BUDGET: u32 = 4;

/// Base penalty for a wrong or missing directional correction
pub const BASE_ADJUST_PENALTY: i32 = 5;

/// Cap on the directional-correction penalty
pub const MAX_ADJUST_PENALTY: i32 = 25;

// ==================== Side ====================

/// Flipper side a shot is attempted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

// ==================== Scoring Types ====================

/// Absolute-error severity bucket for a recall attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Perfect,
    Slight,
    Fairly,
    Very,
}

impl Severity {
    /// Classify an absolute error. Grid inputs land exactly on the
    /// 0 / 5 / 10 / >=15 buckets; off-grid errors fall into the
    /// enclosing closed range so the function stays total.
    pub fn from_abs_error(abs: i32) -> Self {
        match abs {
            0 => Severity::Perfect,
            1..=5 => Severity::Slight,
            6..=10 => Severity::Fairly,
            _ => Severity::Very,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Perfect => "perfect",
            Severity::Slight => "slight",
            Severity::Fairly => "fairly",
            Severity::Very => "very",
        }
    }
}

/// Signed direction of a recall attempt relative to the truth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Perfect,
    Early,
    Late,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Perfect => "perfect",
            Direction::Early => "early",
            Direction::Late => "late",
        }
    }
}

/// Correction direction required by the previous attempt on the same
/// item and side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdjustDirection {
    /// Previous attempt was too high; this one must be strictly lower
    Lower,
    /// Previous attempt was too low; this one must be strictly higher
    Higher,
}

/// The previous attempt for the same item and side, as the scorer needs it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviousAttempt {
    /// Value the user entered on the previous attempt
    pub input: i32,
    /// Signed delta (input - truth) of the previous attempt
    pub delta: i32,
}

/// Full scoring result for one recall attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptScore {
    /// Signed error (input - truth)
    pub delta: i32,
    /// Absolute error
    pub abs_error: i32,
    /// Severity bucket of the absolute error
    pub severity: Severity,
    /// Direction label (perfect / early / late)
    pub label: Direction,
    /// Points before any adjustment penalty
    pub base_points: i32,
    /// Adjustment penalty applied (0 when none)
    pub penalty: i32,
    /// Final points awarded
    pub points: i32,
    /// Whether a directional correction was required by the previous attempt
    pub adjust_required: bool,
    /// The required correction direction, when one existed
    pub required_direction: Option<AdjustDirection>,
    /// Whether the required correction was made (None when none was required)
    pub adjust_correct: Option<bool>,
}

/// Input for batch scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    /// The attempted value
    pub input: i32,
    /// The hidden truth at submission time
    pub truth: i32,
    /// The previous attempt for the same item and side, if any
    pub previous: Option<PreviousAttempt>,
}

// ==================== Tests ====================
