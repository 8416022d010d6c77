//! # shotrecall-algo - Constrained Value Engine
//!
//! Pure-Rust core for a shot-percentage recall trainer. The user enters an
//! anchor percentage per shot and flipper side, the engine derives a hidden
//! "truth" sequence near those anchors, perturbs it over time, and scores
//! recall attempts against it.
//!
//! Every legal value lives on a 5-grid in [0, 100]; the value 0 is the
//! sentinel for "not reachable from this side" and is exempt from all band
//! and ordering rules. Non-sentinel hidden values must stay within +/-20 of
//! their anchor and strictly respect a per-side order permutation.
//!
//! ## Design goals
//!
//! - **Pure Rust** - no binding or I/O dependencies, usable from any caller
//! - **Total functions** - numeric edge cases degrade to clamped output,
//!   never to a panic; a training session must not die mid-run
//! - **Fully tested** - every module carries its own unit-test suite, and
//!   the crate-level invariants are property-tested
//!
//! ## Module structure
//!
//! - [`grid`] - 5-grid quantization and anchor-band clamping
//! - [`isotonic`] - box-constrained PAVA projection onto monotone sequences
//! - [`strict`] - strict-order enforcement with backward cascade
//! - [`truth`] - hidden-truth generation from anchors
//! - [`drift`] - bounded periodic perturbation of the hidden truth
//! - [`scorer`] - recall-attempt scoring with the adjustment-direction rule
//! - [`types`] - public types and constants
//!
//! ## Usage example
//!
//! ```rust
//! use shotrecall_algo::{order_for_side, DriftEngine, Side, TruthGenerator};
//!
//! let anchors = vec![20, 50, 0, 80];
//! let order = order_for_side(&anchors, Side::Left);
//!
//! let mut gen = TruthGenerator::with_seed(7);
//! let hidden = gen.generate(&anchors, &order, Side::Left, 2);
//!
//! let mut drift = DriftEngine::with_seed(8);
//! let drifted = drift.drift(&hidden, &anchors, &order, Side::Left, 1);
//! assert_eq!(drifted[2], 0); // sentinel never moves
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod drift;
pub mod grid;
pub mod isotonic;
pub mod scorer;
pub mod strict;
pub mod truth;
pub mod types;

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export all public types and constants
pub use types::*;

/// Re-export grid quantization
pub use grid::{band_hi, band_lo, clamp_band, quantize, snap};

/// Re-export the bounded isotonic projector
pub use isotonic::project;

/// Re-export the strict-order enforcer
pub use strict::enforce_strict;

/// Re-export hidden-truth generation
pub use truth::{order_for_side, TruthGenerator};

/// Re-export the drift engine
pub use drift::DriftEngine;

/// Re-export scoring
pub use scorer::{batch_score, score};
